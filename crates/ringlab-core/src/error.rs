use thiserror::Error;

pub type Result<T> = std::result::Result<T, RingError>;

#[derive(Debug, Error)]
pub enum RingError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("order {order}: sampling exhausted after {attempts} attempts")]
    Exhausted { order: u8, attempts: u32 },
}
