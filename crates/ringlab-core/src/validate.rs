use crate::config::Config;
use crate::error::{Result, RingError};
use crate::scale::quantize::MAIN_SCALE_DIV;

pub fn validate_least_count(least_count: f64) -> Result<()> {
    // Must be checked before any sampling; the quantizer divides by it.
    if !least_count.is_finite() || least_count <= 0.0 {
        return Err(RingError::Validation("least_count must be positive".into()));
    }
    // A vernier coarser than the main scale cannot resolve a graduation.
    if least_count > MAIN_SCALE_DIV {
        return Err(RingError::Validation(
            "least_count must not exceed the 0.05 cm main-scale division".into(),
        ));
    }
    Ok(())
}

pub fn validate_config(c: &Config) -> Result<()> {
    validate_least_count(c.least_count)?;

    if !c.radius_of_curvature.is_finite() || c.radius_of_curvature <= 0.0 {
        return Err(RingError::Validation(
            "radius_of_curvature must be positive".into(),
        ));
    }

    Ok(())
}
