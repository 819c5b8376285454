use serde::Serialize;

use crate::scale::quantize::MAIN_SCALE_DIV;

/// One vernier observation: main-scale reading plus vernier count.
/// Contract: `total` reconstructs as `msr + vsr * least_count` at the
/// least count's display precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScaleReading {
    /// Main-scale reading in cm, a multiple of the 0.05 cm graduation.
    pub msr: f64,
    /// Vernier divisions past the graduation. Never negative.
    pub vsr: u32,
    /// Reconstructed position in cm.
    pub total: f64,
}

impl ScaleReading {
    /// Integer graduation index. Exact, so two readings compare without
    /// float equality.
    pub fn graduation(&self) -> i64 {
        (self.msr / MAIN_SCALE_DIV).round() as i64
    }
}
