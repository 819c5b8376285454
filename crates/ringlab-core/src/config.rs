// crates/ringlab-core/src/config.rs

use serde::Serialize;

use crate::light::LightSource;

/// Bench configuration for a generation run. Read-only while a run is in
/// flight; every run constructs its results from scratch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Config {
    /// Instrument resolution in cm (finest increment the vernier reports).
    pub least_count: f64,
    /// Plano-convex lens radius of curvature in cm. Display metadata.
    pub radius_of_curvature: f64,
    /// Lamp under the microscope. Display metadata.
    pub light: LightSource,
}

/// Reference bench: LC 0.005 cm, R 50 cm, sodium lamp.
pub fn default_config() -> Config {
    Config {
        least_count: 0.005,
        radius_of_curvature: 50.0,
        light: LightSource::Sodium,
    }
}
