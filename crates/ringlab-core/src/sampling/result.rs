use serde::Serialize;

use crate::sampling::order::Order;
use crate::scale::reading::ScaleReading;

/// One medium's ring, measured at both rims.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RingMeasurement {
    pub left: ScaleReading,
    pub right: ScaleReading,
    /// Squared ring diameter from the quantized totals, rounded to 5 decimals.
    pub d_squared: f64,
}

/// Both media at one interference order, plus the derived ratio.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OrderReading {
    pub order: Order,
    /// Reference medium: the liquid film under the lens.
    pub liquid: RingMeasurement,
    /// Comparison medium: the air film.
    pub air: RingMeasurement,
    /// `air.d_squared / liquid.d_squared`, rounded to 5 decimals.
    pub mu: f64,
}

/// Terminal artifact of one generation run. Recomputed fresh every run,
/// never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ExperimentResult {
    pub order2: OrderReading,
    pub order4: OrderReading,
    /// Mean of the two per-order estimates, rounded to 5 decimals.
    pub mu: f64,
}
