// crates/ringlab-core/src/sampling/sampler.rs

use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{Result, RingError};
use crate::sampling::entropy::Entropy;
use crate::sampling::order::Order;
use crate::sampling::result::{ExperimentResult, OrderReading, RingMeasurement};
use crate::scale::quantize::{quantize, round_to, snap_to_step};
use crate::stats::counters::Counters;
use crate::validate::validate_config;

/// Refractive index the sampler steers toward.
pub const TARGET_MU: f64 = 1.382;

/// Acceptance is a prefix test on the 5-decimal display string, not a
/// numeric tolerance; 1.37999... and 1.38000... land on opposite sides.
pub const MU_PREFIX: &str = "1.38";

/// Hard cap on rejection-sampling attempts per order.
pub const MAX_ATTEMPTS: u32 = 2000;

/// Uniform jitter applied to the per-order baseline diameter, in cm.
const DIAMETER_JITTER: f64 = 0.05;

/// Ring centers sit in [10.0, 10.5) cm on the scale.
const CENTER_BASE: f64 = 10.0;
const CENTER_SPAN: f64 = 0.5;

/// The air-film ring is pushed further along the scale so the two media
/// occupy distinguishable regions.
const AIR_CENTER_GAP: f64 = 0.15;
const AIR_CENTER_SPAN: f64 = 0.1;

/// Constrained reading generator. Owns a validated bench configuration and
/// the rejection-loop tallies; entropy is supplied per call.
#[derive(Debug)]
pub struct Sampler {
    cfg: Config,
    pub stats: Counters,
}

impl Sampler {
    pub fn new(cfg: Config) -> Result<Self> {
        validate_config(&cfg)?;
        Ok(Self {
            cfg,
            stats: Counters::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Rejection-sample one interference order. First configuration that
    /// passes every constraint wins; no attempt is made to rank candidates.
    pub fn generate_order<E: Entropy + ?Sized>(
        &mut self,
        order: Order,
        entropy: &mut E,
    ) -> Result<OrderReading> {
        let lc = self.cfg.least_count;

        for _ in 0..MAX_ATTEMPTS {
            self.stats.attempts += 1;

            let jitter = entropy.uniform_in(-DIAMETER_JITTER, DIAMETER_JITTER);
            let liquid_d = snap_to_step(order.base_diameter() + jitter, lc);
            let air_d = snap_to_step(liquid_d * TARGET_MU.sqrt(), lc);

            let candidate = (air_d * air_d) / (liquid_d * liquid_d);
            if !format!("{candidate:.5}").starts_with(MU_PREFIX) {
                self.stats.mu_rejects += 1;
                continue;
            }

            let liquid_center = CENTER_BASE + entropy.uniform() * CENTER_SPAN;
            let air_center = liquid_center + AIR_CENTER_GAP + entropy.uniform() * AIR_CENTER_SPAN;

            let liquid = measure(liquid_center, liquid_d, lc);
            let air = measure(air_center, air_d, lc);

            // Both rims must land on distinct main-scale graduations, or a
            // reader could not tell which graduation a reading belongs to.
            if liquid.left.graduation() == air.left.graduation()
                || liquid.right.graduation() == air.right.graduation()
            {
                self.stats.overlap_rejects += 1;
                continue;
            }

            // The reported ratio comes from the display-rounded totals, so it
            // can differ in the last decimals from the candidate above.
            let mu = round_to(air.d_squared / liquid.d_squared, 5);

            self.stats.accepted += 1;
            trace!(order = order.n(), mu, "order accepted");
            return Ok(OrderReading {
                order,
                liquid,
                air,
                mu,
            });
        }

        debug!(order = order.n(), attempts = MAX_ATTEMPTS, "sampling exhausted");
        Err(RingError::Exhausted {
            order: order.n(),
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Full run: order 2 then order 4 from independent draws, averaged.
    /// Either order exhausting its attempt bound means no final value.
    pub fn run<E: Entropy + ?Sized>(&mut self, entropy: &mut E) -> Result<ExperimentResult> {
        let order2 = self.generate_order(Order::Two, entropy)?;
        let order4 = self.generate_order(Order::Four, entropy)?;

        let mu = round_to((order2.mu + order4.mu) / 2.0, 5);
        Ok(ExperimentResult { order2, order4, mu })
    }
}

fn measure(center: f64, diameter: f64, least_count: f64) -> RingMeasurement {
    let left = quantize(center + diameter / 2.0, least_count);
    let right = quantize(center - diameter / 2.0, least_count);
    let d = left.total - right.total;
    RingMeasurement {
        left,
        right,
        d_squared: round_to(d * d, 5),
    }
}
