use rand::Rng;

/// Uniform entropy source behind the rejection sampler. Injectable so tests
/// can drive the sampler with seeded or scripted sequences.
pub trait Entropy {
    /// Uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Uniform draw in `[lo, hi)`.
    fn uniform_in(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.uniform()
    }
}

/// Every `rand` generator is an entropy source.
impl<R: Rng> Entropy for R {
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}
