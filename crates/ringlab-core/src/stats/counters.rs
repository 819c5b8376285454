/// Rejection-loop tallies for one sampler.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    /// Attempts across all orders generated by this sampler.
    pub attempts: u64,
    /// Attempts rejected on the ratio prefix test.
    pub mu_rejects: u64,
    /// Attempts rejected on the graduation overlap test.
    pub overlap_rejects: u64,
    /// Accepted configurations (one per generated order).
    pub accepted: u64,
}
