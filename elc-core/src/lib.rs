//! ELC Core — alpha-stable sampling and the Monte Carlo pieces of the
//! expected-loss-contribution model.
//!
//! This crate contains the numerical building blocks:
//! - Deterministic seed hierarchy for independent per-task random streams
//! - Preallocated sample buffers with row reductions
//! - Symmetric alpha-stable sampler (Chambers–Mallows–Stuck)
//! - Percentile brackets and the positive-tail unit average
//! - One-touch barrier probability for stable random walks
//! - Escalating oracle cost schedule (round solver and PnL)

pub mod bracket;
pub mod matrix;
pub mod oracle;
pub mod path;
pub mod percentile;
pub mod rng;
pub mod stable;

pub use bracket::{BracketError, PercentileBracket, FULL_SWEEP_BRACKETS};
pub use matrix::SampleMatrix;
pub use oracle::OracleSchedule;
pub use path::PathSimulator;
pub use percentile::UnitAverageEstimator;
pub use rng::RngHierarchy;
pub use stable::{StableError, StableSampler};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything a worker thread touches is Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<RngHierarchy>();
        require_sync::<RngHierarchy>();
        require_send::<StableSampler>();
        require_sync::<StableSampler>();
        require_send::<SampleMatrix>();
        require_sync::<SampleMatrix>();
        require_send::<PercentileBracket>();
        require_sync::<PercentileBracket>();
        require_send::<UnitAverageEstimator>();
        require_sync::<UnitAverageEstimator>();
        require_send::<PathSimulator>();
        require_sync::<PathSimulator>();
        require_send::<OracleSchedule>();
        require_sync::<OracleSchedule>();
    }
}
