//! Percentile-conditioned average of positive stable draws.
//!
//! Draw a pool from the unit-scale stable law, keep the strictly positive
//! draws, sort them, and average the order statistics inside the bracket.
//! Percentile indices are taken over the positive subset, not over the whole
//! pool.

use rand::Rng;

use crate::bracket::PercentileBracket;
use crate::matrix::mean;
use crate::stable::{StableError, StableSampler};

/// Pool size used when none is configured.
pub const DEFAULT_POOL_SIZE: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitAverageEstimator {
    pool_size: usize,
}

impl Default for UnitAverageEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE)
    }
}

impl UnitAverageEstimator {
    pub fn new(pool_size: usize) -> Self {
        Self { pool_size }
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Mean of the positive order statistics inside `bracket`.
    ///
    /// Returns 0 when the selected slice is empty, e.g. a bracket narrower
    /// than one order statistic of a small pool.
    pub fn estimate<R: Rng + ?Sized>(
        &self,
        bracket: PercentileBracket,
        alpha: f64,
        rng: &mut R,
    ) -> Result<f64, StableError> {
        let sampler = StableSampler::standard(alpha)?;
        let pool = sampler.sample_vec(rng, self.pool_size);
        Ok(average_in_bracket(pool, bracket))
    }
}

/// Filter to positive values, sort, and average the bracket's slice.
pub fn average_in_bracket(mut pool: Vec<f64>, bracket: PercentileBracket) -> f64 {
    pool.retain(|&x| x > 0.0);
    pool.sort_unstable_by(f64::total_cmp);
    let range = bracket.index_range(pool.len());
    mean(&pool[range]).unwrap_or(0.0)
}
