//! Monte Carlo one-touch probability for a driftless alpha-stable walk.
//!
//! Each path is the cumulative sum of `ceil(horizon / dt)` i.i.d. increments
//! drawn from the stable law with scale `dt^(1/α)`. A path touches the
//! barrier when its running minimum is at or below it. The estimate is the
//! percentage of touching paths; discretization bias is not corrected, so a
//! smaller `dt` and more paths trade compute for accuracy.
//!
//! Paths are simulated in fixed-size chunks. Every chunk owns a
//! preallocated [`SampleMatrix`] and an RNG derived from the caller's
//! [`RngHierarchy`] by chunk index, so serial and parallel runs produce the
//! same touch count.

use rayon::prelude::*;

use crate::matrix::{count_at_or_below, SampleMatrix};
use crate::rng::RngHierarchy;
use crate::stable::{StableError, StableSampler};

/// Paths per chunk.
pub const DEFAULT_CHUNK_PATHS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSimulator {
    path_count: usize,
    dt: f64,
    chunk_paths: usize,
    parallel: bool,
}

impl PathSimulator {
    pub fn new(path_count: usize, dt: f64) -> Self {
        Self {
            path_count,
            dt,
            chunk_paths: DEFAULT_CHUNK_PATHS,
            parallel: true,
        }
    }

    /// Enables or disables parallel chunk execution.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Overrides the chunk size (minimum 1).
    pub fn with_chunk_paths(mut self, chunk_paths: usize) -> Self {
        self.chunk_paths = chunk_paths.max(1);
        self
    }

    pub fn path_count(&self) -> usize {
        self.path_count
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of discrete steps covering `horizon`.
    pub fn steps_for(&self, horizon: f64) -> usize {
        (horizon / self.dt).ceil() as usize
    }

    /// Percentage in `[0, 100]` of paths whose running minimum over
    /// `[0, horizon]` is at or below `barrier`.
    ///
    /// A non-positive horizon returns exactly 0 without sampling.
    pub fn one_touch_probability(
        &self,
        barrier: f64,
        horizon: f64,
        alpha: f64,
        seeds: &RngHierarchy,
    ) -> Result<f64, StableError> {
        if !(horizon > 0.0) || self.path_count == 0 {
            return Ok(0.0);
        }
        let steps = self.steps_for(horizon);
        let sampler = StableSampler::new(alpha, self.dt.powf(1.0 / alpha))?;

        let n_chunks = self.path_count.div_ceil(self.chunk_paths);
        let touched: usize = if self.parallel {
            (0..n_chunks)
                .into_par_iter()
                .map(|c| self.touches_in_chunk(c, steps, barrier, &sampler, seeds))
                .sum()
        } else {
            (0..n_chunks)
                .map(|c| self.touches_in_chunk(c, steps, barrier, &sampler, seeds))
                .sum()
        };

        tracing::trace!(barrier, horizon, alpha, steps, touched, "one-touch simulation");
        Ok(touched as f64 / self.path_count as f64 * 100.0)
    }

    fn touches_in_chunk(
        &self,
        chunk: usize,
        steps: usize,
        barrier: f64,
        sampler: &StableSampler,
        seeds: &RngHierarchy,
    ) -> usize {
        let start = chunk * self.chunk_paths;
        let rows = self.chunk_paths.min(self.path_count - start);
        let mut rng = seeds.rng_for("paths", &[chunk as u64]);

        let mut increments = SampleMatrix::zeros(rows, steps);
        sampler.fill(&mut rng, increments.as_mut_slice());
        increments.cumsum_rows();
        count_at_or_below(&increments.row_minima(), barrier)
    }
}
