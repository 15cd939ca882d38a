//! Symmetric alpha-stable variates (Chambers–Mallows–Stuck).
//!
//! With `U ~ Uniform(-π/2, π/2)` and `W ~ Exp(1)`, the symmetric (β = 0)
//! stable law with index α ≠ 1 is
//!
//! ```text
//! X = sin(αU) / cos(U)^(1/α) · (cos((1 - α)U) / W)^((1 - α)/α)
//! ```
//!
//! and for α = 1 (Cauchy) the formula collapses to `X = tan(U)`. Samples are
//! multiplied by `scale`; there is no location shift.

use std::f64::consts::PI;

use rand::distributions::{Distribution, Open01};
use rand::Rng;
use rand_distr::Exp1;
use serde::Serialize;
use thiserror::Error;

use crate::matrix::SampleMatrix;

/// Invalid stable-law parameters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StableError {
    #[error("stability index alpha must be in (0, 2], got {0}")]
    Alpha(f64),
    #[error("scale must be finite and > 0, got {0}")]
    Scale(f64),
}

/// Symmetric alpha-stable distribution with zero location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StableSampler {
    alpha: f64,
    scale: f64,
}

impl StableSampler {
    pub fn new(alpha: f64, scale: f64) -> Result<Self, StableError> {
        if !(alpha > 0.0 && alpha <= 2.0) {
            return Err(StableError::Alpha(alpha));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(StableError::Scale(scale));
        }
        Ok(Self { alpha, scale })
    }

    /// Unit-scale sampler.
    pub fn standard(alpha: f64) -> Result<Self, StableError> {
        Self::new(alpha, 1.0)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Fill `buf` with independent draws.
    pub fn fill<R: Rng + ?Sized>(&self, rng: &mut R, buf: &mut [f64]) {
        for v in buf.iter_mut() {
            *v = self.sample(rng);
        }
    }

    /// Flat batch of `count` draws.
    pub fn sample_vec<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<f64> {
        let mut out = vec![0.0; count];
        self.fill(rng, &mut out);
        out
    }

    /// `rows × cols` batch of draws.
    pub fn sample_matrix<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        rows: usize,
        cols: usize,
    ) -> SampleMatrix {
        let mut m = SampleMatrix::zeros(rows, cols);
        self.fill(rng, m.as_mut_slice());
        m
    }

    fn standard_variate<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // Open01 keeps U strictly inside (-π/2, π/2), so cos(U) > 0.
        let u01: f64 = rng.sample(Open01);
        let u = PI * (u01 - 0.5);

        if self.alpha == 1.0 {
            return u.tan();
        }

        let w: f64 = rng.sample(Exp1);
        let a = self.alpha;
        let lead = (a * u).sin() / u.cos().powf(1.0 / a);
        let tail = (((1.0 - a) * u).cos() / w).powf((1.0 - a) / a);
        lead * tail
    }
}

impl Distribution<f64> for StableSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.scale * self.standard_variate(rng)
    }
}
