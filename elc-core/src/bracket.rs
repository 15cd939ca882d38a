//! Percentile brackets over the positive-sample distribution.

use serde::Serialize;
use thiserror::Error;

/// Number of one-percent brackets in a full sweep.
pub const FULL_SWEEP_BRACKETS: u32 = 100;

/// Bracket bounds violate `0 <= lower < upper <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Invalid range. Use 0 <= lower < upper <= 100 (got {lower}, {upper})")]
pub struct BracketError {
    pub lower: f64,
    pub upper: f64,
}

/// A `[lower, upper)` percentile window, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileBracket {
    lower: f64,
    upper: f64,
}

impl PercentileBracket {
    /// Validate and build a bracket. NaN bounds are rejected.
    pub fn new(lower: f64, upper: f64) -> Result<Self, BracketError> {
        if 0.0 <= lower && lower < upper && upper <= 100.0 {
            Ok(Self { lower, upper })
        } else {
            Err(BracketError { lower, upper })
        }
    }

    /// The `i`-th one-percent bracket `[i, i + 1)`, for `i` in `0..100`.
    pub fn one_percent(i: u32) -> Self {
        debug_assert!(i < FULL_SWEEP_BRACKETS);
        let lower = f64::from(i);
        Self {
            lower,
            upper: lower + 1.0,
        }
    }

    /// All 100 one-percent brackets in ascending order.
    pub fn full_sweep() -> impl Iterator<Item = PercentileBracket> {
        (0..FULL_SWEEP_BRACKETS).map(Self::one_percent)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Width as a fraction of the full range, `(upper - lower) / 100`.
    pub fn width_fraction(&self) -> f64 {
        (self.upper - self.lower) / 100.0
    }

    /// Half-open index range `[floor(n·lower/100), floor(n·upper/100))` into a
    /// sorted sample of length `n`.
    pub fn index_range(&self, n: usize) -> std::ops::Range<usize> {
        let lo = (n as f64 * (self.lower / 100.0)) as usize;
        let hi = (n as f64 * (self.upper / 100.0)) as usize;
        lo.min(n)..hi.min(n)
    }

    /// Key used to derive this bracket's random streams.
    pub fn seed_keys(&self) -> [u64; 2] {
        [self.lower.to_bits(), self.upper.to_bits()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_ranges() {
        assert!(PercentileBracket::new(0.0, 1.0).is_ok());
        assert!(PercentileBracket::new(99.5, 100.0).is_ok());
        assert!(PercentileBracket::new(0.0, 100.0).is_ok());
    }

    #[test]
    fn rejects_invalid_ranges() {
        assert!(PercentileBracket::new(50.0, 40.0).is_err());
        assert!(PercentileBracket::new(10.0, 10.0).is_err());
        assert!(PercentileBracket::new(-1.0, 10.0).is_err());
        assert!(PercentileBracket::new(0.0, 100.5).is_err());
        assert!(PercentileBracket::new(f64::NAN, 10.0).is_err());
        assert!(PercentileBracket::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn error_message_names_the_rule() {
        let err = PercentileBracket::new(50.0, 40.0).unwrap_err();
        assert!(err.to_string().starts_with("Invalid range. Use 0 <= lower < upper <= 100"));
    }

    #[test]
    fn index_range_floors_both_ends() {
        let b = PercentileBracket::new(10.0, 25.0).unwrap();
        assert_eq!(b.index_range(10), 1..2);
        assert_eq!(b.index_range(3), 0..0);
        assert_eq!(b.index_range(0), 0..0);
    }

    #[test]
    fn full_range_covers_everything() {
        let b = PercentileBracket::new(0.0, 100.0).unwrap();
        assert_eq!(b.index_range(17), 0..17);
    }

    #[test]
    fn full_sweep_is_contiguous() {
        let brackets: Vec<_> = PercentileBracket::full_sweep().collect();
        assert_eq!(brackets.len(), 100);
        assert_eq!(brackets[0].lower(), 0.0);
        assert_eq!(brackets[99].upper(), 100.0);
        for pair in brackets.windows(2) {
            assert_eq!(pair[0].upper(), pair[1].lower());
        }
        assert!(brackets.iter().all(|b| b.width_fraction() == 0.01));
    }
}
