//! Escalating oracle cost schedule.
//!
//! Round `k` of the exploit costs `initial · multiplier^k` basis points. A
//! counterparty earning a flat profit per round keeps going while the next
//! round's cost is still below that profit, so the break-even round count
//! is the solution of `profit = initial · multiplier^X`.

use serde::{Deserialize, Serialize};

/// Reference initial oracle report cost.
pub const DEFAULT_ORACLE_INIT: f64 = 0.4;
/// Reference per-round cost multiplier.
pub const DEFAULT_MULTIPLIER: f64 = 2.5;

/// Geometric oracle cost schedule. Requires `initial > 0` and
/// `multiplier > 1`; configuration validation enforces both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OracleSchedule {
    pub initial: f64,
    pub multiplier: f64,
}

impl Default for OracleSchedule {
    fn default() -> Self {
        Self {
            initial: DEFAULT_ORACLE_INIT,
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}

impl OracleSchedule {
    pub fn new(initial: f64, multiplier: f64) -> Self {
        debug_assert!(initial > 0.0, "oracle initial cost must be > 0");
        debug_assert!(multiplier > 1.0, "oracle multiplier must be > 1");
        Self {
            initial,
            multiplier,
        }
    }

    /// Cost of round `k`.
    pub fn cost_of_round(&self, k: u32) -> f64 {
        self.initial * self.multiplier.powf(f64::from(k))
    }

    /// Real-valued round count at which the round cost equals `profit_bps`:
    /// `ln(profit / initial) / ln(multiplier)`.
    ///
    /// Non-positive profit yields 0. The result may be fractional, and is
    /// negative when the profit is below the initial cost.
    pub fn solve_rounds(&self, profit_bps: f64) -> f64 {
        if !(profit_bps > 0.0) {
            return 0.0;
        }
        (profit_bps / self.initial).ln() / self.multiplier.ln()
    }

    /// Whole rounds a counterparty can run: `floor(max(x, 0))`.
    pub fn whole_rounds(&self, profit_bps: f64) -> u32 {
        let x = self.solve_rounds(profit_bps);
        if x > 0.0 {
            x.floor() as u32
        } else {
            0
        }
    }

    /// Profit minus cumulative oracle cost over `rounds` rounds:
    /// `profit·X − initial·Σ_{k=1..X} multiplier^k`. Zero for `X <= 0`.
    pub fn total_pnl(&self, rounds: i64, profit_bps: f64) -> f64 {
        if rounds <= 0 {
            return 0.0;
        }
        let cost: f64 = (1..=rounds)
            .map(|k| self.multiplier.powf(k as f64))
            .sum::<f64>()
            * self.initial;
        profit_bps * rounds as f64 - cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn non_positive_profit_solves_to_zero() {
        let s = OracleSchedule::default();
        assert_eq!(s.solve_rounds(0.0), 0.0);
        assert_eq!(s.solve_rounds(-12.0), 0.0);
        assert_eq!(s.solve_rounds(f64::NAN), 0.0);
    }

    #[test]
    fn solve_inverts_cost_curve() {
        let s = OracleSchedule::default();
        for k in 0..8 {
            let x = s.solve_rounds(s.cost_of_round(k));
            assert!((x - f64::from(k)).abs() < EPS, "k={k} x={x}");
        }
    }

    #[test]
    fn profit_below_initial_cost_is_negative() {
        let s = OracleSchedule::default();
        assert!(s.solve_rounds(0.1) < 0.0);
        assert_eq!(s.whole_rounds(0.1), 0);
    }

    #[test]
    fn whole_rounds_floor() {
        let s = OracleSchedule::default();
        // 0.4 · 2.5^3 = 6.25, 0.4 · 2.5^4 = 15.625.
        assert_eq!(s.whole_rounds(10.0), 3);
        assert_eq!(s.whole_rounds(20.0), 4);
        // Certain touch: 100% · 100 = 10_000 bps → ln(25_000)/ln(2.5) ≈ 11.05.
        assert_eq!(s.whole_rounds(10_000.0), 11);
    }

    #[test]
    fn pnl_zero_for_no_rounds() {
        let s = OracleSchedule::default();
        assert_eq!(s.total_pnl(0, 500.0), 0.0);
        assert_eq!(s.total_pnl(-3, 500.0), 0.0);
    }

    #[test]
    fn pnl_matches_hand_computation() {
        let s = OracleSchedule::default();
        // 3 rounds at 100 bps: 300 − 0.4·(2.5 + 6.25 + 15.625) = 290.25.
        assert!((s.total_pnl(3, 100.0) - 290.25).abs() < EPS);
    }

    #[test]
    fn pnl_matches_geometric_closed_form() {
        let s = OracleSchedule::new(0.2, 3.0);
        let x = 6_i64;
        let closed = 0.2 * 3.0 * (3.0_f64.powi(6) - 1.0) / (3.0 - 1.0);
        assert!((s.total_pnl(x, 50.0) - (300.0 - closed)).abs() < 1e-6);
    }
}
