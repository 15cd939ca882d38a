//! Bracket and sweep reports, plus their console rendering.

use serde::{Deserialize, Serialize};

/// Every intermediate of one bracket computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketReport {
    pub lower: f64,
    pub upper: f64,
    /// Mean of the positive unit-scale draws inside the bracket.
    pub unit_avg: f64,
    /// `unit_avg · T^(1/alpha_first)`.
    pub scaled_avg: f64,
    pub barrier: f64,
    /// Touch probability over `[0, 1]`, percent.
    pub touch_probability: f64,
    pub profit_bps: f64,
    pub rounds_real: f64,
    pub rounds: u32,
    /// Diagnostic only; not part of the ELC.
    pub total_pnl_bps: f64,
    /// Touch probability over `[0, rounds]`, percent.
    pub touch_probability_rounds: f64,
    /// Expected loss contribution, percent.
    pub elc: f64,
}

impl BracketReport {
    /// Heading printed above the diagnostic lines.
    pub fn heading(&self) -> String {
        format!(
            "For the range {}% to {}% of positive samples:",
            self.lower, self.upper
        )
    }

    /// The eight diagnostic lines of a single-bracket run.
    pub fn diagnostic_lines(&self, total_periods: f64) -> [String; 8] {
        [
            format!("Unit time average: {:.3}", self.unit_avg),
            format!(
                "Scaled average for T = {}: {:.3}",
                total_periods, self.scaled_avg
            ),
            format!(
                "One-touch probability of hitting barrier = {:.3} over [0,1]: {:.2}%",
                self.barrier, self.touch_probability
            ),
            format!("Profit per round: {:.2} basis points", self.profit_bps),
            format!("Number of rounds X: {}", self.rounds),
            format!(
                "Total PNL up to X rounds: {:.2} basis points",
                self.total_pnl_bps
            ),
            format!(
                "One-touch probability of hitting barrier = {:.3} over [0,{}]: {:.2}%",
                self.barrier, self.rounds, self.touch_probability_rounds
            ),
            format!(
                "Range expected loss contribution per bet: {:.2}%",
                self.elc
            ),
        ]
    }
}

/// Result of the 100-bracket sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Sum of `brackets[i].elc` in bracket order.
    pub total_elc: f64,
    pub brackets: Vec<BracketReport>,
}

impl AggregateReport {
    pub fn from_brackets(brackets: Vec<BracketReport>) -> Self {
        let total_elc = brackets.iter().map(|b| b.elc).sum();
        Self {
            total_elc,
            brackets,
        }
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Total ELC for all 1% brackets (0-1%, 1-2%, ..., 99-100%): {:.2}%",
            self.total_elc
        )
    }
}
