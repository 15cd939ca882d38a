//! ELC engine — wires the unit average, the two touch stages, and the
//! oracle schedule into a per-bracket expected loss contribution.
//!
//! Per bracket:
//! 1. Average the positive unit-scale draws inside the bracket (`alpha_first`).
//! 2. Scale by `T^(1/alpha_first)`; the barrier is the negated result.
//! 3. Touch probability over `[0, 1]` with `alpha_first`; profit = prob · 100 bps.
//! 4. Whole rounds `X` until the oracle cost overtakes that profit.
//! 5. Touch probability over `[0, X]` with `alpha_second`.
//! 6. ELC = prob_X · 0.5 · bracket width.
//!
//! Stage 5 deliberately switches to `alpha_second`. Each bracket draws from
//! its own seed hierarchy, so the 100-bracket sweep runs in parallel and
//! still reproduces bit-for-bit under a fixed master seed.

use rayon::prelude::*;
use thiserror::Error;

use elc_core::{
    PathSimulator, PercentileBracket, RngHierarchy, StableError, UnitAverageEstimator,
};

use crate::config::{ConfigError, ElcConfig};
use crate::profiling::ProfileScope;
use crate::report::{AggregateReport, BracketReport};

/// Horizon of the first touch stage, in settlement periods.
pub const UNIT_HORIZON: f64 = 1.0;

/// Errors from the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("sampler error: {0}")]
    Sampler(#[from] StableError),
}

/// Expected loss contribution engine over an immutable configuration.
#[derive(Debug, Clone)]
pub struct ElcEngine {
    config: ElcConfig,
    seeds: RngHierarchy,
    parallel: bool,
}

impl ElcEngine {
    /// Validate `config` and seed the engine. Without a configured seed the
    /// master seed comes from OS entropy; it is logged so the run can be
    /// replayed with `seed = ...`.
    pub fn new(config: ElcConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let seeds = match config.seed {
            Some(seed) => RngHierarchy::new(seed),
            None => RngHierarchy::from_entropy(),
        };
        tracing::info!(
            master_seed = seeds.master_seed(),
            path_count = config.path_count,
            pool_size = config.pool_size,
            "engine ready"
        );
        Ok(Self {
            config,
            seeds,
            parallel: true,
        })
    }

    /// Enables or disables parallel execution (bracket sweep and path chunks).
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn config(&self) -> &ElcConfig {
        &self.config
    }

    pub fn master_seed(&self) -> u64 {
        self.seeds.master_seed()
    }

    fn simulator(&self) -> PathSimulator {
        PathSimulator::new(self.config.path_count, self.config.dt).with_parallelism(self.parallel)
    }

    /// Run the full pipeline for one bracket.
    pub fn compute_bracket(&self, bracket: PercentileBracket) -> Result<BracketReport, EngineError> {
        let _scope = ProfileScope::new("compute_bracket");
        let cfg = &self.config;
        let seeds = self.seeds.child("bracket", &bracket.seed_keys());
        let simulator = self.simulator();
        let oracle = cfg.oracle();

        let unit_avg = {
            let _scope = ProfileScope::new("unit_average");
            let mut rng = seeds.rng_for("pool", &[]);
            UnitAverageEstimator::new(cfg.pool_size).estimate(bracket, cfg.alpha_first, &mut rng)?
        };
        let scaled_avg = unit_avg * cfg.scale_factor();
        let barrier = -scaled_avg;

        let touch_probability = {
            let _scope = ProfileScope::new("touch_unit_horizon");
            simulator.one_touch_probability(
                barrier,
                UNIT_HORIZON,
                cfg.alpha_first,
                &seeds.child("touch", &[1]),
            )?
        };
        let profit_bps = touch_probability * 100.0;

        let rounds_real = oracle.solve_rounds(profit_bps);
        let rounds = oracle.whole_rounds(profit_bps);
        let total_pnl_bps = oracle.total_pnl(i64::from(rounds), profit_bps);

        let touch_probability_rounds = {
            let _scope = ProfileScope::new("touch_round_horizon");
            simulator.one_touch_probability(
                barrier,
                f64::from(rounds),
                cfg.alpha_second,
                &seeds.child("touch", &[2]),
            )?
        };
        let elc = touch_probability_rounds * 0.5 * bracket.width_fraction();

        tracing::debug!(
            lower = bracket.lower(),
            upper = bracket.upper(),
            unit_avg,
            barrier,
            touch_probability,
            rounds,
            touch_probability_rounds,
            elc,
            "bracket computed"
        );

        Ok(BracketReport {
            lower: bracket.lower(),
            upper: bracket.upper(),
            unit_avg,
            scaled_avg,
            barrier,
            touch_probability,
            profit_bps,
            rounds_real,
            rounds,
            total_pnl_bps,
            touch_probability_rounds,
            elc,
        })
    }

    /// Sum of ELC over the 100 one-percent brackets `[i, i + 1)`.
    ///
    /// Brackets may run concurrently; the total is always summed in bracket
    /// order so it does not depend on scheduling.
    pub fn compute_total(&self) -> Result<AggregateReport, EngineError> {
        let _scope = ProfileScope::new("compute_total");
        let brackets: Vec<PercentileBracket> = PercentileBracket::full_sweep().collect();

        let reports: Vec<BracketReport> = if self.parallel {
            brackets
                .par_iter()
                .map(|&b| self.compute_bracket(b))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            brackets
                .iter()
                .map(|&b| self.compute_bracket(b))
                .collect::<Result<Vec<_>, _>>()?
        };

        let report = AggregateReport::from_brackets(reports);
        tracing::info!(total_elc = report.total_elc, "full sweep computed");
        Ok(report)
    }
}
