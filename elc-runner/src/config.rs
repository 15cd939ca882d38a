//! Run configuration for the ELC engine.
//!
//! Every field defaults to the reference model constants, so a TOML file
//! only needs to name what it overrides:
//!
//! ```toml
//! alpha_first = 1.7
//! path_count = 2000
//! seed = 7
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use elc_core::oracle::{DEFAULT_MULTIPLIER, DEFAULT_ORACLE_INIT};
use elc_core::percentile::DEFAULT_POOL_SIZE;
use elc_core::OracleSchedule;

/// Errors loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {field} {reason} (got {value})")]
    Invalid {
        field: &'static str,
        reason: &'static str,
        value: f64,
    },
}

/// Immutable model parameters for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElcConfig {
    /// Stability index for the unit average and the horizon-1 touch stage.
    pub alpha_first: f64,
    /// Stability index for the horizon-X touch stage.
    pub alpha_second: f64,
    /// Settlement periods per bet; the unit average is scaled by `T^(1/alpha_first)`.
    pub total_periods: f64,
    /// Cost of the first oracle report.
    pub oracle_init: f64,
    /// Per-round oracle cost multiplier.
    pub multiplier: f64,
    /// Monte Carlo paths per touch simulation.
    pub path_count: usize,
    /// Time step of the discretized walk.
    pub dt: f64,
    /// Stable draws per unit-average estimate.
    pub pool_size: usize,
    /// Master seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ElcConfig {
    fn default() -> Self {
        Self {
            alpha_first: 1.6,
            alpha_second: 1.5,
            total_periods: 1200.0,
            oracle_init: DEFAULT_ORACLE_INIT,
            multiplier: DEFAULT_MULTIPLIER,
            path_count: 10_000,
            dt: 0.01,
            pool_size: DEFAULT_POOL_SIZE,
            seed: None,
        }
    }
}

impl ElcConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the model relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_alpha("alpha_first", self.alpha_first)?;
        check_alpha("alpha_second", self.alpha_second)?;
        check_positive("total_periods", self.total_periods)?;
        check_positive("oracle_init", self.oracle_init)?;
        check_positive("dt", self.dt)?;
        if !(self.multiplier > 1.0 && self.multiplier.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "multiplier",
                reason: "must be finite and > 1",
                value: self.multiplier,
            });
        }
        if self.path_count == 0 {
            return Err(ConfigError::Invalid {
                field: "path_count",
                reason: "must be > 0",
                value: 0.0,
            });
        }
        if self.pool_size == 0 {
            return Err(ConfigError::Invalid {
                field: "pool_size",
                reason: "must be > 0",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// `T^(1/alpha_first)`, the unit-to-bet scale factor.
    pub fn scale_factor(&self) -> f64 {
        self.total_periods.powf(1.0 / self.alpha_first)
    }

    pub fn oracle(&self) -> OracleSchedule {
        OracleSchedule::new(self.oracle_init, self.multiplier)
    }
}

fn check_alpha(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 2.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be in (0, 2]",
            value,
        })
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be finite and > 0",
            value,
        })
    }
}
