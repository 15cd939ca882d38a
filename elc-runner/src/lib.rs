//! ELC Runner — engine orchestration, configuration, and the
//! request/response session.
//!
//! This crate builds on `elc-core` to provide:
//! - Validated, TOML-loadable run configuration
//! - Per-bracket ELC pipeline and the parallel 100-bracket sweep
//! - Bracket and sweep reports with console rendering
//! - Request-line parsing and the single-shot session
//! - Stage timing scopes

pub mod config;
pub mod engine;
pub mod profiling;
pub mod report;
pub mod request;
pub mod session;

pub use config::{ConfigError, ElcConfig};
pub use engine::{ElcEngine, EngineError, UNIT_HORIZON};
pub use report::{AggregateReport, BracketReport};
pub use request::{Request, RequestError};
pub use session::{error_line, respond, Outcome, OutputFormat, SessionError};
