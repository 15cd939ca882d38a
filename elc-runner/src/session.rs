//! Single request/response interaction.
//!
//! One line in, one report (or one error line) out. Request errors are
//! written to the output and reported as [`Outcome::Rejected`]; they never
//! surface as `Err`, which is reserved for I/O and sampler failures.

use std::io::{self, Write};

use thiserror::Error;

use crate::engine::{ElcEngine, EngineError};
use crate::request::{Request, RequestError};

/// Suffix appended to every request error line.
pub const ERROR_HINT: &str = "Please enter a valid range like '0,1' or '0,1,GO'.";

/// How reports are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What happened to the request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Bracket,
    FullSweep,
    Rejected(RequestError),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("write output: {0}")]
    Io(#[from] io::Error),
    #[error("serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// The literal error line for a rejected request.
pub fn error_line(err: &RequestError) -> String {
    format!("Error: {err}. {ERROR_HINT}")
}

/// Parse `line`, run the engine, and write the result to `out`.
pub fn respond<W: Write>(
    engine: &ElcEngine,
    line: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<Outcome, SessionError> {
    let request = match line.parse::<Request>() {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(error = %err, input = line.trim(), "request rejected");
            writeln!(out, "{}", error_line(&err))?;
            return Ok(Outcome::Rejected(err));
        }
    };

    match request {
        Request::Bracket(bracket) => {
            let report = engine.compute_bracket(bracket)?;
            match format {
                OutputFormat::Text => {
                    writeln!(out, "{}", report.heading())?;
                    for line in report.diagnostic_lines(engine.config().total_periods) {
                        writeln!(out, "{line}")?;
                    }
                }
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut *out, &report)?;
                    writeln!(out)?;
                }
            }
            Ok(Outcome::Bracket)
        }
        Request::FullSweep => {
            let report = engine.compute_total()?;
            match format {
                OutputFormat::Text => writeln!(out, "{}", report.summary_line())?,
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut *out, &report)?;
                    writeln!(out)?;
                }
            }
            Ok(Outcome::FullSweep)
        }
    }
}
