//! ELC CLI — expected loss contribution for one percentile bracket, or the
//! total across all 100 one-percent brackets.
//!
//! The request is either given as the positional argument or read as one
//! line from stdin:
//! - `lower,upper` — eight diagnostic lines for that bracket
//! - `lower,upper,GO` — total ELC over the full sweep
//!
//! Logs go to stderr (`RUST_LOG`, default `warn`); stdout carries only the
//! report or the error line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use elc_runner::{profiling, respond, ElcConfig, ElcEngine, OutputFormat};

#[derive(Parser)]
#[command(
    name = "elc",
    about = "Expected loss contribution under alpha-stable oracle deviations"
)]
struct Cli {
    /// Request, e.g. `0,1` or `0,1,GO`. Prompted for on stdin when omitted.
    range: Option<String>,

    /// TOML file overriding model parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Master seed. Drawn from OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Monte Carlo paths per touch simulation.
    #[arg(long)]
    paths: Option<usize>,

    /// Stable draws per unit-average estimate.
    #[arg(long)]
    pool_size: Option<usize>,

    /// Time step of the simulated walk.
    #[arg(long)]
    dt: Option<f64>,

    /// Worker threads. Defaults to the number of CPUs.
    #[arg(long)]
    threads: Option<usize>,

    /// Run everything on the calling thread.
    #[arg(long, default_value_t = false)]
    serial: bool,

    /// Print the report as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    profiling::init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let engine = ElcEngine::new(config)
        .context("invalid model configuration")?
        .with_parallelism(!cli.serial);

    let line = match &cli.range {
        Some(range) => range.clone(),
        None => prompt_line()?,
    };
    tracing::debug!(request = line.trim(), "request received");
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match cli.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("elc-pool-{i}"))
                .build()
                .context("build worker thread pool")?;
            pool.install(|| serve(&engine, &line, format))
        }
        None => serve(&engine, &line, format),
    }
}

fn serve(engine: &ElcEngine, line: &str, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    respond(engine, line, format, &mut out)?;
    out.flush()?;
    Ok(())
}

fn build_config(cli: &Cli) -> Result<ElcConfig> {
    let mut config = match &cli.config {
        Some(path) => ElcConfig::from_file(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => ElcConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(paths) = cli.paths {
        config.path_count = paths;
    }
    if let Some(pool_size) = cli.pool_size {
        config.pool_size = pool_size;
    }
    if let Some(dt) = cli.dt {
        config.dt = dt;
    }
    Ok(config)
}

fn prompt_line() -> Result<String> {
    print!("Enter the percentile range (e.g., 0,1 or 0,1,GO): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read request from stdin")?;
    Ok(line)
}
