//! Stage timing for the ELC pipeline.
//!
//! A [`ProfileScope`] measures the time between its creation and drop and
//! reports it as a `tracing` debug event when profiling is enabled.
//!
//! # Usage
//!
//! ```
//! use elc_runner::profiling::ProfileScope;
//!
//! fn expensive_stage() {
//!     let _scope = ProfileScope::new("expensive_stage");
//!     // Timing reported on drop
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `ELC_PROFILE=1` - Enable stage timing

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

static PROFILING_ENABLED: AtomicBool = AtomicBool::new(false);

static TOTAL_SCOPES: AtomicU64 = AtomicU64::new(0);

/// Read `ELC_PROFILE` and enable timing accordingly.
///
/// Should be called once at program startup.
pub fn init() {
    let enabled = std::env::var("ELC_PROFILE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    set_enabled(enabled);

    if enabled {
        tracing::info!("stage profiling enabled (ELC_PROFILE=1)");
    }
}

pub fn set_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// Number of scopes opened since startup.
pub fn total_scopes() -> u64 {
    TOTAL_SCOPES.load(Ordering::Relaxed)
}

/// Timing guard; reports elapsed time on drop.
pub struct ProfileScope {
    name: &'static str,
    start: Instant,
}

impl ProfileScope {
    #[inline]
    pub fn new(name: &'static str) -> Self {
        TOTAL_SCOPES.fetch_add(1, Ordering::Relaxed);
        Self {
            name,
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ProfileScope {
    fn drop(&mut self) {
        if is_enabled() {
            tracing::debug!(
                stage = self.name,
                elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0,
                "stage finished"
            );
        }
    }
}
