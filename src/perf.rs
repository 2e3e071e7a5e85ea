//! Scope timing for the hot paths.
//!
//! Enable with the `profiling` feature:
//! ```toml
//! [dependencies]
//! carousel = { features = ["profiling"] }
//! ```
//!
//! Geometry recompute is O(items) and runs on every resize without
//! debouncing, so it is the first place to look when resizing stutters.

use std::time::Instant;
use tracing::{trace, warn};

/// Profile a scope against a budget in milliseconds. Zero-cost when the
/// `profiling` feature is disabled.
///
/// # Example
/// ```ignore
/// fn recompute(&mut self) {
///     profile_scope!("recompute", RECOMPUTE_BUDGET_MS);
///     // ... measuring ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr, $budget_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $budget_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $budget_ms);
    };
}

/// RAII timer that reports its scope's duration when dropped.
#[derive(Debug)]
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    budget_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, budget_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            budget_ms,
        }
    }

    /// Milliseconds since the timer started
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.budget_ms {
            warn!(
                scope = self.name,
                elapsed_ms,
                budget_ms = self.budget_ms,
                "Slow carousel scope"
            );
        } else {
            trace!(scope = self.name, elapsed_ms, "Carousel scope");
        }
    }
}
