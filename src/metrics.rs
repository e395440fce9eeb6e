//! Optional performance metrics, enabled via TASKLIST_METRICS=1.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

static METRICS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Initialize metrics from environment. Call once at startup.
pub fn init() {
    let enabled = std::env::var("TASKLIST_METRICS")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false);
    METRICS_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if metrics collection is enabled.
#[inline]
pub fn enabled() -> bool {
    METRICS_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer that logs duration on drop.
pub struct Timer {
    label: &'static str,
    count: Option<usize>,
    start: Instant,
}

impl Timer {
    /// Start a timer if metrics are enabled.
    #[inline]
    pub fn start(label: &'static str) -> Option<Self> {
        if enabled() {
            Some(Self {
                label,
                count: None,
                start: Instant::now(),
            })
        } else {
            None
        }
    }

    /// Start a timer that also reports how many tasks the operation handled.
    #[inline]
    pub fn start_counted(label: &'static str, count: usize) -> Option<Self> {
        let mut timer = Self::start(label)?;
        timer.count = Some(count);
        Some(timer)
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        log_metric(self.label, self.count, self.start.elapsed());
    }
}

/// Log a metric to the tracing sink.
fn log_metric(label: &str, count: Option<usize>, duration: Duration) {
    let elapsed_us = duration.as_micros() as u64;
    match count {
        Some(count) => {
            tracing::info!(target: "tasklist::metrics", label, count, elapsed_us, "timing")
        }
        None => tracing::info!(target: "tasklist::metrics", label, elapsed_us, "timing"),
    }
}
