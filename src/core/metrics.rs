//! Adapter metrics for observability
//!
//! Counts how `log` calls were routed and how many the backend rejected.

use super::backend::BackendMethod;
use super::severity::Severity;
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for adapter observability
///
/// # Example
///
/// ```
/// use rust_log_adapter::{AdapterMetrics, BackendMethod};
///
/// let metrics = AdapterMetrics::new();
///
/// metrics.record_dispatch(BackendMethod::Info);
/// metrics.record_dispatch(BackendMethod::Log);
/// metrics.record_backend_failure();
///
/// assert_eq!(metrics.total_dispatched(), 2);
/// assert_eq!(metrics.fallback_dispatches(), 1);
/// assert_eq!(metrics.backend_failures(), 1);
/// ```
#[derive(Debug)]
pub struct AdapterMetrics {
    /// Backend calls made, successful or not
    total_dispatched: AtomicU64,

    /// Calls per named severity method, indexed by severity level
    by_severity: [AtomicU64; 8],

    /// Calls routed to the generic `log(level, message)` method
    fallback_dispatches: AtomicU64,

    /// Calls the backend answered with an error
    backend_failures: AtomicU64,
}

impl AdapterMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_dispatched: AtomicU64::new(0),
            by_severity: [
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
            ],
            fallback_dispatches: AtomicU64::new(0),
            backend_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_dispatched(&self) -> u64 {
        self.total_dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn severity_dispatches(&self, severity: Severity) -> u64 {
        self.by_severity[severity.as_level() as usize].load(Ordering::Relaxed)
    }

    #[inline]
    pub fn fallback_dispatches(&self) -> u64 {
        self.fallback_dispatches.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn backend_failures(&self) -> u64 {
        self.backend_failures.load(Ordering::Relaxed)
    }

    /// Record one backend call routed to `method`
    pub fn record_dispatch(&self, method: BackendMethod) {
        self.total_dispatched.fetch_add(1, Ordering::Relaxed);
        match method.severity() {
            Some(severity) => {
                self.by_severity[severity.as_level() as usize].fetch_add(1, Ordering::Relaxed);
            }
            None => {
                self.fallback_dispatches.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Record a backend error; returns the previous count
    #[inline]
    pub fn record_backend_failure(&self) -> u64 {
        self.backend_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Backend failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been dispatched.
    pub fn failure_rate(&self) -> f64 {
        let total = self.total_dispatched() as f64;
        if total == 0.0 {
            0.0
        } else {
            (self.backend_failures() as f64 / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.total_dispatched.store(0, Ordering::Relaxed);
        for counter in &self.by_severity {
            counter.store(0, Ordering::Relaxed);
        }
        self.fallback_dispatches.store(0, Ordering::Relaxed);
        self.backend_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for AdapterMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for AdapterMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        let snapshot = Self::new();
        snapshot
            .total_dispatched
            .store(self.total_dispatched(), Ordering::Relaxed);
        for severity in Severity::ALL {
            snapshot.by_severity[severity.as_level() as usize]
                .store(self.severity_dispatches(severity), Ordering::Relaxed);
        }
        snapshot
            .fallback_dispatches
            .store(self.fallback_dispatches(), Ordering::Relaxed);
        snapshot
            .backend_failures
            .store(self.backend_failures(), Ordering::Relaxed);
        snapshot
    }
}
