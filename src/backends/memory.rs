//! In-memory backend that records every call

use crate::core::{BackendError, BackendMethod, BackendResult, Severity, StructuredBackend};
use parking_lot::Mutex;

/// One call received by a [`MemoryBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: BackendMethod,
    pub level: i32,
    pub message: String,
}

impl RecordedCall {
    pub fn new(method: BackendMethod, level: i32, message: impl Into<String>) -> Self {
        Self {
            method,
            level,
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
struct FailurePlan {
    remaining: usize,
    message: String,
}

/// Backend that keeps calls in memory
///
/// Useful for embedding and tests. `fail_next` makes the next calls return
/// a [`BackendError`] without recording them.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    calls: Mutex<Vec<RecordedCall>>,
    failures: Mutex<FailurePlan>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `count` calls with `message`
    pub fn fail_next(&self, count: usize, message: impl Into<String>) {
        let mut plan = self.failures.lock();
        plan.remaining = count;
        plan.message = message.into();
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Messages in the order they arrived
    pub fn messages(&self) -> Vec<String> {
        self.calls.lock().iter().map(|c| c.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    /// Remove and return all recorded calls
    pub fn take(&self) -> Vec<RecordedCall> {
        std::mem::take(&mut *self.calls.lock())
    }

    fn record(&self, method: BackendMethod, level: i32, message: &str) -> BackendResult {
        {
            let mut plan = self.failures.lock();
            if plan.remaining > 0 {
                plan.remaining -= 1;
                return Err(BackendError::msg(plan.message.clone()));
            }
        }

        self.calls
            .lock()
            .push(RecordedCall::new(method, level, message));
        Ok(())
    }

    fn record_severity(&self, severity: Severity, message: &str) -> BackendResult {
        self.record(severity.into(), severity.as_level(), message)
    }
}

impl StructuredBackend for MemoryBackend {
    fn emergency(&self, message: &str) -> BackendResult {
        self.record_severity(Severity::Emergency, message)
    }

    fn alert(&self, message: &str) -> BackendResult {
        self.record_severity(Severity::Alert, message)
    }

    fn critical(&self, message: &str) -> BackendResult {
        self.record_severity(Severity::Critical, message)
    }

    fn error(&self, message: &str) -> BackendResult {
        self.record_severity(Severity::Error, message)
    }

    fn warning(&self, message: &str) -> BackendResult {
        self.record_severity(Severity::Warning, message)
    }

    fn notice(&self, message: &str) -> BackendResult {
        self.record_severity(Severity::Notice, message)
    }

    fn info(&self, message: &str) -> BackendResult {
        self.record_severity(Severity::Info, message)
    }

    fn debug(&self, message: &str) -> BackendResult {
        self.record_severity(Severity::Debug, message)
    }

    fn log(&self, level: i32, message: &str) -> BackendResult {
        self.record(BackendMethod::Log, level, message)
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_named_and_generic_calls() {
        let backend = MemoryBackend::new();
        backend.alert("a").unwrap();
        backend.log(3, "generic").unwrap();

        assert_eq!(
            backend.calls(),
            vec![
                RecordedCall::new(BackendMethod::Alert, 1, "a"),
                RecordedCall::new(BackendMethod::Log, 3, "generic"),
            ]
        );
    }

    #[test]
    fn test_fail_next() {
        let backend = MemoryBackend::new();
        backend.fail_next(2, "down");

        assert_eq!(backend.info("1").unwrap_err().message(), "down");
        assert!(backend.info("2").is_err());
        backend.info("3").unwrap();

        assert_eq!(backend.messages(), vec!["3".to_string()]);
    }

    #[test]
    fn test_take_clears() {
        let backend = MemoryBackend::new();
        backend.debug("x").unwrap();
        assert_eq!(backend.take().len(), 1);
        assert!(backend.is_empty());
    }
}
