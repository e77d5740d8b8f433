//! Structured-logging backend trait and level dispatch

use super::error::BackendResult;
use super::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured-logging backend with one call per severity
///
/// Only [`log`](StructuredBackend::log) is required; the severity methods
/// forward to it with their numeric level unless a backend overrides them.
/// Methods take `&self` because a backend may be shared by several adapters.
pub trait StructuredBackend: Send + Sync {
    fn emergency(&self, message: &str) -> BackendResult {
        self.log(Severity::Emergency.as_level(), message)
    }

    fn alert(&self, message: &str) -> BackendResult {
        self.log(Severity::Alert.as_level(), message)
    }

    fn critical(&self, message: &str) -> BackendResult {
        self.log(Severity::Critical.as_level(), message)
    }

    fn error(&self, message: &str) -> BackendResult {
        self.log(Severity::Error.as_level(), message)
    }

    fn warning(&self, message: &str) -> BackendResult {
        self.log(Severity::Warning.as_level(), message)
    }

    fn notice(&self, message: &str) -> BackendResult {
        self.log(Severity::Notice.as_level(), message)
    }

    fn info(&self, message: &str) -> BackendResult {
        self.log(Severity::Info.as_level(), message)
    }

    fn debug(&self, message: &str) -> BackendResult {
        self.log(Severity::Debug.as_level(), message)
    }

    /// Generic call used for levels with no named method
    fn log(&self, level: i32, message: &str) -> BackendResult;

    fn name(&self) -> &str;
}

/// The call a `log` invocation was routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendMethod {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
    /// Generic `log(level, message)` fallback
    Log,
}

impl BackendMethod {
    /// Route for a raw facade level
    pub fn for_level(level: i32) -> Self {
        match Severity::from_level(level) {
            Some(severity) => severity.into(),
            None => BackendMethod::Log,
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            BackendMethod::Emergency => Some(Severity::Emergency),
            BackendMethod::Alert => Some(Severity::Alert),
            BackendMethod::Critical => Some(Severity::Critical),
            BackendMethod::Error => Some(Severity::Error),
            BackendMethod::Warning => Some(Severity::Warning),
            BackendMethod::Notice => Some(Severity::Notice),
            BackendMethod::Info => Some(Severity::Info),
            BackendMethod::Debug => Some(Severity::Debug),
            BackendMethod::Log => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self.severity() {
            Some(severity) => severity.method_name(),
            None => "log",
        }
    }
}

impl From<Severity> for BackendMethod {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Emergency => BackendMethod::Emergency,
            Severity::Alert => BackendMethod::Alert,
            Severity::Critical => BackendMethod::Critical,
            Severity::Error => BackendMethod::Error,
            Severity::Warning => BackendMethod::Warning,
            Severity::Notice => BackendMethod::Notice,
            Severity::Info => BackendMethod::Info,
            Severity::Debug => BackendMethod::Debug,
        }
    }
}

impl fmt::Display for BackendMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Send `message` to the backend method implied by `level`
///
/// Total over `i32`: unmapped levels go to the generic `log` call with the
/// level passed through unchanged. Exactly one backend call is made.
pub fn dispatch(backend: &dyn StructuredBackend, level: i32, message: &str) -> BackendResult {
    match Severity::from_level(level) {
        Some(Severity::Emergency) => backend.emergency(message),
        Some(Severity::Alert) => backend.alert(message),
        Some(Severity::Critical) => backend.critical(message),
        Some(Severity::Error) => backend.error(message),
        Some(Severity::Warning) => backend.warning(message),
        Some(Severity::Notice) => backend.notice(message),
        Some(Severity::Info) => backend.info(message),
        Some(Severity::Debug) => backend.debug(message),
        None => backend.log(level, message),
    }
}
