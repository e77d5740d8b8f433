//! Logging macros for ergonomic message formatting.
//!
//! Each macro formats its arguments like `format!` and calls
//! [`LogAdapter::log`](crate::LogAdapter::log), evaluating to its `Result`.
//!
//! # Examples
//!
//! ```
//! use rust_log_adapter::prelude::*;
//! use rust_log_adapter::info;
//! use std::sync::Arc;
//!
//! let adapter = LogAdapter::builder()
//!     .backend(Arc::new(MemoryBackend::new()))
//!     .build()
//!     .unwrap();
//!
//! info!(adapter, "Server started").unwrap();
//!
//! let port = 8080;
//! info!(adapter, "Server listening on port {}", port).unwrap();
//! ```

/// Log a formatted message at a severity or raw numeric level.
///
/// # Examples
///
/// ```
/// # use rust_log_adapter::prelude::*;
/// # use std::sync::Arc;
/// # let adapter = LogAdapter::builder().backend(Arc::new(MemoryBackend::new())).build().unwrap();
/// use rust_log_adapter::adapter_log;
/// adapter_log!(adapter, Severity::Info, "Simple message").unwrap();
/// adapter_log!(adapter, 42, "Custom level {}", 42).unwrap();
/// ```
#[macro_export]
macro_rules! adapter_log {
    ($adapter:expr, $level:expr, $($arg:tt)+) => {
        $adapter.log(::core::primitive::i32::from($level), &format!($($arg)+))
    };
}

/// Log an emergency-level message.
#[macro_export]
macro_rules! emergency {
    ($adapter:expr, $($arg:tt)+) => {
        $crate::adapter_log!($adapter, $crate::Severity::Emergency, $($arg)+)
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($adapter:expr, $($arg:tt)+) => {
        $crate::adapter_log!($adapter, $crate::Severity::Alert, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($adapter:expr, $($arg:tt)+) => {
        $crate::adapter_log!($adapter, $crate::Severity::Critical, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_adapter::prelude::*;
/// # use std::sync::Arc;
/// # let adapter = LogAdapter::builder().backend(Arc::new(MemoryBackend::new())).build().unwrap();
/// use rust_log_adapter::error;
/// error!(adapter, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($adapter:expr, $($arg:tt)+) => {
        $crate::adapter_log!($adapter, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($adapter:expr, $($arg:tt)+) => {
        $crate::adapter_log!($adapter, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($adapter:expr, $($arg:tt)+) => {
        $crate::adapter_log!($adapter, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($adapter:expr, $($arg:tt)+) => {
        $crate::adapter_log!($adapter, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($adapter:expr, $($arg:tt)+) => {
        $crate::adapter_log!($adapter, $crate::Severity::Debug, $($arg)+)
    };
}
