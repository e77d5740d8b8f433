//! Core adapter types and traits

pub mod adapter;
pub mod backend;
pub mod config;
pub mod error;
pub mod format;
pub mod metrics;
pub mod severity;
pub mod timestamp;

pub use adapter::{AdapterState, LogAdapter, LogAdapterBuilder};
pub use backend::{dispatch, BackendMethod, StructuredBackend};
pub use config::{AdapterConfig, DEFAULT_PROCESS_NAME};
pub use error::{AdapterError, BackendError, BackendResult, Result};
pub use format::{Composition, DateToken, LevelToken, LogFormat, Substitutions};
pub use metrics::AdapterMetrics;
pub use severity::Severity;
pub use timestamp::{init_timezone, Clock, TimezoneSetting, DEFAULT_DATE_PATTERN};
