//! # Rust Log Adapter
//!
//! Bridges an application-wide logging facade to a structured-logging
//! backend. The facade hands over a numeric level and a message; the adapter
//! rewrites `%process`, `%level` and `%date{...}` placeholders and calls the
//! backend method that matches the level.
//!
//! ## Features
//!
//! - **Total dispatch**: every `i32` level reaches exactly one backend call
//! - **Deterministic substitution**: fixed token order, literal replacement
//! - **Shared backends**: one backend can serve several adapters
//! - **Reference backends**: console, file, JSON and in-memory
//!
//! ```
//! use rust_log_adapter::prelude::*;
//! use std::sync::Arc;
//!
//! let backend = Arc::new(MemoryBackend::new());
//! let mut adapter = LogAdapter::builder()
//!     .backend(backend.clone())
//!     .process_name("Auth")
//!     .build()?;
//! adapter.set_format("[%process] ");
//!
//! adapter.log(Severity::Warning.as_level(), "token expired")?;
//! adapter.log(999, "unknown")?;
//!
//! let calls = backend.calls();
//! assert_eq!(calls[0].method, BackendMethod::Warning);
//! assert_eq!(calls[0].message, "[Auth] token expired");
//! assert_eq!(calls[1].method, BackendMethod::Log);
//! assert_eq!(calls[1].level, 999);
//! # Ok::<(), rust_log_adapter::AdapterError>(())
//! ```

pub mod backends;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "file")]
    pub use crate::backends::{FileBackend, JsonBackend};
    pub use crate::backends::{ConsoleBackend, MemoryBackend, RecordedCall};
    pub use crate::core::{
        AdapterConfig, AdapterError, AdapterMetrics, AdapterState, BackendError, BackendMethod,
        BackendResult, Composition, LevelToken, LogAdapter, LogAdapterBuilder, Result, Severity,
        StructuredBackend, TimezoneSetting,
    };
}

#[cfg(feature = "file")]
pub use crate::backends::{FileBackend, JsonBackend};
pub use crate::backends::{BackendRecord, ConsoleBackend, MemoryBackend, RecordedCall};
pub use crate::core::{
    dispatch, init_timezone, AdapterConfig, AdapterError, AdapterMetrics, AdapterState,
    BackendError, BackendMethod, BackendResult, Clock, Composition, DateToken, LevelToken,
    LogAdapter, LogAdapterBuilder, LogFormat, Result, Severity, StructuredBackend, Substitutions,
    TimezoneSetting, DEFAULT_DATE_PATTERN, DEFAULT_PROCESS_NAME,
};
