//! The log adapter: token substitution and level dispatch

use super::{
    backend::{self, BackendMethod, StructuredBackend},
    config::{AdapterConfig, DEFAULT_PROCESS_NAME},
    error::{AdapterError, Result},
    format::{Composition, LevelToken, LogFormat, Substitutions},
    metrics::AdapterMetrics,
    severity::Severity,
    timestamp::{self, Clock},
};
use std::fmt;
use std::sync::Arc;

/// Whether a format has been set yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterState {
    /// No format; messages are substituted as they arrive
    Constructed,
    /// At least one `set_format` call has happened
    Formatted,
}

/// Rewrites placeholders in log lines and forwards them to a
/// [`StructuredBackend`] at the matching severity.
///
/// `log` takes `&self` and never locks, so an adapter can be shared behind an
/// `Arc` once its format is set. Changing the format needs `&mut self`.
pub struct LogAdapter {
    backend: Arc<dyn StructuredBackend>,
    process_name: String,
    format: Option<LogFormat>,
    level_token: LevelToken,
    composition: Composition,
    clock: Clock,
    metrics: Arc<AdapterMetrics>,
}

impl LogAdapter {
    /// Create an adapter with the default process name
    pub fn new(backend: Arc<dyn StructuredBackend>) -> Self {
        Self {
            backend,
            process_name: DEFAULT_PROCESS_NAME.to_string(),
            format: None,
            level_token: LevelToken::default(),
            composition: Composition::default(),
            clock: timestamp::system_clock(),
            metrics: Arc::new(AdapterMetrics::new()),
        }
    }

    /// Build from handler configuration
    ///
    /// Fails with [`AdapterError::InvalidConfiguration`] when `backend` is
    /// `None`. The configured timezone is not applied here; bootstrap code
    /// passes it to [`init_timezone`](crate::core::timestamp::init_timezone).
    pub fn from_config(
        config: &AdapterConfig,
        backend: Option<Arc<dyn StructuredBackend>>,
    ) -> Result<Self> {
        config.validate()?;

        let mut builder = LogAdapter::builder()
            .process_name(config.process_name.clone())
            .level_token(config.level_token)
            .composition(config.composition);
        if let Some(backend) = backend {
            builder = builder.backend(backend);
        }
        if let Some(ref format) = config.format {
            builder = builder.format(format.clone());
        }
        builder.build()
    }

    /// Replace the format template
    ///
    /// No validation: malformed tokens stay literal text.
    pub fn set_format(&mut self, format: impl Into<String>) {
        self.format = Some(LogFormat::new(format));
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_ref().map(LogFormat::as_str)
    }

    pub fn state(&self) -> AdapterState {
        if self.format.is_some() {
            AdapterState::Formatted
        } else {
            AdapterState::Constructed
        }
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    pub fn level_token(&self) -> LevelToken {
        self.level_token
    }

    pub fn composition(&self) -> Composition {
        self.composition
    }

    pub fn backend(&self) -> &Arc<dyn StructuredBackend> {
        &self.backend
    }

    pub fn metrics(&self) -> &AdapterMetrics {
        &self.metrics
    }

    /// Produce the line `log` would send for `level` and `message`, without
    /// calling the backend
    pub fn render(&self, level: i32, message: &str) -> String {
        let line = match self.format {
            Some(ref format) => format.compose(message, self.composition),
            None => message.to_string(),
        };

        let now = (self.clock)();
        let substitutions = Substitutions::build(
            &self.process_name,
            self.level_token,
            level,
            self.format.as_ref(),
            &now,
        );
        substitutions.apply(&line)
    }

    /// Substitute tokens and send the line to the backend method for `level`
    ///
    /// Makes exactly one backend call. A backend error is returned as
    /// [`AdapterError::Backend`] and is not retried.
    pub fn log(&self, level: i32, message: &str) -> Result<()> {
        let line = self.render(level, message);
        let method = BackendMethod::for_level(level);

        self.metrics.record_dispatch(method);
        backend::dispatch(self.backend.as_ref(), level, &line).map_err(|e| {
            self.metrics.record_backend_failure();
            AdapterError::Backend(e)
        })
    }

    #[inline]
    pub fn log_severity(&self, severity: Severity, message: &str) -> Result<()> {
        self.log(severity.as_level(), message)
    }

    #[inline]
    pub fn emergency(&self, message: &str) -> Result<()> {
        self.log_severity(Severity::Emergency, message)
    }

    #[inline]
    pub fn alert(&self, message: &str) -> Result<()> {
        self.log_severity(Severity::Alert, message)
    }

    #[inline]
    pub fn critical(&self, message: &str) -> Result<()> {
        self.log_severity(Severity::Critical, message)
    }

    #[inline]
    pub fn error(&self, message: &str) -> Result<()> {
        self.log_severity(Severity::Error, message)
    }

    #[inline]
    pub fn warning(&self, message: &str) -> Result<()> {
        self.log_severity(Severity::Warning, message)
    }

    #[inline]
    pub fn notice(&self, message: &str) -> Result<()> {
        self.log_severity(Severity::Notice, message)
    }

    #[inline]
    pub fn info(&self, message: &str) -> Result<()> {
        self.log_severity(Severity::Info, message)
    }

    #[inline]
    pub fn debug(&self, message: &str) -> Result<()> {
        self.log_severity(Severity::Debug, message)
    }
}

impl fmt::Debug for LogAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogAdapter")
            .field("backend", &self.backend.name())
            .field("process_name", &self.process_name)
            .field("format", &self.format())
            .field("level_token", &self.level_token)
            .field("composition", &self.composition)
            .finish()
    }
}

/// Builder for constructing a LogAdapter with a fluent API
///
/// # Example
/// ```
/// use rust_log_adapter::prelude::*;
/// use std::sync::Arc;
///
/// let backend = Arc::new(MemoryBackend::new());
/// let adapter = LogAdapter::builder()
///     .backend(backend.clone())
///     .process_name("idp")
///     .format("%process: ")
///     .build()
///     .unwrap();
///
/// adapter.info("ready").unwrap();
/// assert_eq!(backend.messages(), vec!["idp: ready".to_string()]);
/// ```
pub struct LogAdapterBuilder {
    backend: Option<Arc<dyn StructuredBackend>>,
    process_name: String,
    format: Option<String>,
    level_token: LevelToken,
    composition: Composition,
    clock: Option<Clock>,
}

impl LogAdapterBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            backend: None,
            process_name: DEFAULT_PROCESS_NAME.to_string(),
            format: None,
            level_token: LevelToken::default(),
            composition: Composition::default(),
            clock: None,
        }
    }

    /// Set the backend messages are dispatched to
    #[must_use = "builder methods return a new value"]
    pub fn backend(mut self, backend: Arc<dyn StructuredBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn process_name(mut self, name: impl Into<String>) -> Self {
        self.process_name = name.into();
        self
    }

    /// Set an initial format, equivalent to calling `set_format` after build
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level_token(mut self, level_token: LevelToken) -> Self {
        self.level_token = level_token;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    /// Override the time source used for `%date`
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the adapter
    ///
    /// Fails if no backend was supplied.
    pub fn build(self) -> Result<LogAdapter> {
        let backend = self.backend.ok_or_else(|| {
            AdapterError::config("LogAdapter", "no structured-logging backend supplied")
        })?;

        let mut adapter = LogAdapter::new(backend);
        adapter.process_name = self.process_name;
        adapter.level_token = self.level_token;
        adapter.composition = self.composition;
        if let Some(clock) = self.clock {
            adapter.clock = clock;
        }
        if let Some(format) = self.format {
            adapter.set_format(format);
        }
        Ok(adapter)
    }
}

impl Default for LogAdapterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogAdapter {
    /// Create a builder for LogAdapter
    #[must_use]
    pub fn builder() -> LogAdapterBuilder {
        LogAdapterBuilder::new()
    }
}
