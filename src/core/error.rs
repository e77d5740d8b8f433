//! Error types for the log adapter

pub type Result<T> = std::result::Result<T, AdapterError>;

/// Result returned by [`StructuredBackend`](super::backend::StructuredBackend) calls
pub type BackendResult = std::result::Result<(), BackendError>;

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Error raised by the backend during dispatch, passed through untouched
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl AdapterError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        AdapterError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        AdapterError::Other(msg.into())
    }

    /// Whether this error came from the backend rather than the adapter itself
    pub fn is_backend(&self) -> bool {
        matches!(self, AdapterError::Backend(_))
    }
}

/// Error raised by a structured-logging backend
///
/// Wraps whatever the backend failed with so the caller sees the original
/// message and can walk the `source()` chain.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct BackendError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl BackendError {
    /// Create a backend error from a plain message
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error, keeping its display text
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        BackendError::new(err)
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::new(err)
    }
}
