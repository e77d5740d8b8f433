//! Record written by the reference backends

use crate::core::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

thread_local! {
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

/// Get cached thread name, computing and caching it on first access
fn get_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendRecord {
    pub timestamp: DateTime<Utc>,
    pub level: i32,
    /// `None` when the level came through the generic `log` call unmapped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<String>,
}

impl BackendRecord {
    /// Escape line breaks and tabs so one record stays on one output line
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: i32, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            severity: Severity::from_level(level),
            message: Self::sanitize_message(message),
            thread_name: get_thread_name(),
        }
    }

    /// Upper-case severity name, or `LEVEL(n)` for unmapped levels
    pub fn level_label(&self) -> String {
        match self.severity {
            Some(severity) => severity.to_str().to_string(),
            None => format!("LEVEL({})", self.level),
        }
    }
}
