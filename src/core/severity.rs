//! Severity definitions
//!
//! Syslog numbering: lower value means higher severity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl Severity {
    /// All severities, most severe first
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    /// Resolve a raw facade level. `None` for anything outside 0..=7.
    pub const fn from_level(level: i32) -> Option<Self> {
        match level {
            0 => Some(Severity::Emergency),
            1 => Some(Severity::Alert),
            2 => Some(Severity::Critical),
            3 => Some(Severity::Error),
            4 => Some(Severity::Warning),
            5 => Some(Severity::Notice),
            6 => Some(Severity::Info),
            7 => Some(Severity::Debug),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_level(self) -> i32 {
        self as i32
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Emergency => "EMERGENCY",
            Severity::Alert => "ALERT",
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Name of the backend method this severity dispatches to
    pub fn method_name(&self) -> &'static str {
        match self {
            Severity::Emergency => "emergency",
            Severity::Alert => "alert",
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    /// Emergency through Error
    pub fn is_error_or_worse(&self) -> bool {
        *self <= Severity::Error
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Emergency => BrightRed,
            Severity::Alert => BrightRed,
            Severity::Critical => Red,
            Severity::Error => Red,
            Severity::Warning => Yellow,
            Severity::Notice => Cyan,
            Severity::Info => Green,
            Severity::Debug => Blue,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EMERGENCY" | "EMERG" => Ok(Severity::Emergency),
            "ALERT" => Ok(Severity::Alert),
            "CRITICAL" | "CRIT" => Ok(Severity::Critical),
            "ERROR" | "ERR" => Ok(Severity::Error),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "NOTICE" => Ok(Severity::Notice),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

impl TryFrom<i32> for Severity {
    type Error = i32;

    fn try_from(level: i32) -> Result<Self, i32> {
        Severity::from_level(level).ok_or(level)
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        severity.as_level()
    }
}
