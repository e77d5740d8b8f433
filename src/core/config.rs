//! Handler configuration
//!
//! Keys follow the logging section of the host application's configuration:
//!
//! ```json
//! {
//!   "logging.processname": "idp",
//!   "logging.format": "%date{%b %d %H:%M:%S} %process %level ",
//!   "logging.level_token": "empty",
//!   "logging.composition": "template",
//!   "timezone": "utc"
//! }
//! ```

use super::error::Result;
use super::format::{Composition, LevelToken};
use super::timestamp::TimezoneSetting;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Process name used when configuration does not set one
pub const DEFAULT_PROCESS_NAME: &str = "SimpleSAMLphp";

fn default_process_name() -> String {
    DEFAULT_PROCESS_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    #[serde(rename = "logging.processname", default = "default_process_name")]
    pub process_name: String,

    #[serde(rename = "logging.format", default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(rename = "logging.level_token", default)]
    pub level_token: LevelToken,

    #[serde(rename = "logging.composition", default)]
    pub composition: Composition,

    /// Applied by process bootstrap through `init_timezone`, not by the adapter
    #[serde(default)]
    pub timezone: TimezoneSetting,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            process_name: default_process_name(),
            format: None,
            level_token: LevelToken::default(),
            composition: Composition::default(),
            timezone: TimezoneSetting::default(),
        }
    }
}

impl AdapterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Only the timezone can be out of range; any process name is accepted
    pub fn validate(&self) -> Result<()> {
        self.timezone.validate()
    }

    #[must_use]
    pub fn with_process_name(mut self, name: impl Into<String>) -> Self {
        self.process_name = name.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_level_token(mut self, level_token: LevelToken) -> Self {
        self.level_token = level_token;
        self
    }

    #[must_use]
    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: TimezoneSetting) -> Self {
        self.timezone = timezone;
        self
    }
}
