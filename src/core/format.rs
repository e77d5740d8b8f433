//! Format templates and placeholder substitution
//!
//! Recognized tokens:
//! - `%process` → the configured process name
//! - `%level` → empty string, unless [`LevelToken::Name`] is selected
//! - `%date` / `%date{pattern}` → current time rendered with `pattern`
//!   (strftime syntax) or [`DEFAULT_DATE_PATTERN`]
//! - `%msg` → the message, only when composing with
//!   [`Composition::MessageToken`]
//!
//! Anything else, including malformed tokens, is literal text.

use super::severity::Severity;
use super::timestamp::{self, DEFAULT_DATE_PATTERN};
use chrono::{DateTime, FixedOffset};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const PROCESS_TOKEN: &str = "%process";
pub const LEVEL_TOKEN: &str = "%level";
pub const MESSAGE_TOKEN: &str = "%msg";

static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%date(?:\{([^}]+)\})?").expect("date token regex is valid")
});

/// What `%level` expands to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelToken {
    /// Replace with nothing
    #[default]
    Empty,
    /// Replace with the lowercase severity name, or the number for unmapped levels
    Name,
}

impl LevelToken {
    pub fn render(&self, level: i32) -> String {
        match self {
            LevelToken::Empty => String::new(),
            LevelToken::Name => match Severity::from_level(level) {
                Some(severity) => severity.method_name().to_string(),
                None => level.to_string(),
            },
        }
    }
}

/// How the format and the incoming message are combined into one line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Composition {
    /// The message is appended to the format
    #[default]
    Template,
    /// `%msg` in the format is replaced by the message; without `%msg` the
    /// message is appended
    MessageToken,
    /// The message already contains the expanded format and is used as is
    PreRendered,
}

/// A `%date` token found in a format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateToken {
    /// Exact text matched, e.g. `%date{%Y}`
    pub token: String,
    /// strftime pattern to render with
    pub pattern: String,
}

impl DateToken {
    /// First `%date` token in `format`, if any
    pub fn find(format: &str) -> Option<Self> {
        let caps = DATE_TOKEN.captures(format)?;
        let token = caps.get(0)?.as_str().to_string();
        let pattern = caps
            .get(1)
            .map_or(DEFAULT_DATE_PATTERN, |m| m.as_str())
            .to_string();
        Some(Self { token, pattern })
    }

    pub fn render(&self, now: &DateTime<FixedOffset>) -> Option<String> {
        timestamp::render(&self.pattern, now)
    }
}

/// A parsed output format
///
/// The date token is located once, when the format is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFormat {
    template: String,
    date: Option<DateToken>,
}

impl LogFormat {
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        let date = DateToken::find(&template);
        Self { template, date }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    pub fn date_token(&self) -> Option<&DateToken> {
        self.date.as_ref()
    }

    pub fn has_message_token(&self) -> bool {
        self.template.contains(MESSAGE_TOKEN)
    }

    /// Combine the format with a message into the line to be substituted
    pub fn compose(&self, message: &str, composition: Composition) -> String {
        match composition {
            Composition::PreRendered => message.to_string(),
            Composition::MessageToken if self.has_message_token() => {
                self.template.replace(MESSAGE_TOKEN, message)
            }
            Composition::Template | Composition::MessageToken => {
                let mut line = String::with_capacity(self.template.len() + message.len());
                line.push_str(&self.template);
                line.push_str(message);
                line
            }
        }
    }
}

impl From<&str> for LogFormat {
    fn from(template: &str) -> Self {
        LogFormat::new(template)
    }
}

impl From<String> for LogFormat {
    fn from(template: String) -> Self {
        LogFormat::new(template)
    }
}

/// Ordered token → replacement pairs for one `log` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    pairs: Vec<(String, String)>,
}

impl Substitutions {
    /// Build the list in fixed order: `%process`, `%level`, then the date
    /// token of `format` if it has one that renders.
    pub fn build(
        process_name: &str,
        level_token: LevelToken,
        level: i32,
        format: Option<&LogFormat>,
        now: &DateTime<FixedOffset>,
    ) -> Self {
        let mut pairs = Vec::with_capacity(3);
        pairs.push((PROCESS_TOKEN.to_string(), process_name.to_string()));
        pairs.push((LEVEL_TOKEN.to_string(), level_token.render(level)));

        if let Some(date) = format.and_then(LogFormat::date_token) {
            if let Some(rendered) = date.render(now) {
                pairs.push((date.token.clone(), rendered));
            }
        }

        Self { pairs }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Apply every pair in order; each token is replaced everywhere it occurs
    pub fn apply(&self, line: &str) -> String {
        let mut out = line.to_string();
        for (token, replacement) in &self.pairs {
            if out.contains(token.as_str()) {
                out = out.replace(token.as_str(), replacement);
            }
        }
        out
    }
}
