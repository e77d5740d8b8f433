//! Timestamp rendering for `%date` tokens
//!
//! Timezone selection is a process-wide setting made once by bootstrap code
//! through [`init_timezone`]. Adapters never change it; they only read the
//! clock.

use super::error::{AdapterError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::sync::{Arc, OnceLock};

/// Pattern used by a bare `%date` token
pub const DEFAULT_DATE_PATTERN: &str = "%b %d %H:%M:%S";

/// Largest accepted UTC offset, in minutes
const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

static TIMEZONE: OnceLock<TimezoneSetting> = OnceLock::new();

/// Timezone used when rendering `%date`
///
/// Serialized as `"local"`, `"utc"` or `{"offset_minutes": 120}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimezoneSetting {
    /// The operating system's local timezone
    #[default]
    Local,
    Utc,
    /// Fixed offset east of UTC
    OffsetMinutes(i32),
}

impl TimezoneSetting {
    /// Check that a fixed offset is within a day of UTC
    pub fn validate(&self) -> Result<()> {
        if let TimezoneSetting::OffsetMinutes(minutes) = self {
            if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(minutes) {
                return Err(AdapterError::config(
                    "timezone",
                    format!("offset of {} minutes is out of range", minutes),
                ));
            }
        }
        Ok(())
    }

    /// Current time in this timezone
    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            TimezoneSetting::Local => {
                let now = Local::now();
                now.with_timezone(now.offset())
            }
            TimezoneSetting::Utc => Utc::now().with_timezone(&Utc.fix()),
            TimezoneSetting::OffsetMinutes(minutes) => {
                // Out-of-range offsets fall back to UTC
                let offset = minutes
                    .checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .unwrap_or_else(|| Utc.fix());
                Utc::now().with_timezone(&offset)
            }
        }
    }
}

/// Set the process-wide timezone
///
/// Only the first call has an effect. Returns `Ok(true)` when this call set
/// the timezone and `Ok(false)` when it was already initialized.
pub fn init_timezone(setting: TimezoneSetting) -> Result<bool> {
    setting.validate()?;
    let mut installed = false;
    TIMEZONE.get_or_init(|| {
        installed = true;
        setting
    });
    Ok(installed)
}

/// The process-wide timezone, `Local` if bootstrap never set one
pub fn configured_timezone() -> TimezoneSetting {
    TIMEZONE.get().copied().unwrap_or_default()
}

/// Source of "now" for `%date` rendering
pub type Clock = Arc<dyn Fn() -> DateTime<FixedOffset> + Send + Sync>;

/// Clock reading the process-wide timezone on every call
pub fn system_clock() -> Clock {
    Arc::new(|| configured_timezone().now())
}

/// Clock that always returns `instant`
pub fn fixed_clock(instant: DateTime<FixedOffset>) -> Clock {
    Arc::new(move || instant)
}

/// Check whether chrono understands every specifier in `pattern`
pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Render `datetime` with a strftime pattern
///
/// Returns `None` if the pattern contains a specifier that cannot be rendered.
pub fn render(pattern: &str, datetime: &DateTime<FixedOffset>) -> Option<String> {
    if !is_valid_pattern(pattern) {
        return None;
    }

    let mut out = String::with_capacity(pattern.len() + 16);
    write!(out, "{}", datetime.format(pattern)).ok()?;
    Some(out)
}
