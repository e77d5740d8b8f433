//! Console backend implementation

use super::record::BackendRecord;
use crate::core::{BackendResult, StructuredBackend};
#[cfg(feature = "console")]
use colored::Colorize;

/// Writes each line to the terminal
///
/// Emergency through Error go to stderr, everything else to stdout.
pub struct ConsoleBackend {
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
}

impl ConsoleBackend {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Format a record as `LEVEL     message`
    pub fn format_record(&self, record: &BackendRecord) -> String {
        let label = format!("{:9}", record.level_label());

        #[cfg(feature = "console")]
        let label = match record.severity {
            Some(severity) if self.use_colors => label.color(severity.color_code()).to_string(),
            _ => label,
        };

        format!("{} {}", label, record.message)
    }

    fn write(&self, level: i32, message: &str) -> BackendResult {
        let record = BackendRecord::new(level, message);
        let output = self.format_record(&record);

        match record.severity {
            Some(severity) if severity.is_error_or_worse() => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }
}

impl Default for ConsoleBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuredBackend for ConsoleBackend {
    fn log(&self, level: i32, message: &str) -> BackendResult {
        self.write(level, message)
    }

    fn name(&self) -> &str {
        "console"
    }
}
