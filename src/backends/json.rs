//! JSON backend for structured output

use super::record::BackendRecord;
use crate::core::{BackendError, BackendResult, Result, StructuredBackend};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// JSON file backend
///
/// Writes each call as a single-line JSON object (JSONL format).
pub struct JsonBackend {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl JsonBackend {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

impl StructuredBackend for JsonBackend {
    fn log(&self, level: i32, message: &str) -> BackendResult {
        let record = BackendRecord::new(level, message);
        let json = serde_json::to_string(&record)?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json).map_err(BackendError::from)
    }

    fn name(&self) -> &str {
        "json"
    }
}

impl Drop for JsonBackend {
    fn drop(&mut self) {
        if let Err(e) = self.writer.get_mut().flush() {
            eprintln!(
                "[LOG ADAPTER ERROR] Failed to flush '{}': {}",
                self.path.display(),
                e
            );
        }
    }
}
