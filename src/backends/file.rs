//! File backend implementation

use super::record::BackendRecord;
use crate::core::{BackendError, BackendResult, Result, StructuredBackend};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Timestamp layout of each line
const LINE_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Appends `[timestamp] [LEVEL] message` lines to a file
pub struct FileBackend {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
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

    fn write(&self, level: i32, message: &str) -> BackendResult {
        let record = BackendRecord::new(level, message);
        let line = format!(
            "[{}] [{}] {}\n",
            record.timestamp.format(LINE_TIMESTAMP),
            record.level_label(),
            record.message
        );

        self.writer
            .lock()
            .write_all(line.as_bytes())
            .map_err(BackendError::from)
    }
}

impl StructuredBackend for FileBackend {
    fn log(&self, level: i32, message: &str) -> BackendResult {
        self.write(level, message)
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileBackend {
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
