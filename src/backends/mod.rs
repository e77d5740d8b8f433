//! Reference backend implementations

pub mod console;
#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "file")]
pub mod json;
pub mod memory;
pub mod record;

pub use console::ConsoleBackend;
#[cfg(feature = "file")]
pub use file::FileBackend;
#[cfg(feature = "file")]
pub use json::JsonBackend;
pub use memory::{MemoryBackend, RecordedCall};
pub use record::BackendRecord;

// Re-export the trait so backends can be implemented from this module alone
pub use crate::core::StructuredBackend;
