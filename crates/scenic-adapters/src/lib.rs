//! Infrastructure adapters for scenic.
//!
//! This crate implements the ports defined in `scenic-core::application::ports`.
//! It contains all I/O operations.

pub mod filesystem;
pub mod prompt;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::FixedNamePrompt;
