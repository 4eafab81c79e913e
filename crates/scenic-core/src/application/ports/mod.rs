//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `scenic-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory/file creation, deletion, lookup
//!   - `NamePrompt`: collects the scene name from the user
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (`SceneService`, used by the CLI)

pub mod output;

pub use output::{
    ArtifactHandle, DirectoryHandle, EntryKind, FileHandle, Filesystem, FsFailure,
    FsFailureKind, FsResult, NamePrompt,
};

#[cfg(test)]
pub use output::MockFilesystem;
