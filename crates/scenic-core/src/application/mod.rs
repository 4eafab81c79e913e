//! Application layer for scenic.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldPlanner, ScaffoldExecutor, SceneService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Naming rules and
//! templates live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ScaffoldExecutor, ScaffoldPlanner, SceneArtifacts, SceneService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, NamePrompt};

pub use error::ApplicationError;
