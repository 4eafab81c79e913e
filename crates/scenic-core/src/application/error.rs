//! Application layer errors.
//!
//! These errors represent failures while talking to collaborators, not
//! naming rules. Naming errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::FsFailure;
use crate::error::ErrorCategory;

/// Errors that occur during planning and execution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The scene directory already exists at the target location.
    #[error("Directory already exists at {path}")]
    DirectoryCollision { path: PathBuf },

    /// A file (or other non-directory entry) occupies the scene directory name.
    #[error("A file already exists at {path}")]
    FileCollision { path: PathBuf },

    /// The collaborator could not create the scene directory.
    #[error("Failed to create directory {path}: {cause}")]
    DirectoryCreationFailed { path: PathBuf, cause: FsFailure },

    /// One of the scene files could not be created. Rollback was attempted;
    /// `leftovers` lists anything rollback failed to remove.
    #[error("Failed to create {file_name}: {cause}")]
    FileCreationFailed {
        file_name: String,
        cause: FsFailure,
        leftovers: Vec<PathBuf>,
    },

    /// The name prompt was dismissed without a name.
    #[error("Scene creation cancelled")]
    PromptCancelled,

    /// The name prompt itself failed.
    #[error("Could not read scene name: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryCollision { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different scene name".into(),
                "Or scaffold into another location with --target".into(),
            ],
            Self::FileCollision { path } => vec![
                format!("A file is in the way: {}", path.display()),
                "Rename or remove that file, or choose a different scene name".into(),
            ],
            Self::DirectoryCreationFailed { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the target directory exists".into(),
            ],
            Self::FileCreationFailed { leftovers, .. } if leftovers.is_empty() => vec![
                "No files were left behind; it is safe to retry".into(),
                "Check available disk space and permissions".into(),
            ],
            Self::FileCreationFailed { leftovers, .. } => {
                let mut out = vec!["Rollback could not remove:".to_string()];
                out.extend(leftovers.iter().map(|p| format!("  • {}", p.display())));
                out.push("Remove them manually before retrying".into());
                out
            }
            Self::PromptCancelled => vec!["No changes were made".into()],
            Self::PromptFailed { .. } => {
                vec!["Pass the scene name as an argument instead".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryCollision { .. } | Self::FileCollision { .. } => ErrorCategory::Conflict,
            Self::DirectoryCreationFailed { .. } | Self::FileCreationFailed { .. } => {
                ErrorCategory::Filesystem
            }
            Self::PromptCancelled => ErrorCategory::Cancelled,
            Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}
