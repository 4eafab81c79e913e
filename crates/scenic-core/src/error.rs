//! Unified error handling for scenic-core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for scenic-core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Naming errors, raised before any filesystem access.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Collision and creation failures.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl SceneError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for directory and file collisions; the caller may retry with
    /// another name.
    pub fn is_collision(&self) -> bool {
        self.category() == ErrorCategory::Conflict
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Filesystem,
    Cancelled,
    Internal,
}

/// Convenient result type alias.
pub type SceneResult<T> = Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::ports::{FsFailure, FsFailureKind};

    #[test]
    fn domain_errors_are_validation() {
        let err: SceneError = DomainError::InvalidName {
            name: "".into(),
            reason: "empty".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn collisions_are_conflicts() {
        let dir: SceneError = ApplicationError::DirectoryCollision {
            path: PathBuf::from("login"),
        }
        .into();
        let file: SceneError = ApplicationError::FileCollision {
            path: PathBuf::from("login"),
        }
        .into();
        assert!(dir.is_collision());
        assert!(file.is_collision());
    }

    #[test]
    fn file_creation_failure_mentions_file_and_cause() {
        let err: SceneError = ApplicationError::FileCreationFailed {
            file_name: "LoginPresenter.java".into(),
            cause: FsFailure::new(FsFailureKind::PermissionDenied, "read-only"),
            leftovers: vec![],
        }
        .into();
        let message = err.to_string();
        assert!(message.contains("LoginPresenter.java"));
        assert!(message.contains("read-only"));
        assert_eq!(err.category(), ErrorCategory::Filesystem);
    }

    #[test]
    fn leftovers_are_listed_in_suggestions() {
        let err = ApplicationError::FileCreationFailed {
            file_name: "LoginVM.java".into(),
            cause: FsFailure::new(FsFailureKind::Other, "disk full"),
            leftovers: vec![PathBuf::from("out/login")],
        };
        assert!(err.suggestions().iter().any(|s| s.contains("out/login")));
    }
}
