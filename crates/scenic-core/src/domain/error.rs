// ============================================================================
// domain/error.rs - VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Domain errors are raised before any filesystem collaborator is touched.
/// All errors are:
/// - Cloneable (callers may keep them around for reporting)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid scene name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid package '{package}': {reason}")]
    InvalidPackage { package: String, reason: String },
}

impl DomainError {
    pub(crate) fn invalid_name(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_package(package: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPackage {
            package: package.to_string(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("Scene name '{}' is invalid: {}", name, reason),
                "Use a type-name fragment such as Login or UserProfile".into(),
                "Letters, digits, '_' and '$' only; do not start with a digit".into(),
            ],
            Self::InvalidPackage { package, reason } => vec![
                format!("Package '{}' is invalid: {}", package, reason),
                "Use dot-separated identifiers, e.g. com.example.app".into(),
            ],
        }
    }
}
