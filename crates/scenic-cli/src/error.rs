//! Error handling for the scenic CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use scenic_core::{
    application::ApplicationError,
    error::{ErrorCategory as CoreCategory, SceneError},
};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// No scene name was given and none could be prompted for.
    #[error("Missing scene name")]
    MissingName,

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `scenic-core`.
    #[error("Scaffolding failed: {0}")]
    Core(#[from] SceneError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A report could not be serialised.
    #[error("Failed to serialise output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingName => vec![
                "Pass the scene name as an argument: scaffold-scene Login".into(),
                "Or run in an interactive terminal to be prompted for it".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                format!("Check your config file at {}", crate::config::AppConfig::config_path().display()),
                "Use 'scaffold-scene init' to create a default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],

            Self::Serialization(_) => vec![
                "This appears to be a bug in scenic".into(),
                "Retry without --output-format json".into(),
            ],
        }
    }

    /// Get the error category for styling and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingName => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Cancelled => ErrorCategory::UserError,
                CoreCategory::Conflict => ErrorCategory::Conflict,
                CoreCategory::Filesystem => ErrorCategory::Filesystem,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } | Self::Serialization(_) => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Failure                                   | Code |
    /// |-------------------------------------------|------|
    /// | Invalid name / package, missing name      |  2   |
    /// | Directory collision                       |  3   |
    /// | Configuration                             |  4   |
    /// | Directory creation failed                 |  5   |
    /// | File creation failed (rolled back)        |  6   |
    /// | File collision                            |  7   |
    /// | Internal                                  |  1   |
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Core(SceneError::Application(app)) => match app {
                ApplicationError::DirectoryCollision { .. } => 3,
                ApplicationError::DirectoryCreationFailed { .. } => 5,
                ApplicationError::FileCreationFailed { .. } => 6,
                ApplicationError::FileCollision { .. } => 7,
                ApplicationError::PromptCancelled => 2,
                ApplicationError::PromptFailed { .. } => 1,
            },
            _ => match self.category() {
                ErrorCategory::UserError => 2,
                ErrorCategory::Configuration => 4,
                ErrorCategory::Conflict | ErrorCategory::Filesystem | ErrorCategory::Internal => 1,
            },
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Conflict => tracing::warn!("Conflict: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Filesystem => tracing::error!("Filesystem error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments, cancelled prompt).
    UserError,
    /// Something already occupies the scene directory name.
    Conflict,
    /// Configuration error.
    Configuration,
    /// Creating the scene on disk failed.
    Filesystem,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use scenic_core::application::ports::{FsFailure, FsFailureKind};
    use scenic_core::domain::DomainError;

    use super::*;

    fn core(err: impl Into<SceneError>) -> CliError {
        CliError::Core(err.into())
    }

    fn invalid_name() -> CliError {
        core(DomainError::InvalidName {
            name: "a/b".into(),
            reason: "contains a path separator".into(),
        })
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn every_failure_kind_has_its_own_exit_code() {
        let cause = || FsFailure::new(FsFailureKind::PermissionDenied, "denied");
        let cases = [
            (invalid_name(), 2),
            (
                core(ApplicationError::DirectoryCollision {
                    path: PathBuf::from("login"),
                }),
                3,
            ),
            (
                CliError::ConfigError {
                    message: "x".into(),
                    source: None,
                },
                4,
            ),
            (
                core(ApplicationError::DirectoryCreationFailed {
                    path: PathBuf::from("login"),
                    cause: cause(),
                }),
                5,
            ),
            (
                core(ApplicationError::FileCreationFailed {
                    file_name: "LoginPresenter.java".into(),
                    cause: cause(),
                    leftovers: vec![],
                }),
                6,
            ),
            (
                core(ApplicationError::FileCollision {
                    path: PathBuf::from("login"),
                }),
                7,
            ),
        ];

        for (err, code) in cases {
            assert_eq!(err.exit_code(), code, "{err}");
        }
    }

    #[test]
    fn missing_name_and_cancel_are_usage_errors() {
        assert_eq!(CliError::MissingName.exit_code(), 2);
        assert_eq!(core(ApplicationError::PromptCancelled).exit_code(), 2);
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
        assert_eq!(
            core(ApplicationError::PromptFailed {
                reason: "not a terminal".into()
            })
            .exit_code(),
            1
        );
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn core_suggestions_pass_through() {
        let err = invalid_name();
        assert!(!err.suggestions().is_empty());
        assert_eq!(err.category(), ErrorCategory::UserError);
    }

    #[test]
    fn collision_suggests_target() {
        let err = core(ApplicationError::DirectoryCollision {
            path: PathBuf::from("/tmp/login"),
        });
        assert!(err.suggestions().iter().any(|s| s.contains("--target")));
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = invalid_name().format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { ref message, .. }) if message == "reading config"));
    }
}
