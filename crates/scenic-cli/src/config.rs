//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`SCENIC__SCENE__PACKAGE=com.acme`, ...)
//! 3. Config file (`--config FILE`, else the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Prefix of environment overrides.
const ENV_PREFIX: &str = "SCENIC";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for new scenes.
    pub scene: SceneDefaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Log file settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDefaults {
    /// Directory scenes are created in when `--target` is omitted.
    pub target: Option<PathBuf>,
    /// Package of `target`; enables the `package` header in generated files.
    pub package: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Append log events to this file in addition to stderr.
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `config_file` (from `--config`) must exist; the default
    /// location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        match config_file {
            Some(path) => Self::build(path, true),
            None => Self::build(&Self::config_path(), false),
        }
    }

    /// Like [`AppConfig::load`], but a missing explicit file falls back to
    /// defaults.  `init` runs before the file it is asked to create exists.
    pub fn load_optional(config_file: Option<&PathBuf>) -> CliResult<Self> {
        Self::build(&Self::active_path(config_file.map(PathBuf::as_path)), false)
    }

    fn build(path: &Path, required: bool) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to load {}: {e}", path.display()),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.scenic.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "scenic", "scenic")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".scenic.toml"))
    }

    /// The file `init` writes and `config path` reports.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_have_no_package() {
        let cfg = AppConfig::default();
        assert!(cfg.scene.package.is_none());
        assert!(cfg.scene.target.is_none());
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn file_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("scenic.toml");
        std::fs::write(
            &path,
            "[scene]\npackage = \"com.acme\"\ntarget = \"app/src\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.scene.package.as_deref(), Some("com.acme"));
        assert_eq!(cfg.scene.target, Some(PathBuf::from("app/src")));
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.toml");
        assert!(matches!(
            AppConfig::load(Some(&missing)),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn missing_file_is_tolerated_before_init() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("conf").join("scenic.toml");
        let cfg = AppConfig::load_optional(Some(&missing)).unwrap();
        assert_eq!(cfg.output, OutputConfig::default());
        assert!(!missing.exists());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("scenic.toml");
        std::fs::write(&path, "[scene\npackage = ").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn active_path_prefers_explicit_file() {
        let explicit = PathBuf::from("custom.toml");
        assert_eq!(AppConfig::active_path(Some(&explicit)), explicit);
        assert_eq!(AppConfig::active_path(None), AppConfig::config_path());
    }
}
