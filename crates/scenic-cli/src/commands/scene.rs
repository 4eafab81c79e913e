//! Scaffolding a scene: the default action of `scaffold-scene`.
//!
//! Responsibility: resolve the name, target and package from flags and
//! config, call the core scene service, and display results. No business
//! logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use scenic_adapters::{FixedNamePrompt, LocalFilesystem};
use scenic_core::{
    application::{ApplicationError, SceneArtifacts, SceneService, ports::NamePrompt},
    domain::{ComponentKind, PackageName, ScaffoldPlan},
    error::SceneError,
};

use crate::{
    cli::SceneArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the scene action.
///
/// Dispatch sequence:
/// 1. Resolve target directory and package (flag, then config)
/// 2. Pick the name source: the argument, or an interactive prompt
/// 3. `--dry-run`: render the plan and describe it
/// 4. Otherwise scaffold through `SceneService` on the local filesystem
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(args: SceneArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let target = resolve_target(args.target, &config);
    let package = resolve_package(args.package, &config)?;

    debug!(
        target = %target.display(),
        package = package.as_ref().map(PackageName::as_str).unwrap_or("none"),
        "Scene options resolved"
    );

    let prompt = name_source(args.name)?;
    let service = SceneService::new(Box::new(LocalFilesystem::new())).with_package(package);

    if args.dry_run {
        let base = prompt
            .prompt()?
            .ok_or(SceneError::from(ApplicationError::PromptCancelled))?;
        let plan = service.preview(&base, &target)?;
        return report_plan(&plan, &output);
    }

    let artifacts = service.scaffold_with_prompt(prompt.as_ref(), &target)?;
    info!(
        directory = %artifacts.directory.path().display(),
        files = artifacts.file_count(),
        "Scene created"
    );
    report_artifacts(&artifacts, &output)
}

// ── Option resolution ─────────────────────────────────────────────────────────

fn resolve_target(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.or_else(|| config.scene.target.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn resolve_package(flag: Option<String>, config: &AppConfig) -> CliResult<Option<PackageName>> {
    flag.or_else(|| config.scene.package.clone())
        .map(|raw| PackageName::parse(raw).map_err(|e| CliError::Core(e.into())))
        .transpose()
}

/// The argument when given, else a terminal prompt when one is possible.
fn name_source(name: Option<String>) -> CliResult<Box<dyn NamePrompt>> {
    if let Some(name) = name {
        return Ok(Box::new(FixedNamePrompt::new(name)));
    }
    interactive_prompt()
}

#[cfg(feature = "interactive")]
fn interactive_prompt() -> CliResult<Box<dyn NamePrompt>> {
    use std::io::IsTerminal as _;

    if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
        Ok(Box::new(crate::prompt::TerminalPrompt::new()))
    } else {
        Err(CliError::MissingName)
    }
}

#[cfg(not(feature = "interactive"))]
fn interactive_prompt() -> CliResult<Box<dyn NamePrompt>> {
    Err(CliError::MissingName)
}

// ── Reports ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct SceneReport {
    dry_run: bool,
    directory: PathBuf,
    files: Vec<FileReport>,
}

#[derive(Debug, Serialize)]
struct FileReport {
    kind: ComponentKind,
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes: Option<usize>,
}

impl SceneReport {
    fn planned(plan: &ScaffoldPlan) -> Self {
        let directory = plan.directory_path();
        let files = plan
            .files()
            .iter()
            .map(|file| FileReport {
                kind: file.kind,
                path: directory.join(&file.file_name),
                bytes: Some(file.size()),
            })
            .collect();
        Self {
            dry_run: true,
            directory,
            files,
        }
    }

    fn created(artifacts: &SceneArtifacts) -> Self {
        // Executor returns files in creation order, which is ComponentKind::ALL.
        let files = ComponentKind::ALL
            .iter()
            .zip(&artifacts.files)
            .map(|(kind, handle)| FileReport {
                kind: *kind,
                path: handle.path().to_path_buf(),
                bytes: None,
            })
            .collect();
        Self {
            dry_run: false,
            directory: artifacts.directory.path().to_path_buf(),
            files,
        }
    }
}

fn report_plan(plan: &ScaffoldPlan, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return output.json(&SceneReport::planned(plan));
    }

    output.info(&format!(
        "Dry run: would create {}",
        plan.directory_path().display()
    ))?;
    for file in plan.files() {
        output.print(&format!("  {:<28} {:>6} bytes", file.file_name, file.size()))?;
    }
    Ok(())
}

fn report_artifacts(artifacts: &SceneArtifacts, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return output.json(&SceneReport::created(artifacts));
    }

    let directory = artifacts.directory.path();
    output.success(&format!("Scene created at {}", directory.display()))?;
    for file in &artifacts.files {
        output.print(&format!("  {}", display_name(file.path())))?;
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(target: Option<&str>, package: Option<&str>) -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.scene.target = target.map(PathBuf::from);
        cfg.scene.package = package.map(str::to_string);
        cfg
    }

    #[test]
    fn target_defaults_to_current_directory() {
        assert_eq!(resolve_target(None, &AppConfig::default()), PathBuf::from("."));
    }

    #[test]
    fn target_flag_beats_config() {
        let cfg = config_with(Some("from/config"), None);
        assert_eq!(resolve_target(None, &cfg), PathBuf::from("from/config"));
        assert_eq!(
            resolve_target(Some(PathBuf::from("from/flag")), &cfg),
            PathBuf::from("from/flag")
        );
    }

    #[test]
    fn package_flag_beats_config() {
        let cfg = config_with(None, Some("com.config"));
        let from_config = resolve_package(None, &cfg).unwrap().unwrap();
        assert_eq!(from_config.as_str(), "com.config");
        let from_flag = resolve_package(Some("com.flag".into()), &cfg)
            .unwrap()
            .unwrap();
        assert_eq!(from_flag.as_str(), "com.flag");
    }

    #[test]
    fn no_package_anywhere() {
        assert!(resolve_package(None, &AppConfig::default()).unwrap().is_none());
    }

    #[test]
    fn invalid_package_exits_with_usage_code() {
        let err = resolve_package(Some("com..acme".into()), &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn argument_is_the_name_source() {
        let prompt = name_source(Some("Login".into())).unwrap();
        assert_eq!(prompt.prompt().unwrap().as_deref(), Some("Login"));
    }

    #[test]
    fn created_report_pairs_kinds_with_files() {
        use scenic_core::application::ports::{DirectoryHandle, FileHandle};

        let artifacts = SceneArtifacts {
            directory: DirectoryHandle::new("out/login"),
            files: ["LoginActivity.java", "LoginFragment.java", "LoginPresenter.java", "LoginVM.java", "LoginView.java"]
                .iter()
                .map(|f| FileHandle::new(Path::new("out/login").join(f)))
                .collect(),
        };

        let report = SceneReport::created(&artifacts);
        assert!(!report.dry_run);
        assert_eq!(report.files.len(), 5);
        assert_eq!(report.files[3].kind, ComponentKind::ViewModel);
        assert!(report.files[3].path.ends_with("LoginVM.java"));

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["files"][0].get("bytes").is_none());
    }
}
