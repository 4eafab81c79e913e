//! Scene Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Obtain the scene name (argument or prompt)
//! 2. Plan: validate, check collisions, render templates
//! 3. Execute: create directory and files with rollback
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, NamePrompt},
        services::{ScaffoldExecutor, ScaffoldPlanner, SceneArtifacts},
    },
    domain::{PackageName, ScaffoldPlan},
    error::SceneResult,
};

/// Main scaffolding service.
pub struct SceneService {
    filesystem: Box<dyn Filesystem>,
    package: Option<PackageName>,
}

impl SceneService {
    /// Create a new scene service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use scenic_core::application::SceneService;
    ///
    /// let service = SceneService::new(Box::new(filesystem)); // impl Filesystem
    /// let artifacts = service.scaffold("Login", "./app/src/main/java")?;
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            package: None,
        }
    }

    /// Set the package generated files are declared in.
    pub fn with_package(mut self, package: Option<PackageName>) -> Self {
        self.package = package;
        self
    }

    /// Scaffold a scene named `base` inside `target`.
    ///
    /// Either all six artifacts exist afterwards or none of them do.
    #[instrument(skip_all, fields(base = %base, target = %target.as_ref().display()))]
    pub fn scaffold(&self, base: &str, target: impl AsRef<Path>) -> SceneResult<SceneArtifacts> {
        info!("Create scene {}", base);

        let plan = self.planner().plan(base, target.as_ref())?;
        ScaffoldExecutor::new(self.filesystem.as_ref()).execute(plan)
    }

    /// Ask `prompt` for the name, then scaffold.
    pub fn scaffold_with_prompt(
        &self,
        prompt: &dyn NamePrompt,
        target: impl AsRef<Path>,
    ) -> SceneResult<SceneArtifacts> {
        let base = prompt.prompt()?.ok_or(ApplicationError::PromptCancelled)?;
        self.scaffold(&base, target)
    }

    /// Render the plan for `base` without touching the filesystem.
    pub fn preview(&self, base: &str, target: impl AsRef<Path>) -> SceneResult<ScaffoldPlan> {
        self.planner().preview(base, target.as_ref())
    }

    fn planner(&self) -> ScaffoldPlanner<'_> {
        ScaffoldPlanner::new(self.filesystem.as_ref()).with_package(self.package.clone())
    }
}
