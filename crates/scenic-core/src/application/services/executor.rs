//! Scaffold executor - all-or-nothing materialization of a plan.
//!
//! Steps are strictly sequential: directory first, then each file in plan
//! order. A failing file step rolls back everything created so far in this
//! invocation (files in reverse order, then the directory).

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ArtifactHandle, DirectoryHandle, FileHandle, Filesystem},
    },
    domain::ScaffoldPlan,
    error::SceneResult,
};

/// Everything one successful invocation created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneArtifacts {
    pub directory: DirectoryHandle,
    /// Same order as the plan's files.
    pub files: Vec<FileHandle>,
}

impl SceneArtifacts {
    /// The six handles, directory first.
    pub fn handles(&self) -> Vec<ArtifactHandle> {
        std::iter::once(ArtifactHandle::Directory(self.directory.clone()))
            .chain(self.files.iter().cloned().map(ArtifactHandle::File))
            .collect()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Executes plans against a filesystem collaborator.
pub struct ScaffoldExecutor<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ScaffoldExecutor<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Consume `plan` and create its directory and files.
    #[instrument(
        skip_all,
        fields(
            invocation = %plan.id(),
            directory = %plan.directory_path().display()
        )
    )]
    pub fn execute(&self, plan: ScaffoldPlan) -> SceneResult<SceneArtifacts> {
        let directory = self
            .filesystem
            .create_directory(plan.target(), plan.directory_name())
            .map_err(|cause| {
                let path = plan.directory_path();
                if cause.is_already_exists() {
                    ApplicationError::DirectoryCollision { path }
                } else {
                    ApplicationError::DirectoryCreationFailed { path, cause }
                }
            })?;
        debug!("Directory created");

        let mut created: Vec<FileHandle> = Vec::with_capacity(plan.file_count());
        for file in plan.files() {
            match self
                .filesystem
                .create_file(&directory, &file.file_name, &file.content)
            {
                Ok(handle) => {
                    debug!(file = %file.file_name, bytes = file.size(), "File created");
                    created.push(handle);
                }
                Err(cause) => {
                    warn!(file = %file.file_name, error = %cause, "File creation failed, rolling back");
                    let mut leftovers: Vec<PathBuf> = cause.stray.iter().cloned().collect();
                    leftovers.extend(self.rollback(&directory, &created));
                    return Err(ApplicationError::FileCreationFailed {
                        file_name: file.file_name.clone(),
                        cause,
                        leftovers,
                    }
                    .into());
                }
            }
        }

        info!(files = created.len(), "Scene created");
        Ok(SceneArtifacts {
            directory,
            files: created,
        })
    }

    /// Best-effort rollback. Returns the paths that could not be removed.
    fn rollback(&self, directory: &DirectoryHandle, created: &[FileHandle]) -> Vec<PathBuf> {
        let artifacts = created
            .iter()
            .rev()
            .cloned()
            .map(ArtifactHandle::File)
            .chain(std::iter::once(ArtifactHandle::Directory(directory.clone())));

        let mut leftovers = Vec::new();
        for artifact in artifacts {
            if let Err(e) = self.filesystem.delete(&artifact) {
                warn!(
                    error = %e,
                    path = %artifact.path().display(),
                    "Rollback failed"
                );
                leftovers.push(artifact.path().to_path_buf());
            }
        }

        if leftovers.is_empty() {
            info!("Rollback successful");
        }
        leftovers
    }
}
