use std::path::{Path, PathBuf};

use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::names::{ComponentKind, ComponentNameSet};

/// Final unit of work ready for materialization.
///
/// This is the output of planning. It contains no business logic, only data,
/// and is consumed (moved) exactly once by the executor.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldPlan {
    /// Correlates log events of one invocation.
    pub(crate) id: Uuid,
    pub(crate) target: PathBuf,
    pub(crate) directory_name: String,
    pub(crate) names: ComponentNameSet,
    pub(crate) files: Vec<PlannedFile>,
}

impl ScaffoldPlan {
    pub(crate) fn new(target: impl Into<PathBuf>, names: ComponentNameSet) -> Self {
        Self {
            id: Uuid::new_v4(),
            target: target.into(),
            directory_name: names.directory().to_string(),
            names,
            files: Vec::with_capacity(ComponentKind::ALL.len()),
        }
    }

    pub(crate) fn push_file(&mut self, kind: ComponentKind, file_name: String, content: String) {
        self.files.push(PlannedFile {
            kind,
            file_name,
            content,
        });
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Parent location the scene directory is created in.
    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn directory_name(&self) -> &str {
        &self.directory_name
    }

    /// Full path of the scene directory.
    pub fn directory_path(&self) -> PathBuf {
        self.target.join(&self.directory_name)
    }

    pub fn names(&self) -> &ComponentNameSet {
        &self.names
    }

    /// Files in creation order.
    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub kind: ComponentKind,
    pub file_name: String,
    pub content: String,
}

impl PlannedFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
