//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the host
//! environment. The `scenic-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::error::SceneResult;

// ── Handles ──────────────────────────────────────────────────────────────────

/// A directory created through a [`Filesystem`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DirectoryHandle {
    path: PathBuf,
}

impl DirectoryHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A file created through a [`Filesystem`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileHandle {
    path: PathBuf,
}

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Either kind of created artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ArtifactHandle {
    Directory(DirectoryHandle),
    File(FileHandle),
}

impl ArtifactHandle {
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(d) => d.path(),
            Self::File(f) => f.path(),
        }
    }
}

/// What occupies a name in a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Dangling symlinks, sockets, anything that is neither.  A symlink
    /// reports the kind of its target.
    Other,
}

// ── Failures ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsFailureKind {
    AlreadyExists,
    NotFound,
    PermissionDenied,
    Other,
}

impl fmt::Display for FsFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AlreadyExists => "already exists",
            Self::NotFound => "not found",
            Self::PermissionDenied => "permission denied",
            Self::Other => "i/o failure",
        })
    }
}

/// Cause reported by a filesystem collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct FsFailure {
    pub kind: FsFailureKind,
    pub message: String,
    /// Entry the failed call created but could not clean up. It has no
    /// handle, so rollback cannot reach it.
    pub stray: Option<PathBuf>,
}

impl FsFailure {
    pub fn new(kind: FsFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            stray: None,
        }
    }

    pub fn with_stray(mut self, path: impl Into<PathBuf>) -> Self {
        self.stray = Some(path.into());
        self
    }

    pub fn is_already_exists(&self) -> bool {
        self.kind == FsFailureKind::AlreadyExists
    }
}

pub type FsResult<T> = Result<T, FsFailure>;

// ── Ports ────────────────────────────────────────────────────────────────────

/// Port for filesystem operations.
///
/// Implemented by:
/// - `scenic_adapters::filesystem::LocalFilesystem` (production)
/// - `scenic_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Contract
///
/// - `create_directory` must fail with `AlreadyExists` when the name is
///   taken; it must not create missing parents. Concurrent scaffolds rely
///   on this to detect a lost race.
/// - `delete` of a directory removes it only when empty. Rollback deletes
///   files first.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create `name` inside `parent`.
    fn create_directory(&self, parent: &Path, name: &str) -> FsResult<DirectoryHandle>;

    /// Create `name` inside `directory` with `content`.
    fn create_file(
        &self,
        directory: &DirectoryHandle,
        name: &str,
        content: &str,
    ) -> FsResult<FileHandle>;

    /// Remove a previously created artifact.
    fn delete(&self, handle: &ArtifactHandle) -> FsResult<()>;

    /// What, if anything, is at `parent/name`.
    fn entry_kind(&self, parent: &Path, name: &str) -> Option<EntryKind>;

    /// Check if `parent/name` exists.
    fn exists(&self, parent: &Path, name: &str) -> bool {
        self.entry_kind(parent, name).is_some()
    }
}

/// Port supplying the raw scene name from the user.
///
/// Implemented by:
/// - `scenic_adapters::prompt::FixedNamePrompt` (programmatic/testing)
/// - the interactive prompt in `scenic-cli`
pub trait NamePrompt {
    /// `Ok(None)` means the user dismissed the prompt.
    fn prompt(&self) -> SceneResult<Option<String>>;
}
