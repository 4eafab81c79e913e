//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use scenic_core::application::ports::{
    ArtifactHandle, DirectoryHandle, EntryKind, FileHandle, Filesystem, FsFailure, FsFailureKind,
    FsResult,
};
use tracing::{trace, warn};

/// Production filesystem implementation using `std::fs`.
///
/// Directories are created with `create_dir` (never `create_dir_all`) and
/// files with `create_new`, so an existing entry is always reported as
/// `AlreadyExists` instead of being reused or truncated.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_directory(&self, parent: &Path, name: &str) -> FsResult<DirectoryHandle> {
        let path = parent.join(name);
        fs::create_dir(&path).map_err(|e| map_io_error(&path, e, "create directory"))?;
        trace!(path = %path.display(), "mkdir");
        Ok(DirectoryHandle::new(path))
    }

    fn create_file(
        &self,
        directory: &DirectoryHandle,
        name: &str,
        content: &str,
    ) -> FsResult<FileHandle> {
        let path = directory.path().join(name);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| map_io_error(&path, e, "create file"))?;

        // Rollback only sees files that got a handle, so a half-written file
        // is removed here.
        if let Err(e) = file.write_all(content.as_bytes()).and_then(|()| file.flush()) {
            drop(file);
            return Err(discard_partial(&path, map_io_error(&path, e, "write file")));
        }

        trace!(path = %path.display(), bytes = content.len(), "write");
        Ok(FileHandle::new(path))
    }

    fn delete(&self, handle: &ArtifactHandle) -> FsResult<()> {
        match handle {
            ArtifactHandle::File(file) => fs::remove_file(file.path())
                .map_err(|e| map_io_error(file.path(), e, "remove file")),
            ArtifactHandle::Directory(dir) => fs::remove_dir(dir.path())
                .map_err(|e| map_io_error(dir.path(), e, "remove directory")),
        }
    }

    fn entry_kind(&self, parent: &Path, name: &str) -> Option<EntryKind> {
        let path = parent.join(name);
        // symlink_metadata: a dangling link still occupies the name.
        let meta = fs::symlink_metadata(&path).ok()?;
        let kind = if meta.is_dir() {
            EntryKind::Directory
        } else if meta.is_file() {
            EntryKind::File
        } else if meta.file_type().is_symlink() {
            match fs::metadata(&path) {
                Ok(target) if target.is_dir() => EntryKind::Directory,
                Ok(target) if target.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            }
        } else {
            EntryKind::Other
        };
        Some(kind)
    }
}

/// Remove a file whose write failed.  If that fails too, the file is named
/// in the returned failure so the caller can report it.
fn discard_partial(path: &Path, failure: FsFailure) -> FsFailure {
    match fs::remove_file(path) {
        Ok(()) => failure,
        Err(e) if e.kind() == io::ErrorKind::NotFound => failure,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not remove partially written file");
            let message = format!(
                "{}; partially written {} was left behind: {}",
                failure.message,
                path.display(),
                e
            );
            FsFailure::new(failure.kind, message).with_stray(path)
        }
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> FsFailure {
    let kind = match e.kind() {
        io::ErrorKind::AlreadyExists => FsFailureKind::AlreadyExists,
        io::ErrorKind::NotFound => FsFailureKind::NotFound,
        io::ErrorKind::PermissionDenied => FsFailureKind::PermissionDenied,
        _ => FsFailureKind::Other,
    };

    FsFailure::new(
        kind,
        format!("Failed to {} {}: {}", operation, path.display(), e),
    )
}
