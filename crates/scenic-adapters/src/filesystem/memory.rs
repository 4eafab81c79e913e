//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use scenic_core::application::ports::{
    ArtifactHandle, DirectoryHandle, EntryKind, FileHandle, Filesystem, FsFailure, FsFailureKind,
    FsResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and
/// inspect another. Failures can be injected per file name, for directory
/// creation, and for deletes. Every port call is counted.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    failing_files: HashSet<String>,
    fail_directories: bool,
    fail_deletes: bool,
    calls: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filesystem where `root` (and its ancestors) already exist.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let fs = Self::new();
        fs.add_directory(root);
        fs
    }

    /// Seed a directory and its ancestors (not counted as a call).
    pub fn add_directory(&self, path: impl AsRef<Path>) {
        let mut inner = self.write();
        let mut current = PathBuf::new();
        for component in path.as_ref().components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Seed a file (not counted as a call).
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_directory(parent);
        }
        self.write().files.insert(path.to_path_buf(), content.into());
    }

    /// Make `create_file` fail for `name`.
    pub fn fail_file_named(&self, name: impl Into<String>) {
        self.write().failing_files.insert(name.into());
    }

    /// Make `create_directory` fail with a permission error.
    pub fn fail_directory_creation(&self) {
        self.write().fail_directories = true;
    }

    /// Make every `delete` fail.
    pub fn fail_deletes(&self) {
        self.write().fail_deletes = true;
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read().files.get(path.as_ref()).cloned()
    }

    /// Whether a file or directory exists at `path`.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        let inner = self.read();
        let path = path.as_ref();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    /// Files directly inside `dir`, sorted.
    pub fn list_files(&self, dir: impl AsRef<Path>) -> Vec<PathBuf> {
        let dir = dir.as_ref();
        self.read()
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect()
    }

    /// Total number of files and directories.
    pub fn entry_count(&self) -> usize {
        let inner = self.read();
        inner.files.len() + inner.directories.len()
    }

    /// Number of port calls made so far.
    pub fn call_count(&self) -> usize {
        self.read().calls
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MemoryFilesystemInner {
    fn occupied(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_directory(&self, parent: &Path, name: &str) -> FsResult<DirectoryHandle> {
        let mut inner = self.write();
        inner.calls += 1;
        let path = parent.join(name);

        if inner.fail_directories {
            return Err(FsFailure::new(
                FsFailureKind::PermissionDenied,
                format!("injected failure creating {}", path.display()),
            ));
        }
        if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
            return Err(FsFailure::new(
                FsFailureKind::NotFound,
                format!("parent directory {} does not exist", parent.display()),
            ));
        }
        if inner.occupied(&path) {
            return Err(FsFailure::new(
                FsFailureKind::AlreadyExists,
                format!("{} already exists", path.display()),
            ));
        }

        inner.directories.insert(path.clone());
        Ok(DirectoryHandle::new(path))
    }

    fn create_file(
        &self,
        directory: &DirectoryHandle,
        name: &str,
        content: &str,
    ) -> FsResult<FileHandle> {
        let mut inner = self.write();
        inner.calls += 1;
        let path = directory.path().join(name);

        if inner.failing_files.contains(name) {
            return Err(FsFailure::new(
                FsFailureKind::Other,
                format!("injected failure writing {}", path.display()),
            ));
        }
        if !inner.directories.contains(directory.path()) {
            return Err(FsFailure::new(
                FsFailureKind::NotFound,
                "Parent directory does not exist",
            ));
        }
        if inner.occupied(&path) {
            return Err(FsFailure::new(
                FsFailureKind::AlreadyExists,
                format!("{} already exists", path.display()),
            ));
        }

        inner.files.insert(path.clone(), content.to_string());
        Ok(FileHandle::new(path))
    }

    fn delete(&self, handle: &ArtifactHandle) -> FsResult<()> {
        let mut inner = self.write();
        inner.calls += 1;

        if inner.fail_deletes {
            return Err(FsFailure::new(
                FsFailureKind::PermissionDenied,
                format!("injected failure deleting {}", handle.path().display()),
            ));
        }

        match handle {
            ArtifactHandle::File(file) => inner
                .files
                .remove(file.path())
                .map(|_| ())
                .ok_or_else(|| not_found(file.path())),
            ArtifactHandle::Directory(dir) => {
                let path = dir.path();
                let has_children = inner.files.keys().any(|p| p.parent() == Some(path))
                    || inner.directories.iter().any(|p| p.parent() == Some(path));
                if has_children {
                    return Err(FsFailure::new(
                        FsFailureKind::Other,
                        format!("{} is not empty", path.display()),
                    ));
                }
                if inner.directories.remove(path) {
                    Ok(())
                } else {
                    Err(not_found(path))
                }
            }
        }
    }

    fn entry_kind(&self, parent: &Path, name: &str) -> Option<EntryKind> {
        let mut inner = self.write();
        inner.calls += 1;
        let path = parent.join(name);

        if inner.directories.contains(&path) {
            Some(EntryKind::Directory)
        } else if inner.files.contains_key(&path) {
            Some(EntryKind::File)
        } else {
            None
        }
    }
}

fn not_found(path: &Path) -> FsFailure {
    FsFailure::new(
        FsFailureKind::NotFound,
        format!("{} does not exist", path.display()),
    )
}
