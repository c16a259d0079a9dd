//! In-memory filesystem adapter for testing.
//!
//! Mirrors the `std::fs` semantics the services rely on: exclusive
//! `create_dir`, missing parents are `NotFound`, `rename` moves a whole
//! subtree.

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use genc_core::application::{FilesystemError, FsOperation, FsResult, ports::Filesystem};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }
}

fn fail(operation: FsOperation, path: &Path, kind: io::ErrorKind, reason: &str) -> FilesystemError {
    FilesystemError::new(operation, path, &io::Error::new(kind, reason))
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Register a directory and all of its ancestors (test setup helper).
    pub fn add_dir_all(&self, path: impl AsRef<Path>) {
        let mut inner = self.write();
        let mut current = PathBuf::new();
        for component in path.as_ref().components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Read a file's content (testing helper).
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.read().files.get(path.as_ref()).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read().files.keys().cloned().collect()
    }

    // Poisoning only happens after a panic in another test thread.
    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> FsResult<()> {
        let mut inner = self.write();
        let op = FsOperation::CreateDir;

        if inner.contains(path) {
            return Err(fail(op, path, io::ErrorKind::AlreadyExists, "File exists"));
        }
        if !inner.parent_exists(path) {
            return Err(fail(op, path, io::ErrorKind::NotFound, "No such file or directory"));
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let mut inner = self.write();
        let op = FsOperation::WriteFile;

        if !inner.parent_exists(path) {
            return Err(fail(op, path, io::ErrorKind::NotFound, "No such file or directory"));
        }
        if inner.directories.contains(path) {
            return Err(fail(op, path, io::ErrorKind::IsADirectory, "Is a directory"));
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.read().files.get(path).cloned().ok_or_else(|| {
            fail(
                FsOperation::ReadFile,
                path,
                io::ErrorKind::NotFound,
                "No such file or directory",
            )
        })
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        let mut inner = self.write();
        let op = FsOperation::Rename;

        if !inner.contains(from) {
            return Err(fail(op, from, io::ErrorKind::NotFound, "No such file or directory"));
        }
        if !inner.parent_exists(to) {
            return Err(fail(op, from, io::ErrorKind::NotFound, "No such file or directory"));
        }

        if inner.files.contains_key(from) {
            if inner.directories.contains(to) {
                return Err(fail(op, from, io::ErrorKind::IsADirectory, "Is a directory"));
            }
            if let Some(content) = inner.files.remove(from) {
                inner.files.insert(to.to_path_buf(), content);
            }
            return Ok(());
        }

        if inner.contains(to) {
            return Err(fail(op, from, io::ErrorKind::AlreadyExists, "Directory not empty"));
        }

        let moved_dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for dir in moved_dirs {
            inner.directories.remove(&dir);
            inner.directories.insert(rebase(&dir, from, to));
        }

        let moved_files: Vec<PathBuf> = inner
            .files
            .keys()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for file in moved_files {
            if let Some(content) = inner.files.remove(&file) {
                inner.files.insert(rebase(&file, from, to), content);
            }
        }

        Ok(())
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        self.write().files.remove(path).map(|_| ()).ok_or_else(|| {
            fail(
                FsOperation::RemoveFile,
                path,
                io::ErrorKind::NotFound,
                "No such file or directory",
            )
        })
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        let mut inner = self.write();

        if !inner.directories.contains(path) {
            return Err(fail(
                FsOperation::RemoveDir,
                path,
                io::ErrorKind::NotFound,
                "No such file or directory",
            ));
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read().contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.read().files.contains_key(path)
    }
}

fn rebase(path: &Path, from: &Path, to: &Path) -> PathBuf {
    match path.strip_prefix(from) {
        Ok(rest) if rest.as_os_str().is_empty() => to.to_path_buf(),
        Ok(rest) => to.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
