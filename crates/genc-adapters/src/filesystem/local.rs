//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use genc_core::application::{FilesystemError, FsOperation, FsResult, ports::Filesystem};

/// Production filesystem implementation using `std::fs`.
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
    fn create_dir(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir(path).map_err(|e| map_io_error(path, e, FsOperation::CreateDir))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, FsOperation::WriteFile))
    }

    fn read_file(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, FsOperation::ReadFile))
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, FsOperation::Rename))
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, FsOperation::RemoveFile))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, FsOperation::RemoveDir))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: FsOperation) -> FilesystemError {
    FilesystemError::new(operation, path, &e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_is_exclusive() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("demo");

        fs.create_dir(&dir).unwrap();
        let err = fs.create_dir(&dir).unwrap_err();
        assert!(err.is_already_exists());
        assert_eq!(err.operation, FsOperation::CreateDir);
    }

    #[test]
    fn create_dir_requires_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .create_dir(&tmp.path().join("a/b"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn bytes_round_trip_unchanged() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("blob");
        let bytes = [0u8, 0xff, b'\r', b'\n', 0x7f];

        fs.write_file(&file, &bytes).unwrap();
        assert_eq!(fs.read_file(&file).unwrap(), bytes);
    }

    #[test]
    fn rename_and_remove() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let a = tmp.path().join("a");
        let b = tmp.path().join("b");

        fs.write_file(&a, b"x").unwrap();
        fs.rename(&a, &b).unwrap();
        assert!(!fs.exists(&a));
        assert!(fs.exists(&b));

        fs.remove_file(&b).unwrap();
        assert!(!fs.exists(&b));
        assert!(fs.rename(&a, &b).unwrap_err().is_not_found());
    }

    #[test]
    fn remove_dir_all_removes_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let root = tmp.path().join("demo");
        fs.create_dir(&root).unwrap();
        fs.create_dir(&root.join("src")).unwrap();
        fs.write_file(&root.join("src/demo.c"), b"int main;").unwrap();

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }

    #[test]
    fn is_file_excludes_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("target");
        let file = tmp.path().join("Makefile");
        fs.create_dir(&dir).unwrap();
        fs.write_file(&file, b"all:").unwrap();

        assert!(fs.is_file(&file));
        assert!(!fs.is_file(&dir));
        assert!(!fs.is_file(&tmp.path().join("missing")));
    }
}
