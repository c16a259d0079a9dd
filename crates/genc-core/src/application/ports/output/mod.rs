//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `genc-adapters` crate provides implementations.

use std::path::Path;

use crate::application::error::{FsResult, RepositoryError};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `genc_adapters::filesystem::LocalFilesystem` (production)
/// - `genc_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Content is raw bytes so copies and rewrites are byte exact.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create one directory. Fails with `AlreadyExists` if it is present and
    /// with `NotFound` if the parent is missing.
    fn create_dir(&self, path: &Path) -> FsResult<()>;

    /// Create or truncate a file.
    fn write_file(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    fn read_file(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Rename a file or directory. May replace an existing file at `to`.
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Port for version control initialization.
///
/// Implemented by:
/// - `genc_adapters::vcs::GitRepositoryInitializer`
#[cfg_attr(test, mockall::automock)]
pub trait RepositoryInitializer: Send + Sync {
    /// Turn an existing directory into an empty repository.
    fn init_repository(&self, path: &Path) -> Result<(), RepositoryError>;
}
