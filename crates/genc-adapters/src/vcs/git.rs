//! Git repository initialization through libgit2.

use std::path::Path;

use genc_core::application::{RepositoryError, ports::RepositoryInitializer};
use tracing::debug;

/// Creates an empty git repository, equivalent to `git init <path>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRepositoryInitializer;

impl GitRepositoryInitializer {
    pub fn new() -> Self {
        Self
    }
}

impl RepositoryInitializer for GitRepositoryInitializer {
    fn init_repository(&self, path: &Path) -> Result<(), RepositoryError> {
        let repo = git2::Repository::init(path).map_err(|e| RepositoryError {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })?;
        debug!(git_dir = %repo.path().display(), "Initialized repository");
        Ok(())
    }
}
