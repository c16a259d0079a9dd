//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Derive the plan for a name and language
//! 2. Execute its steps in order against the filesystem port
//! 3. Hand the project root to the repository port
//!
//! The first failing step aborts the run. Completed steps stay on disk
//! unless `cleanup_on_failure` is set.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ScaffoldError,
        ports::{Filesystem, RepositoryInitializer},
    },
    domain::{LanguageVariant, ProjectLayout, ProjectName, ScaffoldPlan, ScaffoldStep},
};

/// Behaviour switches for `ScaffoldService::create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Run the repository step after all files are written.
    pub init_repository: bool,
    /// Remove the project directory when a step after its creation fails.
    pub cleanup_on_failure: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            init_repository: true,
            cleanup_on_failure: false,
        }
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    repository: Box<dyn RepositoryInitializer>,
    base_dir: PathBuf,
    options: ScaffoldOptions,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// Projects are created as direct children of `base_dir`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use genc_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     repository, // impl RepositoryInitializer
    ///     ".",
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        repository: Box<dyn RepositoryInitializer>,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            repository,
            base_dir: base_dir.into(),
            options: ScaffoldOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScaffoldOptions) -> Self {
        self.options = options;
        self
    }

    /// Derive the steps `create` would run, without touching anything.
    pub fn plan(
        &self,
        name: &ProjectName,
        language: LanguageVariant,
        custom_source: Option<&Path>,
    ) -> ScaffoldPlan {
        let layout = ProjectLayout::new(&self.base_dir, name);
        ScaffoldPlan::new(
            &layout,
            language,
            custom_source,
            self.options.init_repository,
        )
    }

    /// Scaffold a new project.
    #[instrument(
        skip_all,
        fields(
            project = %name,
            language = %language,
            base_dir = %self.base_dir.display()
        )
    )]
    pub fn create(
        &self,
        name: &ProjectName,
        language: LanguageVariant,
        custom_source: Option<&Path>,
    ) -> Result<(), ScaffoldError> {
        info!("Scaffolding {} project", language);
        let plan = self.plan(name, language, custom_source);
        self.execute(&plan)
    }

    /// Run every step of a plan in order.
    pub fn execute(&self, plan: &ScaffoldPlan) -> Result<(), ScaffoldError> {
        for (index, step) in plan.steps().iter().enumerate() {
            debug!(step = index + 1, target = %step.target().display(), "Applying step");

            if let Err(e) = self.apply(step) {
                // Step 1 either failed to create the root or found someone
                // else's directory there: never remove it.
                if index > 0 && self.options.cleanup_on_failure {
                    warn!("Scaffold failed, attempting cleanup");
                    self.rollback(plan.root());
                }
                return Err(e);
            }
        }

        info!(path = %plan.root().display(), "Scaffold completed successfully");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn apply(&self, step: &ScaffoldStep) -> Result<(), ScaffoldError> {
        match step {
            ScaffoldStep::CreateDirectory { path } => {
                self.filesystem.create_dir(path).map_err(|e| {
                    if e.is_already_exists() {
                        ScaffoldError::AlreadyExists { path: path.clone() }
                    } else {
                        ScaffoldError::IoFailure(e)
                    }
                })
            }
            ScaffoldStep::WriteFile { path, content, .. } => {
                self.filesystem.write_file(path, content.as_bytes())?;
                Ok(())
            }
            ScaffoldStep::CopySource { from, to } => {
                let bytes = self.filesystem.read_file(from).map_err(|e| {
                    ScaffoldError::SourceReadFailure {
                        path: from.clone(),
                        reason: e.reason,
                    }
                })?;
                self.filesystem.write_file(to, &bytes)?;
                Ok(())
            }
            ScaffoldStep::InitRepository { path } => {
                self.repository.init_repository(path)?;
                Ok(())
            }
        }
    }

    /// Best-effort cleanup on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Cleanup failed"
            );
        } else {
            info!("Cleanup successful");
        }
    }
}
