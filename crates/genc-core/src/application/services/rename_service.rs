//! Rename Service - move a generated project to a new name.
//!
//! Steps, in order:
//! 1. Directory `old -> new`
//! 2. Source file `new/src/old.<ext> -> new/src/new.<ext>`
//! 3. Built artifacts, when present
//! 4. Build file first line
//!
//! Failures of steps 1 and 2 are collected into one error; both are always
//! attempted. The build file is validated before step 1 so a malformed one
//! leaves the project untouched.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        RenameError, RenameStep, RenameStepFailure,
        ports::Filesystem,
    },
    domain::{PathPair, ProjectName, RenamePlan, declared_name, rewrite_declaration},
};

pub struct RenameService {
    filesystem: Box<dyn Filesystem>,
    base_dir: PathBuf,
}

impl RenameService {
    /// Projects are looked up as direct children of `base_dir`.
    pub fn new(filesystem: Box<dyn Filesystem>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            base_dir: base_dir.into(),
        }
    }

    pub fn plan(&self, old: &ProjectName, new: &ProjectName) -> RenamePlan {
        RenamePlan::new(&self.base_dir, old, new)
    }

    #[instrument(skip_all, fields(old = %old, new = %new))]
    pub fn rename(&self, old: &ProjectName, new: &ProjectName) -> Result<(), RenameError> {
        let plan = self.plan(old, new);
        self.execute(&plan)
    }

    pub fn execute(&self, plan: &RenamePlan) -> Result<(), RenameError> {
        self.preflight(plan)?;

        let mut failures = Vec::new();
        if let Err(f) = self.rename_directory(&plan.directory) {
            failures.push(f);
        }
        if let Err(f) = self.rename_source(plan) {
            failures.push(f);
        }
        if !failures.is_empty() {
            return Err(RenameError::AlreadyRenamedOrMissing { failures });
        }

        for artifact in &plan.artifacts {
            if self.filesystem.is_file(&artifact.from) {
                self.filesystem.rename(&artifact.from, &artifact.to)?;
                debug!(from = %artifact.from.display(), "Renamed artifact");
            } else {
                debug!(from = %artifact.from.display(), "No artifact, skipping");
            }
        }

        self.rewrite_build_file(plan)?;

        info!("Rename completed successfully");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Validate the build file at its current location.
    ///
    /// Skipped when the old directory is missing; step 1 reports that.
    fn preflight(&self, plan: &RenamePlan) -> Result<(), RenameError> {
        if !self.filesystem.exists(&plan.directory.from) {
            return Ok(());
        }

        let content = self.filesystem.read_file(&plan.original_build_file)?;
        match declared_name(&content) {
            Some(declared) if declared != plan.old.as_str() => {
                warn!(
                    declared,
                    expected = %plan.old,
                    "Build file declares a different name, renaming anyway"
                );
                Ok(())
            }
            Some(_) => Ok(()),
            None => Err(malformed(&plan.original_build_file, &content)),
        }
    }

    fn rename_directory(&self, pair: &PathPair) -> Result<(), RenameStepFailure> {
        let failure = |reason: String| RenameStepFailure {
            step: RenameStep::Directory,
            from: pair.from.clone(),
            to: pair.to.clone(),
            reason,
        };

        if !self.filesystem.exists(&pair.from) {
            return Err(failure("no such directory".into()));
        }
        // std::fs::rename may replace an empty directory on Unix
        if self.filesystem.exists(&pair.to) {
            return Err(failure("target already exists".into()));
        }
        self.filesystem
            .rename(&pair.from, &pair.to)
            .map_err(|e| failure(e.reason))
    }

    fn rename_source(&self, plan: &RenamePlan) -> Result<(), RenameStepFailure> {
        let failure = |pair: &PathPair, reason: String| RenameStepFailure {
            step: RenameStep::SourceFile,
            from: pair.from.clone(),
            to: pair.to.clone(),
            reason,
        };

        match plan
            .source_candidates()
            .find(|c| self.filesystem.is_file(&c.from))
        {
            Some(pair) => self
                .filesystem
                .rename(&pair.from, &pair.to)
                .map_err(|e| failure(pair, e.reason)),
            None => {
                let tried = plan
                    .source_candidates()
                    .map(|c| c.from.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(failure(
                    &plan.source,
                    format!("no source file found (tried {tried})"),
                ))
            }
        }
    }

    /// Write-temp, remove original, move temp into place.
    fn rewrite_build_file(&self, plan: &RenamePlan) -> Result<(), RenameError> {
        let content = self.filesystem.read_file(&plan.build_file)?;
        let rewritten = rewrite_declaration(&content, &plan.declaration())
            .ok_or_else(|| malformed(&plan.build_file, &content))?;

        self.filesystem.write_file(&plan.staging_file, &rewritten)?;
        self.filesystem.remove_file(&plan.build_file)?;
        self.filesystem.rename(&plan.staging_file, &plan.build_file)?;
        debug!(path = %plan.build_file.display(), "Rewrote build file");
        Ok(())
    }
}

fn malformed(path: &Path, content: &[u8]) -> RenameError {
    let first_line = content.split(|b| *b == b'\n').next().unwrap_or_default();
    RenameError::MalformedBuildFile {
        path: path.to_path_buf(),
        first_line: String::from_utf8_lossy(first_line).trim_end().to_string(),
    }
}
