//! Application layer errors.
//!
//! These errors represent failures while executing a scaffold or rename
//! against the outside world. Input validation errors are `DomainError`
//! from `crate::domain`.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Filesystem primitive that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    CreateDir,
    WriteFile,
    ReadFile,
    Rename,
    RemoveFile,
    RemoveDir,
}

impl FsOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateDir => "create directory",
            Self::WriteFile => "write file",
            Self::ReadFile => "read file",
            Self::Rename => "rename",
            Self::RemoveFile => "remove file",
            Self::RemoveDir => "remove directory",
        }
    }
}

impl fmt::Display for FsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by a `Filesystem` port implementation.
///
/// The `io::ErrorKind` is kept so callers can tell "already exists" and
/// "not found" apart without string matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to {operation} {}: {reason}", .path.display())]
pub struct FilesystemError {
    pub operation: FsOperation,
    pub path: PathBuf,
    pub kind: io::ErrorKind,
    pub reason: String,
}

impl FilesystemError {
    pub fn new(operation: FsOperation, path: impl Into<PathBuf>, err: &io::Error) -> Self {
        Self {
            operation,
            path: path.into(),
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    pub fn is_already_exists(&self) -> bool {
        self.kind == io::ErrorKind::AlreadyExists
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == io::ErrorKind::NotFound
    }
}

pub type FsResult<T> = Result<T, FilesystemError>;

/// Failure reported by a `RepositoryInitializer`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to initialize repository at {}: {reason}", .path.display())]
pub struct RepositoryError {
    pub path: PathBuf,
    pub reason: String,
}

// ============================================================================
// Scaffold
// ============================================================================

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaffoldError {
    /// The project directory is already present. Nothing was modified.
    #[error("Project already exists at {}", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error(transparent)]
    IoFailure(#[from] FilesystemError),

    /// The user-supplied source file could not be read.
    #[error("Cannot read source file {}: {reason}", .path.display())]
    SourceReadFailure { path: PathBuf, reason: String },

    #[error(transparent)]
    RepositoryInitFailure(#[from] RepositoryError),
}

impl ScaffoldError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or pass --dir to create the project somewhere else".into(),
            ],
            Self::IoFailure(e) => vec![
                format!("Failed to access: {}", e.path.display()),
                "Check that you have write permissions".into(),
                "Pass --cleanup to remove the partial project on failure".into(),
            ],
            Self::SourceReadFailure { path, .. } => vec![
                format!("Check that {} exists and is readable", path.display()),
                "Omit the source argument to start from the hello world stub".into(),
            ],
            Self::RepositoryInitFailure(_) => vec![
                "The project files were written; only the repository is missing".into(),
                "Run 'git init' inside the project directory".into(),
                "Or pass --no-git to skip repository initialization".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::SourceReadFailure { .. } => ErrorCategory::NotFound,
            Self::IoFailure(_) | Self::RepositoryInitFailure(_) => ErrorCategory::Internal,
        }
    }
}

// ============================================================================
// Rename
// ============================================================================

/// Rename step whose failure is collected rather than returned immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameStep {
    Directory,
    SourceFile,
}

impl fmt::Display for RenameStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => f.write_str("directory"),
            Self::SourceFile => f.write_str("source file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameStepFailure {
    pub step: RenameStep,
    pub from: PathBuf,
    pub to: PathBuf,
    pub reason: String,
}

impl fmt::Display for RenameStepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}: {}",
            self.step,
            self.from.display(),
            self.to.display(),
            self.reason
        )
    }
}

fn join_failures(failures: &[RenameStepFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenameError {
    /// The directory and/or source file step failed.
    #[error("Project already renamed or missing: {}", join_failures(.failures))]
    AlreadyRenamedOrMissing { failures: Vec<RenameStepFailure> },

    /// The build file's first line is not a name declaration.
    #[error("Malformed build file {}: first line is '{first_line}'", .path.display())]
    MalformedBuildFile { path: PathBuf, first_line: String },

    #[error(transparent)]
    IoFailure(#[from] FilesystemError),
}

impl RenameError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyRenamedOrMissing { failures } => {
                let mut out: Vec<String> = failures
                    .iter()
                    .map(|f| format!("{} step: {}", f.step, f.reason))
                    .collect();
                out.push("Check that the old project exists in the working directory".into());
                out.push("Check that no directory with the new name exists".into());
                out
            }
            Self::MalformedBuildFile { path, .. } => vec![
                format!(
                    "The first line of {} must start with 'PROJECT = '",
                    path.display()
                ),
                "Nothing was renamed".into(),
            ],
            Self::IoFailure(e) => vec![
                format!("Failed to access: {}", e.path.display()),
                "The rename may be partially applied; inspect the project directory".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyRenamedOrMissing { .. } => ErrorCategory::NotFound,
            Self::MalformedBuildFile { .. } => ErrorCategory::Validation,
            Self::IoFailure(_) => ErrorCategory::Internal,
        }
    }
}
