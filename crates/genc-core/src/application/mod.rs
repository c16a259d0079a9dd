//! Application layer for genc.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, RenameService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer executes plans derived by the domain layer but
//! decides nothing about their content. All templates and paths live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{RenameService, ScaffoldOptions, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, RepositoryInitializer};

pub use error::{
    FilesystemError, FsOperation, FsResult, RenameError, RenameStep, RenameStepFailure,
    RepositoryError, ScaffoldError,
};
