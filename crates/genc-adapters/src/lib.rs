//! Infrastructure adapters for genc.
//!
//! This crate implements the ports defined in `genc_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use vcs::GitRepositoryInitializer;
