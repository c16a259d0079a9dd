//! genc Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the genc
//! C/C++ project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             genc-cli (CLI)              │
//! │     (init, rename, template, config)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ScaffoldService, RenameService)     │
//! │        Execute plans step by step       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, RepositoryInitializer)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     genc-adapters (Infrastructure)      │
//! │ (LocalFilesystem, GitRepositoryInit...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TemplateCatalog, ScaffoldPlan, Rename) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use genc_core::prelude::*;
//!
//! // 1. Validate input
//! let name = ProjectName::new("demo")?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, repository, ".");
//! service.create(&name, LanguageVariant::C, None)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        RenameError, RenameService, ScaffoldError, ScaffoldOptions, ScaffoldService,
        ports::{Filesystem, RepositoryInitializer},
    };
    pub use crate::domain::{
        ArtifactKind, BuildMode, LanguageVariant, ProjectName, RenamePlan, RenderContext,
        ScaffoldPlan, ScaffoldStep, TemplateCatalog,
    };
    pub use crate::error::{GencError, GencResult};
}
