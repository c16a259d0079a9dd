//! Application services - orchestrate use cases.
//!
//! Services derive plans from the domain layer and execute them through
//! the ports: "scaffold a project" and "rename a project".

pub mod rename_service;
pub mod scaffold_service;

pub use rename_service::RenameService;
pub use scaffold_service::{ScaffoldOptions, ScaffoldService};
