pub mod layout;
pub mod plan;
pub mod rename_plan;
pub mod template;

pub use crate::domain::DomainError;
pub use layout::ProjectLayout;
pub use plan::{ScaffoldPlan, ScaffoldStep};
pub use rename_plan::{PathPair, RenamePlan};
pub use template::RenderContext;
