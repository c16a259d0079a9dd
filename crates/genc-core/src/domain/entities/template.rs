//! Render context for the template catalog.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  RenderContext (Value Object)                               │
//! │  └── Variable substitution: {{PROJECT_NAME}} -> "demo"      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use crate::domain::value_objects::ProjectName;

/// Make expression used for the project name when none is known.
///
/// Lets `genc template` print a build file that can be dropped into any
/// directory: the project takes the directory's name.
pub const DIRECTORY_NAME_EXPR: &str = "$(notdir $(CURDIR))";

/// Context for template rendering.
///
/// A **Value Object** containing all data needed to render a template.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "demo" | User input |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Context for a named project.
    pub fn new(project_name: &ProjectName) -> Self {
        let mut variables = HashMap::new();
        variables.insert("PROJECT_NAME".to_string(), project_name.to_string());

        Self { variables }
    }

    /// Context for a project whose name is taken from its directory at build time.
    pub fn detached() -> Self {
        let mut variables = HashMap::new();
        variables.insert("PROJECT_NAME".to_string(), DIRECTORY_NAME_EXPR.to_string());

        Self { variables }
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// - `{{UNKNOWN}}` remains as literal `{{UNKNOWN}}` (no error)
    /// - Single braces (C blocks, Make `$(...)`) are left alone
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}
