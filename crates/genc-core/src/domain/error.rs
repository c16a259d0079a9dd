use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unknown language variant: {0}")]
    UnknownLanguage(String),

    #[error("Unknown template kind: {0}")]
    UnknownArtifactKind(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "The name is used as a directory, a file name and a Make variable".into(),
                "Use letters, digits, hyphens and underscores".into(),
                "Examples: my-project, my_app, project123".into(),
            ],
            Self::UnknownLanguage(lang) => vec![
                format!("'{}' is not a supported language", lang),
                "Supported languages:".into(),
                "  • c    - C (gcc)".into(),
                "  • cpp  - C++ (g++), also accepted as c++ or cxx".into(),
            ],
            Self::UnknownArtifactKind(kind) => vec![
                format!("'{}' is not a known template", kind),
                "Available templates: makefile, gitignore, source, src-makefile".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::UnknownLanguage(_) | Self::UnknownArtifactKind(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
