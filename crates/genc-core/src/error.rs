//! Unified error handling for genc core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::{RenameError, ScaffoldError};
use crate::domain::DomainError;

/// Root error type for genc core operations.
#[derive(Debug, Error, Clone)]
pub enum GencError {
    /// Invalid input (project name, language, template kind).
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Scaffold(#[from] ScaffoldError),

    #[error("{0}")]
    Rename(#[from] RenameError),
}

impl GencError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Scaffold(e) => e.suggestions(),
            Self::Rename(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Scaffold(e) => e.category(),
            Self::Rename(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type GencResult<T> = Result<T, GencError>;
