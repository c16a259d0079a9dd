// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for genc.
//!
//! This module contains pure logic with ZERO I/O. Filesystem and version
//! control concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No I/O**: templates are rendered and plans derived in memory
//! - **Owned paths**: every path is a `PathBuf` composed with `join`
//! - **Immutable values**: all domain objects are Clone + PartialEq
pub mod catalog;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use catalog::{NAME_DECLARATION_PREFIX, TemplateCatalog};
pub use entities::{
    layout::ProjectLayout,
    plan::{ScaffoldPlan, ScaffoldStep},
    rename_plan::{PathPair, RenamePlan, declared_name, rewrite_declaration},
    template::RenderContext,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{ArtifactKind, BuildMode, LanguageVariant, ProjectName};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn language_parses_correctly() {
        assert_eq!(LanguageVariant::from_str("c").unwrap(), LanguageVariant::C);
        assert_eq!(LanguageVariant::from_str("CPP").unwrap(), LanguageVariant::Cpp);
        assert_eq!(LanguageVariant::from_str("c++").unwrap(), LanguageVariant::Cpp);
        assert!(matches!(
            LanguageVariant::from_str("rust"),
            Err(DomainError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn language_properties() {
        assert_eq!(LanguageVariant::C.compiler(), "gcc");
        assert_eq!(LanguageVariant::Cpp.compiler(), "g++");
        assert_eq!(LanguageVariant::Cpp.source_extension(), "cpp");
        assert_eq!(LanguageVariant::default(), LanguageVariant::C);
    }

    #[test]
    fn build_mode_defaults_to_debug() {
        assert_eq!(BuildMode::default(), BuildMode::Debug);
        assert_eq!(BuildMode::Release.to_string(), "release");
    }

    #[test]
    fn artifact_kind_round_trips_through_display() {
        for kind in ArtifactKind::ALL {
            assert_eq!(ArtifactKind::from_str(kind.as_str()).unwrap(), kind);
        }
        assert!(ArtifactKind::from_str("readme").is_err());
    }

    // ========================================================================
    // Project Name Tests
    // ========================================================================

    #[test]
    fn valid_names_pass() {
        for name in ["demo", "my-project", "my_app", "project123", "MyApp"] {
            assert!(ProjectName::new(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn invalid_names_are_rejected() {
        for name in ["", ".", "..", ".hidden", "a/b", "a\\b", "a b", "a\tb", "nul\0"] {
            assert!(
                matches!(
                    ProjectName::new(name),
                    Err(DomainError::InvalidProjectName { .. })
                ),
                "accepted: {name:?}"
            );
        }
    }

    #[test]
    fn invalid_name_error_has_suggestions() {
        let err = ProjectName::new("a/b").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn unknown_language_lists_supported() {
        let err = LanguageVariant::from_str("java").unwrap_err();
        assert!(err.suggestions().iter().any(|s| s.contains("cpp")));
    }
}
