//! Domain value objects: ProjectName, LanguageVariant, BuildMode, ArtifactKind.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers. Template text lives in
//! `catalog.rs`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectName ──────────────────────────────────────────────────────────────

/// A validated project name.
///
/// The same token is used as the project directory, the source file stem,
/// the build artifact and the value of the build file's `PROJECT` line, so
/// it has to be a single, plain filesystem entry name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a project name.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name == "." || name == ".." {
        return Err(invalid("name cannot be a relative directory reference"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if name.contains('\0') {
        return Err(invalid("name cannot contain NUL bytes"));
    }
    if name.chars().any(|c| c.is_ascii_whitespace()) {
        return Err(invalid("name cannot contain whitespace"));
    }
    Ok(())
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── LanguageVariant ──────────────────────────────────────────────────────────

/// The language family a project is generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageVariant {
    #[default]
    C,
    Cpp,
}

impl LanguageVariant {
    pub const ALL: [LanguageVariant; 2] = [Self::C, Self::Cpp];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "cpp",
        }
    }

    /// Extension of the generated source stub, without the dot.
    pub const fn source_extension(&self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "cpp",
        }
    }

    /// Compiler driver written into the build file.
    pub const fn compiler(&self) -> &'static str {
        match self {
            Self::C => "gcc",
            Self::Cpp => "g++",
        }
    }
}

impl fmt::Display for LanguageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(Self::C),
            "cpp" | "c++" | "cxx" => Ok(Self::Cpp),
            other => Err(DomainError::UnknownLanguage(other.to_string())),
        }
    }
}

// ── BuildMode ────────────────────────────────────────────────────────────────

/// Build mode selected by the generated Makefile at `make` time.
///
/// The generator never picks one: both branches end up in the same file and
/// `mode` decides between them when the user runs `make`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Debug,
    Release,
}

impl BuildMode {
    pub const ALL: [BuildMode; 2] = [Self::Debug, Self::Release];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// The kinds of text artifact the catalog can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    BuildFile,
    IgnoreFile,
    SourceStub,
    DelegatedBuildFile,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        Self::BuildFile,
        Self::IgnoreFile,
        Self::SourceStub,
        Self::DelegatedBuildFile,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BuildFile => "makefile",
            Self::IgnoreFile => "gitignore",
            Self::SourceStub => "source",
            Self::DelegatedBuildFile => "src-makefile",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "makefile" | "build" | "build-file" => Ok(Self::BuildFile),
            "gitignore" | "ignore" => Ok(Self::IgnoreFile),
            "source" | "main" | "stub" => Ok(Self::SourceStub),
            "src-makefile" | "delegated" => Ok(Self::DelegatedBuildFile),
            other => Err(DomainError::UnknownArtifactKind(other.to_string())),
        }
    }
}
