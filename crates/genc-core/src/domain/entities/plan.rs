//! Scaffold plan: the ordered filesystem operations of one `init`.
//!
//! The plan is derived deterministically from its inputs and only exists for
//! the duration of one invocation. Order matters: the exclusive directory
//! creation comes first so nothing is written into a directory that already
//! belonged to someone else, and repository initialization comes last so an
//! earlier failure never leaves a half-initialized repository behind.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    catalog::TemplateCatalog,
    entities::{layout::ProjectLayout, template::RenderContext},
    value_objects::{ArtifactKind, LanguageVariant, ProjectName},
};

/// A single filesystem operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScaffoldStep {
    /// Create one directory; fails if it already exists.
    CreateDirectory { path: PathBuf },
    /// Write a rendered template.
    WriteFile {
        path: PathBuf,
        kind: ArtifactKind,
        #[serde(skip)]
        content: String,
    },
    /// Copy a user-supplied file byte for byte.
    CopySource { from: PathBuf, to: PathBuf },
    /// Hand the project root to the version-control collaborator.
    InitRepository { path: PathBuf },
}

impl ScaffoldStep {
    /// The path this step creates.
    pub fn target(&self) -> &Path {
        match self {
            Self::CreateDirectory { path }
            | Self::WriteFile { path, .. }
            | Self::InitRepository { path } => path,
            Self::CopySource { to, .. } => to,
        }
    }
}

/// Ordered list of operations for one scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub(crate) name: ProjectName,
    pub(crate) language: LanguageVariant,
    pub(crate) root: PathBuf,
    pub(crate) steps: Vec<ScaffoldStep>,
}

impl ScaffoldPlan {
    /// Derive the plan for a project.
    pub fn new(
        layout: &ProjectLayout,
        language: LanguageVariant,
        custom_source: Option<&Path>,
        init_repository: bool,
    ) -> Self {
        let ctx = RenderContext::new(layout.name());
        let render = |kind| TemplateCatalog::render(kind, language, &ctx);

        let mut steps = vec![
            ScaffoldStep::CreateDirectory {
                path: layout.root().to_path_buf(),
            },
            ScaffoldStep::CreateDirectory {
                path: layout.src_dir(),
            },
            ScaffoldStep::WriteFile {
                path: layout.build_file(),
                kind: ArtifactKind::BuildFile,
                content: render(ArtifactKind::BuildFile),
            },
            ScaffoldStep::WriteFile {
                path: layout.ignore_file(),
                kind: ArtifactKind::IgnoreFile,
                content: render(ArtifactKind::IgnoreFile),
            },
            ScaffoldStep::WriteFile {
                path: layout.delegated_build_file(),
                kind: ArtifactKind::DelegatedBuildFile,
                content: render(ArtifactKind::DelegatedBuildFile),
            },
        ];

        let source_file = layout.source_file(language);
        steps.push(match custom_source {
            Some(from) => ScaffoldStep::CopySource {
                from: from.to_path_buf(),
                to: source_file,
            },
            None => ScaffoldStep::WriteFile {
                path: source_file,
                kind: ArtifactKind::SourceStub,
                content: render(ArtifactKind::SourceStub),
            },
        });

        if init_repository {
            steps.push(ScaffoldStep::InitRepository {
                path: layout.root().to_path_buf(),
            });
        }

        Self {
            name: layout.name().clone(),
            language,
            root: layout.root().to_path_buf(),
            steps,
        }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn language(&self) -> LanguageVariant {
        self.language
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn steps(&self) -> &[ScaffoldStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
