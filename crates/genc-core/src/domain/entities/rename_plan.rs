use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    catalog::NAME_DECLARATION_PREFIX,
    entities::layout::{ProjectLayout, is_layout_entry},
    value_objects::{BuildMode, LanguageVariant, ProjectName},
};

/// A `(from, to)` pair of paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathPair {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl PathPair {
    fn new(from: PathBuf, to: PathBuf) -> Self {
        Self { from, to }
    }
}

/// Everything a rename touches, derived from `(old, new)`.
///
/// Every path except the directory pair is expressed under the *new*
/// project directory: by the time those steps run, the directory has
/// already moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePlan {
    pub old: ProjectName,
    pub new: ProjectName,
    pub directory: PathPair,
    /// Source file of a C project in the current layout.
    pub source: PathPair,
    /// Other source locations, tried in order after `source`.
    pub source_fallbacks: Vec<PathPair>,
    /// Previously built artifacts; absent ones are skipped.
    pub artifacts: Vec<PathPair>,
    /// Build file at its pre-rename location, read for validation.
    pub original_build_file: PathBuf,
    pub build_file: PathBuf,
    pub staging_file: PathBuf,
}

impl RenamePlan {
    pub fn new(base_dir: impl AsRef<Path>, old: &ProjectName, new: &ProjectName) -> Self {
        let base_dir = base_dir.as_ref();
        let before = ProjectLayout::new(base_dir, old);
        let after = ProjectLayout::new(base_dir, new);

        let in_src = |variant: LanguageVariant| {
            PathPair::new(
                after.src_dir().join(before.source_file_name(variant)),
                after.source_file(variant),
            )
        };
        let source = in_src(LanguageVariant::C);
        let mut source_fallbacks: Vec<PathPair> = LanguageVariant::ALL
            .into_iter()
            .filter(|variant| *variant != LanguageVariant::C)
            .map(in_src)
            .collect();
        // Flat layout of early generated projects: <name>/<name>.c
        source_fallbacks.push(PathPair::new(
            after.child(before.source_file_name(LanguageVariant::C)),
            after.child(after.source_file_name(LanguageVariant::C)),
        ));

        // <root>/<name> is the build file or a directory when the name
        // matches a layout entry, so there is no flat artifact to move.
        let mut artifacts = Vec::new();
        if !is_layout_entry(old.as_str()) && !is_layout_entry(new.as_str()) {
            artifacts.push(PathPair::new(
                after.child(old.as_str()),
                after.child(new.as_str()),
            ));
        }
        artifacts.extend(BuildMode::ALL.into_iter().map(|mode| {
            PathPair::new(
                after.artifact(mode).with_file_name(old.as_str()),
                after.artifact(mode),
            )
        }));

        Self {
            old: old.clone(),
            new: new.clone(),
            directory: PathPair::new(before.root().to_path_buf(), after.root().to_path_buf()),
            source,
            source_fallbacks,
            artifacts,
            original_build_file: before.build_file(),
            build_file: after.build_file(),
            staging_file: after.build_file_staging(),
        }
    }

    /// Source locations in the order they are tried.
    pub fn source_candidates(&self) -> impl Iterator<Item = &PathPair> {
        std::iter::once(&self.source).chain(&self.source_fallbacks)
    }

    /// The build file's new first line, without line terminator.
    pub fn declaration(&self) -> String {
        format!("{NAME_DECLARATION_PREFIX}{}", self.new)
    }
}

/// Replace the first line of a build file with `declaration`.
///
/// Returns `None` when the first line does not start with the name
/// declaration prefix. Everything after the first line terminator is kept
/// byte for byte; a `\r\n` terminator on the first line is preserved.
pub fn rewrite_declaration(content: &[u8], declaration: &str) -> Option<Vec<u8>> {
    let (first_line, rest) = match content.iter().position(|b| *b == b'\n') {
        Some(idx) => (&content[..idx], Some(&content[idx + 1..])),
        None => (content, None),
    };

    if !first_line.starts_with(NAME_DECLARATION_PREFIX.as_bytes()) {
        return None;
    }

    let mut out = Vec::with_capacity(content.len() + declaration.len());
    out.extend_from_slice(declaration.as_bytes());
    if first_line.ends_with(b"\r") {
        out.push(b'\r');
    }
    if let Some(rest) = rest {
        out.push(b'\n');
        out.extend_from_slice(rest);
    }
    Some(out)
}

/// Name declared on the first line, if the line is well formed.
pub fn declared_name(content: &[u8]) -> Option<&str> {
    let first_line = content.split(|b| *b == b'\n').next()?;
    let value = first_line.strip_prefix(NAME_DECLARATION_PREFIX.as_bytes())?;
    std::str::from_utf8(value).ok().map(str::trim)
}
