use std::path::{Path, PathBuf};

use crate::domain::value_objects::{BuildMode, LanguageVariant, ProjectName};

pub const SRC_DIR: &str = "src";
pub const BUILD_DIR: &str = "target";
pub const BUILD_FILE: &str = "Makefile";
pub const IGNORE_FILE: &str = ".gitignore";

/// Whether `name` is one of the entries generated at a project root.
pub fn is_layout_entry(name: &str) -> bool {
    [SRC_DIR, BUILD_DIR, BUILD_FILE, IGNORE_FILE].contains(&name)
}

/// On-disk layout of a generated project.
///
/// Pure path composition: every path a scaffold or rename touches is
/// derived here from the base directory and the project name. Nothing in
/// this type touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    name: ProjectName,
}

impl ProjectLayout {
    pub fn new(base_dir: impl AsRef<Path>, name: &ProjectName) -> Self {
        Self {
            root: base_dir.as_ref().join(name.as_str()),
            name: name.clone(),
        }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    /// `<base>/<name>`
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a relative suffix onto the project root.
    pub fn child(&self, suffix: impl AsRef<Path>) -> PathBuf {
        self.root.join(suffix)
    }

    /// `<name>/src`
    pub fn src_dir(&self) -> PathBuf {
        self.child(SRC_DIR)
    }

    /// `<name>/Makefile`
    pub fn build_file(&self) -> PathBuf {
        self.child(BUILD_FILE)
    }

    /// `<name>/.gitignore`
    pub fn ignore_file(&self) -> PathBuf {
        self.child(IGNORE_FILE)
    }

    /// `<name>/src/Makefile`
    pub fn delegated_build_file(&self) -> PathBuf {
        self.src_dir().join(BUILD_FILE)
    }

    /// `<name>/src/<name>.<ext>`
    pub fn source_file(&self, variant: LanguageVariant) -> PathBuf {
        self.src_dir().join(self.source_file_name(variant))
    }

    pub fn source_file_name(&self, variant: LanguageVariant) -> String {
        format!("{}.{}", self.name, variant.source_extension())
    }

    /// `<name>/target/<mode>/<name>`
    pub fn artifact(&self, mode: BuildMode) -> PathBuf {
        self.child(BUILD_DIR).join(mode.as_str()).join(self.name.as_str())
    }

    /// Temporary file used while the build file is rewritten in place.
    pub fn build_file_staging(&self) -> PathBuf {
        self.child(format!("{BUILD_FILE}.genc-tmp"))
    }
}
