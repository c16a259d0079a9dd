//! Integration tests for genc-core against the real adapters.

use std::fs;
use std::path::{Path, PathBuf};

use genc_adapters::{GitRepositoryInitializer, LocalFilesystem, MemoryFilesystem};
use genc_core::{
    application::{RenameError, ports::RepositoryInitializer},
    prelude::*,
};

fn name(s: &str) -> ProjectName {
    ProjectName::new(s).unwrap()
}

fn local_scaffold(base: &Path) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GitRepositoryInitializer::new()),
        base,
    )
}

fn local_rename(base: &Path) -> RenameService {
    RenameService::new(Box::new(LocalFilesystem::new()), base)
}

/// Repository port that is never expected to run.
struct NoRepository;

impl RepositoryInitializer for NoRepository {
    fn init_repository(&self, path: &Path) -> Result<(), genc_core::application::RepositoryError> {
        panic!("unexpected repository init at {}", path.display());
    }
}

fn memory_scaffold(fs: &MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(Box::new(fs.clone()), Box::new(NoRepository), "/work").with_options(
        ScaffoldOptions {
            init_repository: false,
            cleanup_on_failure: false,
        },
    )
}

// ============================================================================
// Scaffold
// ============================================================================

#[test]
fn create_produces_exact_layout() {
    let tmp = tempfile::tempdir().unwrap();
    local_scaffold(tmp.path())
        .create(&name("demo"), LanguageVariant::C, None)
        .unwrap();

    let root = tmp.path().join("demo");
    let mut entries: Vec<PathBuf> = walk(&root)
        .into_iter()
        .map(|p| p.strip_prefix(&root).unwrap().to_path_buf())
        .collect();
    entries.sort();

    assert_eq!(
        entries,
        vec![
            PathBuf::from(".git"),
            PathBuf::from(".gitignore"),
            PathBuf::from("Makefile"),
            PathBuf::from("src"),
            PathBuf::from("src/Makefile"),
            PathBuf::from("src/demo.c"),
        ]
    );
    assert!(root.join(".git").is_dir());

    let makefile = fs::read_to_string(root.join("Makefile")).unwrap();
    for target in ["all", "clean", "install", "uninstall", "run"] {
        assert!(makefile.contains(&format!("\n{target}:")), "missing {target}");
    }
}

#[test]
fn demo_project_matches_expected_content() {
    let tmp = tempfile::tempdir().unwrap();
    local_scaffold(tmp.path())
        .create(&name("demo"), LanguageVariant::C, None)
        .unwrap();

    let root = tmp.path().join("demo");
    let makefile = fs::read_to_string(root.join("Makefile")).unwrap();
    assert!(makefile.starts_with("PROJECT = demo\n"));
    assert!(makefile.contains("mode ?= debug"));
    assert!(makefile.contains("ifeq ($(mode),release)"));
    assert!(makefile.contains("-O2"));
    assert!(makefile.contains("SRC_DIR = src"));

    let source = fs::read_to_string(root.join("src/demo.c")).unwrap();
    assert!(source.contains("main"));
    assert!(source.contains("Hello world!"));

    assert_eq!(fs::read_to_string(root.join(".gitignore")).unwrap(), "/target\n");
}

#[test]
fn second_create_reports_already_exists_and_changes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let service = local_scaffold(tmp.path());
    service
        .create(&name("demo"), LanguageVariant::C, None)
        .unwrap();

    let makefile = tmp.path().join("demo/Makefile");
    fs::write(&makefile, b"PROJECT = demo\n# edited\n").unwrap();

    let err = service
        .create(&name("demo"), LanguageVariant::Cpp, None)
        .unwrap_err();

    assert_eq!(
        err,
        ScaffoldError::AlreadyExists {
            path: tmp.path().join("demo")
        }
    );
    assert_eq!(fs::read(&makefile).unwrap(), b"PROJECT = demo\n# edited\n");
    assert!(!tmp.path().join("demo/src/demo.cpp").exists());
}

#[test]
fn custom_source_is_copied_byte_for_byte() {
    let tmp = tempfile::tempdir().unwrap();
    let custom = tmp.path().join("mine.c");
    let bytes: Vec<u8> = (0u8..=255).chain(*b"\r\nint main(void){}\n").collect();
    fs::write(&custom, &bytes).unwrap();

    local_scaffold(tmp.path())
        .with_options(ScaffoldOptions {
            init_repository: false,
            cleanup_on_failure: false,
        })
        .create(&name("demo"), LanguageVariant::C, Some(custom.as_path()))
        .unwrap();

    assert_eq!(fs::read(tmp.path().join("demo/src/demo.c")).unwrap(), bytes);
    assert!(!tmp.path().join("demo/.git").exists());
}

#[test]
fn missing_custom_source_leaves_partial_project() {
    let tmp = tempfile::tempdir().unwrap();
    let err = local_scaffold(tmp.path())
        .create(
            &name("demo"),
            LanguageVariant::C,
            Some(tmp.path().join("missing.c").as_path()),
        )
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::SourceReadFailure { .. }));
    assert!(tmp.path().join("demo/Makefile").exists());
    assert!(tmp.path().join("demo/src/Makefile").exists());
    assert!(!tmp.path().join("demo/src/demo.c").exists());
    assert!(!tmp.path().join("demo/.git").exists());
}

#[test]
fn cleanup_removes_partial_project() {
    let tmp = tempfile::tempdir().unwrap();
    let err = local_scaffold(tmp.path())
        .with_options(ScaffoldOptions {
            init_repository: true,
            cleanup_on_failure: true,
        })
        .create(
            &name("demo"),
            LanguageVariant::C,
            Some(tmp.path().join("missing.c").as_path()),
        )
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::SourceReadFailure { .. }));
    assert!(!tmp.path().join("demo").exists());
}

#[test]
fn cpp_project_uses_cpp_toolchain() {
    let fs = MemoryFilesystem::new();
    fs.add_dir_all("/work");
    memory_scaffold(&fs)
        .create(&name("app"), LanguageVariant::Cpp, None)
        .unwrap();

    let makefile = String::from_utf8(fs.contents("/work/app/Makefile").unwrap()).unwrap();
    assert!(makefile.contains("g++"));
    assert!(!makefile.contains("gcc"));

    let source = String::from_utf8(fs.contents("/work/app/src/app.cpp").unwrap()).unwrap();
    assert!(source.contains("std::cout"));
}

#[test]
fn dry_run_plan_matches_what_create_writes() {
    let fs = MemoryFilesystem::new();
    fs.add_dir_all("/work");
    let service = memory_scaffold(&fs);

    let plan = service.plan(&name("demo"), LanguageVariant::C, None);
    assert!(fs.list_files().is_empty());

    service.execute(&plan).unwrap();
    for step in plan.steps() {
        assert!(fs.exists(step.target()), "{}", step.target().display());
    }
}

// ============================================================================
// Rename
// ============================================================================

fn scaffold_without_git(base: &Path, project: &str) {
    local_scaffold(base)
        .with_options(ScaffoldOptions {
            init_repository: false,
            cleanup_on_failure: false,
        })
        .create(&name(project), LanguageVariant::C, None)
        .unwrap();
}

#[test]
fn rename_moves_everything_and_rewrites_first_line() {
    let tmp = tempfile::tempdir().unwrap();
    scaffold_without_git(tmp.path(), "foo");
    let before = fs::read(tmp.path().join("foo/Makefile")).unwrap();

    local_rename(tmp.path())
        .rename(&name("foo"), &name("bar"))
        .unwrap();

    let root = tmp.path().join("bar");
    assert!(!tmp.path().join("foo").exists());
    assert!(root.join("src/bar.c").is_file());
    assert!(!root.join("src/foo.c").exists());
    assert!(!root.join("Makefile.genc-tmp").exists());

    let after = fs::read(root.join("Makefile")).unwrap();
    let first_newline = before.iter().position(|b| *b == b'\n').unwrap();
    assert!(after.starts_with(b"PROJECT = bar\n"));
    assert_eq!(&after[b"PROJECT = bar".len()..], &before[first_newline..]);
}

#[test]
fn rename_moves_built_artifacts() {
    let tmp = tempfile::tempdir().unwrap();
    scaffold_without_git(tmp.path(), "foo");
    let debug_dir = tmp.path().join("foo/target/debug");
    fs::create_dir_all(&debug_dir).unwrap();
    fs::write(debug_dir.join("foo"), b"\x7fELF").unwrap();
    fs::write(tmp.path().join("foo/foo"), b"\x7fELF").unwrap();

    local_rename(tmp.path())
        .rename(&name("foo"), &name("bar"))
        .unwrap();

    assert!(tmp.path().join("bar/target/debug/bar").is_file());
    assert!(tmp.path().join("bar/bar").is_file());
    assert!(!tmp.path().join("bar/target/release").exists());
}

#[test]
fn rename_without_artifacts_succeeds() {
    let tmp = tempfile::tempdir().unwrap();
    scaffold_without_git(tmp.path(), "foo");
    assert!(!tmp.path().join("foo/target").exists());

    local_rename(tmp.path())
        .rename(&name("foo"), &name("bar"))
        .unwrap();
    assert!(tmp.path().join("bar/Makefile").is_file());
}

#[test]
fn malformed_build_file_leaves_project_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    scaffold_without_git(tmp.path(), "foo");
    let makefile = tmp.path().join("foo/Makefile");
    let original = b"# my own makefile\nall:\n\tcc foo.c\n".to_vec();
    fs::write(&makefile, &original).unwrap();

    let err = local_rename(tmp.path())
        .rename(&name("foo"), &name("bar"))
        .unwrap_err();

    assert!(matches!(
        err,
        RenameError::MalformedBuildFile { ref first_line, .. } if first_line == "# my own makefile"
    ));
    assert_eq!(fs::read(&makefile).unwrap(), original);
    assert!(tmp.path().join("foo/src/foo.c").exists());
    assert!(!tmp.path().join("bar").exists());
}

#[test]
fn renaming_twice_reports_already_renamed() {
    let tmp = tempfile::tempdir().unwrap();
    scaffold_without_git(tmp.path(), "foo");
    let service = local_rename(tmp.path());
    service.rename(&name("foo"), &name("bar")).unwrap();

    let err = service.rename(&name("foo"), &name("bar")).unwrap_err();
    match err {
        RenameError::AlreadyRenamedOrMissing { failures } => assert_eq!(failures.len(), 2),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(tmp.path().join("bar/src/bar.c").exists());
}

#[test]
fn project_named_src_keeps_its_source_directory() {
    let tmp = tempfile::tempdir().unwrap();
    scaffold_without_git(tmp.path(), "src");

    local_rename(tmp.path())
        .rename(&name("src"), &name("bar"))
        .unwrap();

    let root = tmp.path().join("bar");
    assert!(root.join("src").is_dir());
    assert!(root.join("src/bar.c").is_file());
    assert!(root.join("src/Makefile").is_file());
    assert!(!root.join("bar").exists());
    assert!(fs::read(root.join("Makefile")).unwrap().starts_with(b"PROJECT = bar\n"));
}

#[test]
fn project_named_target_keeps_its_build_directory() {
    let tmp = tempfile::tempdir().unwrap();
    scaffold_without_git(tmp.path(), "target");
    let debug_dir = tmp.path().join("target/target/debug");
    fs::create_dir_all(&debug_dir).unwrap();
    fs::write(debug_dir.join("target"), b"\x7fELF").unwrap();

    local_rename(tmp.path())
        .rename(&name("target"), &name("bar"))
        .unwrap();

    let root = tmp.path().join("bar");
    assert!(root.join("target/debug/bar").is_file());
    assert!(!root.join("target/debug/target").exists());
    assert!(!root.join("bar").exists());
    assert!(root.join("src/bar.c").is_file());
}

#[test]
fn project_named_makefile_keeps_its_build_file() {
    let tmp = tempfile::tempdir().unwrap();
    scaffold_without_git(tmp.path(), "Makefile");

    local_rename(tmp.path())
        .rename(&name("Makefile"), &name("bar"))
        .unwrap();

    let root = tmp.path().join("bar");
    assert!(!root.join("bar").exists());
    assert!(root.join("src/bar.c").is_file());
    assert!(fs::read(root.join("Makefile")).unwrap().starts_with(b"PROJECT = bar\n"));
}

#[test]
fn renaming_to_a_layout_entry_name_keeps_the_layout() {
    let tmp = tempfile::tempdir().unwrap();
    scaffold_without_git(tmp.path(), "foo");
    fs::write(tmp.path().join("foo/foo"), b"\x7fELF").unwrap();

    local_rename(tmp.path())
        .rename(&name("foo"), &name("src"))
        .unwrap();

    let root = tmp.path().join("src");
    assert!(root.join("src").is_dir());
    assert!(root.join("src/src.c").is_file());
    // the flat binary cannot take the directory's place
    assert!(root.join("foo").is_file());
}

#[test]
fn rename_handles_cpp_and_flat_layouts() {
    let fs = MemoryFilesystem::new();
    fs.add_dir_all("/work");
    memory_scaffold(&fs)
        .create(&name("foo"), LanguageVariant::Cpp, None)
        .unwrap();
    fs.add_dir_all("/work/old");
    fs.write_file(Path::new("/work/old/Makefile"), b"PROJECT = old\n")
        .unwrap();
    fs.write_file(Path::new("/work/old/old.c"), b"int main(void){}")
        .unwrap();

    let service = RenameService::new(Box::new(fs.clone()), "/work");
    service.rename(&name("foo"), &name("bar")).unwrap();
    service.rename(&name("old"), &name("new")).unwrap();

    assert!(fs.exists(Path::new("/work/bar/src/bar.cpp")));
    assert!(fs.exists(Path::new("/work/new/new.c")));
    assert_eq!(
        fs.contents("/work/new/Makefile"),
        Some(b"PROJECT = new\n".to_vec())
    );
}

#[test]
fn mismatched_declaration_is_still_rewritten() {
    let fs = MemoryFilesystem::new();
    fs.add_dir_all("/work/foo/src");
    fs.write_file(Path::new("/work/foo/Makefile"), b"PROJECT = other\nall:\n")
        .unwrap();
    fs.write_file(Path::new("/work/foo/src/foo.c"), b"").unwrap();

    RenameService::new(Box::new(fs.clone()), "/work")
        .rename(&name("foo"), &name("bar"))
        .unwrap();

    assert_eq!(
        fs.contents("/work/bar/Makefile"),
        Some(b"PROJECT = bar\nall:\n".to_vec())
    );
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        out.push(path.clone());
        // repository internals belong to git
        if path.is_dir() && !path.ends_with(".git") {
            out.extend(walk(&path));
        }
    }
    out
}
