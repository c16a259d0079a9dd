//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use genc_core::domain::{ArtifactKind, LanguageVariant};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "genc",
    bin_name = "genc",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "C and C++ project generator",
    long_about = "genc creates Make-based C and C++ projects with debug and \
                  release build modes, and renames them afterwards.",
    after_help = "EXAMPLES:\n\
        \x20 genc init demo\n\
        \x20 genc init engine --lang cpp\n\
        \x20 genc rename demo hello\n\
        \x20 genc makefile > Makefile\n\
        \x20 genc completions bash > /usr/share/bash-completion/completions/genc",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "new",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 genc init demo\n\
            \x20 genc init demo ~/scratch/main.c\n\
            \x20 genc init engine --lang cpp --no-git\n\
            \x20 genc init demo --dry-run --output-format json"
    )]
    Init(InitArgs),

    /// Rename a generated project.
    #[command(
        visible_alias = "mv",
        about = "Rename a project",
        after_help = "EXAMPLES:\n\
            \x20 genc rename demo hello\n\
            \x20 genc rename demo hello --dir ~/src"
    )]
    Rename(RenameArgs),

    /// Print a template to stdout.
    #[command(
        visible_alias = "makefile",
        about = "Print a template",
        after_help = "EXAMPLES:\n\
            \x20 genc makefile > Makefile\n\
            \x20 genc template makefile --lang cpp --name engine\n\
            \x20 genc template gitignore"
    )]
    Template(TemplateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 genc completions bash > ~/.local/share/bash-completion/completions/genc\n\
            \x20 genc completions zsh  > ~/.zfunc/_genc\n\
            \x20 genc completions fish > ~/.config/fish/completions/genc.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the genc configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 genc config get defaults.language\n\
            \x20 genc config list\n\
            \x20 genc config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `genc init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name; also the directory, source file and binary name.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Existing source file to copy in place of the hello world stub.
    #[arg(value_name = "SOURCE", help = "Source file to start from")]
    pub source: Option<PathBuf>,

    /// Language variant. Falls back to `defaults.language` from config.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        value_enum,
        help = "Language variant [default: from config, c]"
    )]
    pub language: Option<Language>,

    /// Parent directory of the new project.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory to create the project in"
    )]
    pub dir: PathBuf,

    /// Skip `git init`.
    #[arg(long = "no-git", help = "Do not initialize a git repository")]
    pub no_git: bool,

    /// Remove the partial project if a later step fails.
    #[arg(long = "cleanup", help = "Remove the project directory on failure")]
    pub cleanup: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── rename ────────────────────────────────────────────────────────────────────

/// Arguments for `genc rename`.
#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Current project name.
    #[arg(value_name = "OLD")]
    pub old: String,

    /// New project name.
    #[arg(value_name = "NEW")]
    pub new: String,

    /// Directory containing the project.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory containing the project"
    )]
    pub dir: PathBuf,

    /// Preview what would be renamed without touching anything.
    #[arg(long = "dry-run", help = "Show what would be renamed without renaming")]
    pub dry_run: bool,
}

// ── template ──────────────────────────────────────────────────────────────────

/// Arguments for `genc template`.
#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Which template to print.
    #[arg(value_enum, default_value = "makefile", help = "Template to print")]
    pub kind: TemplateKind,

    /// Language variant.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        value_enum,
        help = "Language variant [default: from config, c]"
    )]
    pub language: Option<Language>,

    /// Project name to substitute. Without it the Makefile takes the name of
    /// the directory it is run from.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,
}

/// Printable templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateKind {
    /// Top-level Makefile.
    Makefile,
    /// `.gitignore`.
    Gitignore,
    /// Hello world source file.
    #[value(alias = "main")]
    Source,
    /// `src/Makefile` forwarding to the parent.
    SrcMakefile,
}

impl From<TemplateKind> for ArtifactKind {
    fn from(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::Makefile => ArtifactKind::BuildFile,
            TemplateKind::Gitignore => ArtifactKind::IgnoreFile,
            TemplateKind::Source => ArtifactKind::SourceStub,
            TemplateKind::SrcMakefile => ArtifactKind::DelegatedBuildFile,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `genc completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `genc config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.language`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported language variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Language {
    C,
    /// Also accepted as `c++` and `cxx`.
    #[value(aliases = ["c++", "cxx"])]
    Cpp,
}

impl From<Language> for LanguageVariant {
    fn from(lang: Language) -> Self {
        match lang {
            Language::C => LanguageVariant::C,
            Language::Cpp => LanguageVariant::Cpp,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", LanguageVariant::from(*self))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn language_display() {
        assert_eq!(Language::C.to_string(), "c");
        assert_eq!(Language::Cpp.to_string(), "cpp");
    }

    #[test]
    fn parse_init_command() {
        let cli = Cli::parse_from(["genc", "init", "demo", "main.c", "--lang", "c", "--no-git"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.name, "demo");
                assert_eq!(args.source, Some(PathBuf::from("main.c")));
                assert_eq!(args.language, Some(Language::C));
                assert_eq!(args.dir, PathBuf::from("."));
                assert!(args.no_git);
                assert!(!args.cleanup);
            }
            other => panic!("expected Init command, got {other:?}"),
        }
    }

    #[test]
    fn cpp_aliases() {
        for alias in ["cpp", "c++", "cxx"] {
            let cli = Cli::parse_from(["genc", "init", "x", "-l", alias]);
            let Commands::Init(args) = cli.command else {
                panic!("expected Init command");
            };
            assert_eq!(args.language, Some(Language::Cpp));
        }
    }

    #[test]
    fn makefile_alias_defaults_to_build_file() {
        let cli = Cli::parse_from(["genc", "makefile"]);
        let Commands::Template(args) = cli.command else {
            panic!("expected Template command");
        };
        assert_eq!(args.kind, TemplateKind::Makefile);
        assert_eq!(ArtifactKind::from(args.kind), ArtifactKind::BuildFile);
        assert!(args.name.is_none());
    }

    #[test]
    fn parse_rename_command() {
        let cli = Cli::parse_from(["genc", "rename", "foo", "bar", "--dir", "/tmp"]);
        let Commands::Rename(args) = cli.command else {
            panic!("expected Rename command");
        };
        assert_eq!((args.old.as_str(), args.new.as_str()), ("foo", "bar"));
        assert_eq!(args.dir, PathBuf::from("/tmp"));
    }

    #[test]
    fn rename_requires_two_names() {
        assert!(Cli::try_parse_from(["genc", "rename", "foo"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["genc", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}
