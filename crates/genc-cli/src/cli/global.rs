//! Flags accepted before or after any subcommand.

use clap::Args;
use std::path::PathBuf;

/// Flattened into [`super::Cli`]; every field is `global = true`.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log verbosity on stderr: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More diagnostics on stderr (-v, -vv, -vvv)",
        long_help = "More diagnostics on stderr. Without the flag only warnings \
                     and errors are logged; -v logs one line per step, -vv every \
                     filesystem operation and -vvv everything. Also adds the \
                     error cause chain to failure messages."
    )]
    pub verbose: u8,

    /// Silence progress and success messages. Rendered templates and errors
    /// are still written.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors and command output"
    )]
    pub quiet: bool,

    /// Plain, uncoloured output. Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Config file to use instead of the per-user default. Must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "GENC_CONFIG",
        value_name = "FILE",
        help = "Read configuration from FILE"
    )]
    pub config: Option<PathBuf>,

    /// `json` makes `--dry-run` plans and results machine readable.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output style"
    )]
    pub output_format: OutputFormat,
}

/// Output style of stdout messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured, with status symbols.
    Human,
    /// Status symbols without colour.
    Plain,
    /// One JSON document per command.
    Json,
}
