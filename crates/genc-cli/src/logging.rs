//! Tracing subscriber setup.
//!
//! `genc-core` and `genc-adapters` only emit events; this is the one place a
//! subscriber is installed. Diagnostics go to stderr so that
//! `genc makefile > Makefile` never captures a log line.
//!
//! | Flag(s)   | genc crates |
//! |-----------|-------------|
//! | (none)    | WARN        |
//! | `-v`      | INFO        |
//! | `-vv`     | DEBUG       |
//! | `-vvv`    | TRACE       |
//! | `--quiet` | ERROR       |
//!
//! A set `RUST_LOG` replaces the whole filter.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

const GENC_TARGETS: [&str; 3] = ["genc", "genc_core", "genc_adapters"];

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(default_directives(level_for(args))),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// Dependencies stay at warn; every genc crate gets `level`.
fn default_directives(level: LevelFilter) -> String {
    std::iter::once("warn".to_string())
        .chain(GENC_TARGETS.iter().map(|target| format!("{target}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_maps_to_levels() {
        let cases = [
            (0, LevelFilter::WARN),
            (1, LevelFilter::INFO),
            (2, LevelFilter::DEBUG),
            (3, LevelFilter::TRACE),
            (9, LevelFilter::TRACE),
        ];
        for (verbose, expected) in cases {
            assert_eq!(level_for(&args(verbose, false)), expected, "-v x{verbose}");
        }
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_for(&args(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            default_directives(LevelFilter::DEBUG),
            "warn,genc=debug,genc_core=debug,genc_adapters=debug"
        );
    }
}
