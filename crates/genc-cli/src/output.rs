//! Stdout rendering for command results.
//!
//! Status lines (`✓`, `ℹ`) are chatter and honour `--quiet`. Command
//! products, meaning rendered templates, config dumps and JSON documents,
//! are always written. Errors go to stderr through `main::handle_error`.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

const CHECK: &str = "\u{2713}";
const INFO: &str = "\u{2139}";

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    // ── chatter ───────────────────────────────────────────────────────────

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.chatter(msg.to_owned())
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.chatter(self.status(CHECK, msg, Style::new().green()))
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.chatter(self.status(INFO, msg, Style::new().blue()))
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        let line = self.paint(text, Style::new().cyan().bold());
        self.chatter(line)
    }

    /// Indented line under the previous message.
    pub fn detail(&self, msg: &str) -> io::Result<()> {
        let line = format!("  {}", self.paint(msg, Style::new().dimmed()));
        self.chatter(line)
    }

    // ── products ──────────────────────────────────────────────────────────

    /// Write `content` exactly as given.
    pub fn raw(&self, content: &str) -> io::Result<()> {
        self.term.write_str(content)
    }

    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let doc = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&doc)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    // ── helpers ───────────────────────────────────────────────────────────

    fn chatter(&self, line: String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&line)
    }

    fn status(&self, symbol: &str, msg: &str, style: Style) -> String {
        format!("{} {}", self.paint(symbol, style.bold()), self.paint(msg, style))
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_owned()
        }
    }
}
