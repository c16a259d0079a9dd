//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GENC_` prefix, `__` between sections,
//!    e.g. `GENC_DEFAULTS__LANGUAGE=cpp`
//! 3. Config file: `--config FILE`, else `config.toml` in the platform
//!    config directory (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use genc_core::domain::LanguageVariant;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Used when `--lang` is not given.
    pub language: String,
    /// `false` behaves like passing `--no-git` every time.
    pub init_repository: bool,
    /// `true` behaves like passing `--cleanup` every time.
    pub cleanup_on_failure: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                language: LanguageVariant::default().to_string(),
                init_repository: true,
                cleanup_on_failure: false,
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// A file passed via `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to serialise built-in defaults")?;

        let merged = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix("GENC")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

        let config: Self = merged
            .try_deserialize()
            .context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.default_language()?;
        Ok(())
    }

    /// `defaults.language` parsed into a core language variant.
    pub fn default_language(&self) -> anyhow::Result<LanguageVariant> {
        self.defaults
            .language
            .parse()
            .with_context(|| format!("defaults.language = '{}'", self.defaults.language))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.genc.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "genc")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".genc.toml"))
    }
}
