//! `genc template`: print a built-in template to stdout.
//!
//! The output is the command's product, so it is written verbatim and is
//! never suppressed by `--quiet`. Redirect it to a file: `genc makefile >
//! Makefile`.

use genc_core::domain::{LanguageVariant, ProjectName, RenderContext, TemplateCatalog};

use crate::{
    cli::TemplateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: TemplateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let language = match args.language {
        Some(lang) => LanguageVariant::from(lang),
        None => config
            .default_language()
            .map_err(|e| CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            })?,
    };

    let ctx = match args.name {
        Some(name) => RenderContext::new(&ProjectName::new(name)?),
        None => RenderContext::detached(),
    };

    let rendered = TemplateCatalog::render(args.kind.into(), language, &ctx);
    output.raw(&rendered)?;
    Ok(())
}
