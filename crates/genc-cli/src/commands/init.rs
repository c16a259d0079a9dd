//! Implementation of the `genc init` command.
//!
//! Responsibility: resolve the project name, language and options from the
//! arguments and config, call the core scaffold service, and display
//! results.

use tracing::{debug, info, instrument};

use genc_adapters::{GitRepositoryInitializer, LocalFilesystem};
use genc_core::{
    application::{ScaffoldOptions, ScaffoldService},
    domain::{LanguageVariant, ProjectName, ScaffoldPlan, ScaffoldStep},
};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `genc init` command.
///
/// 1. Validate the project name
/// 2. Resolve language and options (flags win over config)
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Execute scaffolding via `ScaffoldService`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = ProjectName::new(args.name.as_str())?;
    let language = resolve_language(&args, &config)?;
    let options = resolve_options(&args, &config);

    if let Some(source) = &args.source {
        if source.is_dir() {
            return Err(CliError::InvalidInput {
                message: format!("{} is a directory, not a source file", source.display()),
                source: None,
            });
        }
    }

    debug!(
        language = %language,
        init_repository = options.init_repository,
        cleanup_on_failure = options.cleanup_on_failure,
        "Options resolved"
    );

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GitRepositoryInitializer::new()),
        &args.dir,
    )
    .with_options(options);

    if args.dry_run {
        let plan = service.plan(&name, language, args.source.as_deref());
        return show_plan(&plan, &output);
    }

    output.header(&format!("Creating '{name}'..."))?;
    info!(path = %args.dir.join(name.as_str()).display(), "Scaffold started");

    service.create(&name, language, args.source.as_deref())?;

    info!("Scaffold completed");

    if output.is_json() {
        let plan = service.plan(&name, language, args.source.as_deref());
        output.json(&serde_json::json!({
            "created": plan.root(),
            "language": language,
        }))?;
        return Ok(());
    }

    output.success(&format!("Project '{name}' created!"))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {name}"))?;
        output.print("  make run")?;
        output.print("  make mode=release")?;
    }

    Ok(())
}

fn resolve_language(args: &InitArgs, config: &AppConfig) -> CliResult<LanguageVariant> {
    match args.language {
        Some(lang) => Ok(lang.into()),
        None => config
            .default_language()
            .map_err(|e| CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            }),
    }
}

fn resolve_options(args: &InitArgs, config: &AppConfig) -> ScaffoldOptions {
    ScaffoldOptions {
        init_repository: config.defaults.init_repository && !args.no_git,
        cleanup_on_failure: args.cleanup || config.defaults.cleanup_on_failure,
    }
}

fn show_plan(plan: &ScaffoldPlan, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(plan)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create '{}' ({}) at {}",
        plan.name(),
        plan.language(),
        plan.root().display(),
    ))?;
    for step in plan.steps() {
        output.detail(&describe(step))?;
    }
    Ok(())
}

fn describe(step: &ScaffoldStep) -> String {
    match step {
        ScaffoldStep::CreateDirectory { path } => format!("mkdir     {}", path.display()),
        ScaffoldStep::WriteFile { path, .. } => format!("write     {}", path.display()),
        ScaffoldStep::CopySource { from, to } => {
            format!("copy      {} <- {}", to.display(), from.display())
        }
        ScaffoldStep::InitRepository { path } => format!("git init  {}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::Language;

    fn args() -> InitArgs {
        InitArgs {
            name: "demo".into(),
            source: None,
            language: None,
            dir: PathBuf::from("."),
            no_git: false,
            cleanup: false,
            dry_run: false,
        }
    }

    #[test]
    fn flag_language_wins_over_config() {
        let mut config = AppConfig::default();
        config.defaults.language = "c".into();
        let args = InitArgs {
            language: Some(Language::Cpp),
            ..args()
        };
        assert_eq!(
            resolve_language(&args, &config).unwrap(),
            LanguageVariant::Cpp
        );
    }

    #[test]
    fn config_language_used_without_flag() {
        let mut config = AppConfig::default();
        config.defaults.language = "cpp".into();
        assert_eq!(
            resolve_language(&args(), &config).unwrap(),
            LanguageVariant::Cpp
        );
    }

    #[test]
    fn no_git_flag_disables_repository() {
        let config = AppConfig::default();
        let args = InitArgs {
            no_git: true,
            ..args()
        };
        assert!(!resolve_options(&args, &config).init_repository);
    }

    #[test]
    fn cleanup_comes_from_flag_or_config() {
        let mut config = AppConfig::default();
        assert!(!resolve_options(&args(), &config).cleanup_on_failure);

        config.defaults.cleanup_on_failure = true;
        assert!(resolve_options(&args(), &config).cleanup_on_failure);
    }

    #[test]
    fn describe_copy_names_both_paths() {
        let step = ScaffoldStep::CopySource {
            from: PathBuf::from("main.c"),
            to: PathBuf::from("demo/src/demo.c"),
        };
        let line = describe(&step);
        assert!(line.contains("main.c"));
        assert!(line.contains("demo/src/demo.c"));
    }
}
