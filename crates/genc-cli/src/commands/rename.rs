//! Implementation of the `genc rename` command.

use tracing::{info, instrument};

use genc_adapters::LocalFilesystem;
use genc_core::{
    application::RenameService,
    domain::{ProjectName, RenamePlan},
};

use crate::{
    cli::{GlobalArgs, RenameArgs},
    error::CliResult,
    output::OutputManager,
};

/// Execute the `genc rename` command.
#[instrument(skip_all, fields(old = %args.old, new = %args.new))]
pub fn execute(args: RenameArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let old = ProjectName::new(args.old.as_str())?;
    let new = ProjectName::new(args.new.as_str())?;

    let service = RenameService::new(Box::new(LocalFilesystem::new()), &args.dir);
    let plan = service.plan(&old, &new);

    if args.dry_run {
        return show_plan(&plan, &output);
    }

    info!(dir = %args.dir.display(), "Rename started");
    service.execute(&plan)?;
    info!("Rename completed");

    if output.is_json() {
        output.json(&serde_json::json!({
            "renamed": { "from": plan.directory.from, "to": plan.directory.to },
        }))?;
        return Ok(());
    }

    output.success(&format!("Renamed '{old}' to '{new}'"))?;
    if global.verbose > 0 {
        output.detail(&plan.declaration())?;
    }

    Ok(())
}

fn show_plan(plan: &RenamePlan, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(plan)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would rename '{}' to '{}'",
        plan.old, plan.new
    ))?;
    output.detail(&format!(
        "move      {} -> {}",
        plan.directory.from.display(),
        plan.directory.to.display()
    ))?;
    output.detail(&format!(
        "move      {} -> {}",
        plan.source.from.display(),
        plan.source.to.display()
    ))?;
    for artifact in &plan.artifacts {
        output.detail(&format!(
            "move      {} -> {} (if built)",
            artifact.from.display(),
            artifact.to.display()
        ))?;
    }
    output.detail(&format!(
        "rewrite   {}: {}",
        plan.build_file.display(),
        plan.declaration()
    ))?;
    Ok(())
}
