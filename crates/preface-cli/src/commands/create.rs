//! Implementation of the `preface create` command.
//!
//! Responsibility: choose the reference source, call the core scaffold
//! service, and display results. No business logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use preface_adapters::{
    FixedReference, LocalFilesystem, builtin_templates::BUILD_COMMAND, preface_catalog,
};
use preface_core::{
    application::{
        ScaffoldService,
        ports::{Filesystem, ReferenceSource},
    },
    domain::ProjectStructure,
};

use crate::{
    cli::{CreateArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `preface create` command.
///
/// 1. Pick the reference source (`--reference` beats config and env)
/// 2. Build the scaffold service over the local filesystem
/// 3. `--dry-run`: render and describe, write nothing; an existing root
///    fails exactly as the real run would
/// 4. Otherwise create the workspace and print next steps
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = build_service(
        args.reference,
        config,
        Box::new(LocalFilesystem::new()),
    )?;

    if args.dry_run {
        let plan = service.preview(&args.name, &args.output)?;
        debug!(files = plan.file_count(), "Dry run planned");
        return show_plan(&plan, &output);
    }

    if !output.is_json() {
        output.header(&format!("Creating '{}'...", args.name))?;
    }

    let root = service.create(&args.name, &args.output)?;
    info!(root = %root.display(), "Project created");

    if output.is_json() {
        let plan = service.plan(&args.name, &args.output)?;
        return output.json(&CreateReport::new(&plan, false));
    }

    output.success(&format!("Project created : {}", root.display()))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", root.display()))?;
        output.print(&format!("  {BUILD_COMMAND}"))?;
        output.print("  # then open index.html in a browser")?;
    }

    Ok(())
}

/// The scaffold service with the reference source chosen by precedence.
fn build_service(
    reference_flag: Option<String>,
    config: AppConfig,
    filesystem: Box<dyn Filesystem>,
) -> CliResult<ScaffoldService> {
    let references: Box<dyn ReferenceSource> = match reference_flag {
        Some(location) => {
            debug!(%location, "Reference taken from --reference");
            Box::new(FixedReference::new(location))
        }
        None => {
            debug!(location = %config.reference.main, "Reference taken from configuration");
            Box::new(config)
        }
    };

    Ok(ScaffoldService::new(
        preface_catalog(),
        references,
        filesystem,
    )?)
}

fn show_plan(plan: &ProjectStructure, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return output.json(&CreateReport::new(plan, true));
    }

    output.info(&format!(
        "Dry run: would create {} ({} files)",
        plan.root().display(),
        plan.file_count()
    ))?;
    for dir in plan.directories() {
        output.detail(&format!("{dir}/"))?;
    }
    for file in plan.files() {
        output.detail(&format!("{}  ({} bytes)", file.path, file.size()))?;
    }

    Ok(())
}

// ── JSON report ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct CreateReport {
    root: PathBuf,
    dry_run: bool,
    directories: Vec<String>,
    files: Vec<FileReport>,
}

#[derive(Debug, Serialize)]
struct FileReport {
    path: String,
    bytes: usize,
}

impl CreateReport {
    fn new(plan: &ProjectStructure, dry_run: bool) -> Self {
        Self {
            root: plan.root().to_path_buf(),
            dry_run,
            directories: plan.directories().iter().map(|d| d.to_string()).collect(),
            files: plan
                .files()
                .map(|f| FileReport {
                    path: f.path.to_string(),
                    bytes: f.size(),
                })
                .collect(),
        }
    }
}
