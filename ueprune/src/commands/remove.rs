// ueprune/src/commands/remove.rs
//
// USE CASE: Remove a class and regenerate the project files.

use comfy_table::{Table, presets::UTF8_FULL};
use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;

use ueprune_core::application::{
    PruneEvent, PruneReport, PruneRequest, prune_class, read_class_name, wait_for_enter,
};
use ueprune_core::domain::{ClassName, CleanOutcome, RemovalOutcome};
use ueprune_core::infrastructure::process::BuildToolRunner;

use super::Workspace;
use crate::cli::{OutputFormat, RemoveArgs};

/// Status lines go to stdout, except in JSON mode where stdout carries the
/// report only.
#[derive(Clone, Copy)]
struct Console {
    json: bool,
}

impl Console {
    fn line(&self, msg: impl Display) {
        if self.json {
            eprintln!("{}", msg);
        } else {
            println!("{}", msg);
        }
    }
}

pub async fn execute(project_dir: PathBuf, args: RemoveArgs) -> anyhow::Result<()> {
    let console = Console {
        json: args.format == OutputFormat::Json,
    };

    let result = run(project_dir, &args, console).await;

    // The pause happens whatever the outcome, like the console window it replaces.
    if !args.no_pause {
        console.line("Press Enter to continue...");
        if let Err(e) = wait_for_enter(&mut io::stdin().lock()) {
            tracing::warn!(error = %e, "Could not read the final keypress");
        }
    }

    let report = result?;
    if args.fail_on_error && report.has_failures() {
        eprintln!("❌ One or more steps failed.");
        std::process::exit(1);
    }
    Ok(())
}

async fn run(
    project_dir: PathBuf,
    args: &RemoveArgs,
    console: Console,
) -> anyhow::Result<PruneReport> {
    let mut workspace = Workspace::load(&project_dir)?;
    workspace.apply_tool_args(&args.tool);
    workspace.apply_descriptor_policy(args.descriptor_policy);
    if let Some(policy) = args.delete_policy {
        workspace.config.delete_policy = policy;
    }

    let class = match &args.class {
        Some(name) => ClassName::new(name.as_str()),
        None => prompt_class_name(console)?,
    };

    console.line(format!("Class name: {}", class));
    console.line(format!("Header file: {}", class.header_file()));
    console.line(format!("Source file: {}", class.source_file()));

    let request = PruneRequest {
        project_dir: &workspace.root,
        class,
        config: &workspace.config,
        dry_run: args.dry_run,
    };

    let report = prune_class(&BuildToolRunner, &request, |event| match event {
        PruneEvent::RemovingClass { source_dir, .. } => {
            console.line(format!("🗑️  Deleting class files under {}...", source_dir.display()))
        }
        PruneEvent::CleaningOutput { binaries_dir } => {
            console.line(format!("🧹 Removing {}...", binaries_dir))
        }
        PruneEvent::LocatingDescriptor => console.line("🔍 Locating project descriptor..."),
        PruneEvent::Regenerating {
            descriptor,
            invocation,
        } => {
            console.line(format!(
                "⚙️  Regenerating project files for {}",
                descriptor.value
            ));
            console.line(format!("   $ {}", invocation.command_line()));
        }
    })
    .await?;

    match args.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => {
            println!("\n{}", summary_table(&report));
            if report.has_failures() {
                println!("⚠️  Finished with failures.");
            } else {
                println!("✨ Done.");
            }
        }
    }

    Ok(report)
}

fn prompt_class_name(console: Console) -> anyhow::Result<ClassName> {
    if console.json {
        eprint!("Enter the class name to remove: ");
        io::stderr().flush()?;
    } else {
        print!("Enter the class name to remove: ");
        io::stdout().flush()?;
    }
    Ok(read_class_name(&mut io::stdin().lock())?)
}

fn summary_table(report: &PruneReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Step", "Target", "Result"]);

    if report.removal.is_empty() {
        table.add_row(vec![
            "remove".to_string(),
            format!("{} / {}", report.class.header_file(), report.class.source_file()),
            "no matching files".to_string(),
        ]);
    }
    for entry in &report.removal.entries {
        let result = match &entry.outcome {
            RemovalOutcome::Removed => "removed".to_string(),
            RemovalOutcome::Planned => "would remove".to_string(),
            RemovalOutcome::Failed { reason } => format!("failed: {}", reason),
        };
        table.add_row(vec![
            "remove".to_string(),
            entry.path.display().to_string(),
            result,
        ]);
    }

    let clean_result = match &report.clean {
        CleanOutcome::Removed { .. } => "removed".to_string(),
        CleanOutcome::Planned { .. } => "would remove".to_string(),
        CleanOutcome::Missing { .. } => "not found".to_string(),
        CleanOutcome::Failed { reason, .. } => format!("failed: {}", reason),
    };
    table.add_row(vec![
        "clean".to_string(),
        report.clean.path().display().to_string(),
        clean_result,
    ]);

    let locate_result = match report.descriptor.matches.len() {
        0 => "none found".to_string(),
        1 => "found".to_string(),
        n => format!("{} found ({})", n, report.descriptor.policy),
    };
    table.add_row(vec![
        "locate".to_string(),
        report.descriptor.value.clone(),
        locate_result,
    ]);

    table.add_row(vec![
        "regenerate".to_string(),
        report.command_line.clone(),
        report.generator.describe(),
    ]);

    table
}
