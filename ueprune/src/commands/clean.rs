// ueprune/src/commands/clean.rs
//
// USE CASE: Remove the build output directory.

use std::path::PathBuf;

use ueprune_core::application::clean_build_output;
use ueprune_core::domain::CleanOutcome;

use super::Workspace;

pub fn execute(project_dir: PathBuf, dry_run: bool) -> anyhow::Result<()> {
    let workspace = Workspace::load(&project_dir)?;

    println!("🧹 Cleaning {}...", workspace.config.binaries_dir);
    let outcome = clean_build_output(&workspace.root, &workspace.config.binaries_dir, dry_run)?;

    match outcome {
        CleanOutcome::Removed { path } => println!("   🗑️  Removed {}", path.display()),
        CleanOutcome::Planned { path } => println!("   Would remove {}", path.display()),
        CleanOutcome::Missing { path } => println!("   ⚠️  Nothing to remove at {}", path.display()),
        CleanOutcome::Failed { path, reason } => {
            eprintln!("❌ Clean failed for {}: {}", path.display(), reason);
            std::process::exit(1);
        }
    }
    Ok(())
}
