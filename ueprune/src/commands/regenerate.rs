// ueprune/src/commands/regenerate.rs
//
// USE CASE: Regenerate the IDE project files without touching sources.

use std::path::PathBuf;

use ueprune_core::application::{locate_descriptor, regenerate_project_files};
use ueprune_core::domain::{DescriptorPolicy, GeneratorInvocation};
use ueprune_core::infrastructure::process::BuildToolRunner;

use super::Workspace;
use crate::cli::ToolArgs;

pub async fn execute(
    project_dir: PathBuf,
    tool: ToolArgs,
    policy: Option<DescriptorPolicy>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let mut workspace = Workspace::load(&project_dir)?;
    workspace.apply_tool_args(&tool);
    workspace.apply_descriptor_policy(policy);
    let config = &workspace.config;

    let descriptor = locate_descriptor(&workspace.root, config.descriptor_policy)?;
    let invocation = GeneratorInvocation::new(&config.build_tool, descriptor.value.clone())
        .with_extra_args(config.extra_args.clone())
        .with_timeout(config.timeout());

    println!("⚙️  Regenerating project files for {}", descriptor.value);
    println!("   $ {}", invocation.command_line());

    let outcome = regenerate_project_files(&BuildToolRunner, &invocation, dry_run).await;
    if !outcome.is_success() {
        eprintln!("❌ Build tool {}", outcome.describe());
        std::process::exit(1);
    }

    println!("✨ Build tool {}", outcome.describe());
    Ok(())
}
