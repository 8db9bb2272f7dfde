// ueprune/src/commands/locate.rs
//
// USE CASE: Show which project descriptor would be used.

use std::path::PathBuf;

use ueprune_core::application::locate_descriptor;
use ueprune_core::domain::DescriptorPolicy;

use super::Workspace;

pub fn execute(project_dir: PathBuf, policy: Option<DescriptorPolicy>) -> anyhow::Result<()> {
    let mut workspace = Workspace::load(&project_dir)?;
    workspace.apply_descriptor_policy(policy);

    let descriptor = locate_descriptor(&workspace.root, workspace.config.descriptor_policy)?;

    // Strict already failed above; other policies print the empty value.
    if descriptor.is_empty() {
        eprintln!("⚠️  No *.uproject found under {}", workspace.root.display());
    }

    println!("{}", descriptor.value);

    if descriptor.is_ambiguous() {
        eprintln!(
            "⚠️  {} descriptors found (policy: {}):",
            descriptor.matches.len(),
            descriptor.policy
        );
        for path in &descriptor.matches {
            eprintln!("   - {}", path.display());
        }
    }
    Ok(())
}
