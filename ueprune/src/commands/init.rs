// ueprune/src/commands/init.rs
//
// USE CASE: Scaffold a ueprune.yaml.

use std::path::PathBuf;

use ueprune_core::application::init_config;

pub fn execute(project_dir: PathBuf, force: bool) -> anyhow::Result<()> {
    let path = init_config(&project_dir, force)?;
    println!("📝 Configuration written to {}", path.display());
    Ok(())
}
