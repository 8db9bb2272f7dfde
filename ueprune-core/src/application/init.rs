// ueprune-core/src/application/init.rs

use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::PruneError;
use crate::infrastructure::config::project::{CONFIG_FILE_NAMES, default_config_template};
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

/// Write a commented `ueprune.yaml` into the project root.
pub fn init_config(project_dir: &Path, force: bool) -> Result<PathBuf, PruneError> {
    let path = project_dir.join(CONFIG_FILE_NAMES[0]);
    if path.exists() && !force {
        return Err(InfrastructureError::ConfigExists(path.display().to_string()).into());
    }

    atomic_write(&path, default_config_template())?;
    info!(path = ?path, "Configuration written");
    Ok(path)
}
