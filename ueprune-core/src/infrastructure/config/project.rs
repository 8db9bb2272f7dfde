// ueprune-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::domain::descriptor::DescriptorPolicy;
use crate::domain::project::{DEFAULT_BUILD_TOOL, PruneConfig};
use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_FILE_NAMES: [&str; 2] = ["ueprune.yaml", ".ueprune.yaml"];

pub const ENV_BUILD_TOOL: &str = "UEPRUNE_BUILD_TOOL";
pub const ENV_TIMEOUT_SECS: &str = "UEPRUNE_TIMEOUT_SECS";
pub const ENV_DESCRIPTOR_POLICY: &str = "UEPRUNE_DESCRIPTOR_POLICY";

// --- LOADER ---

/// Load `ueprune.yaml` from the project root, then layer environment
/// overrides on top. A project without a config file gets the defaults.
#[instrument(skip(project_dir))]
pub fn load_prune_config(project_dir: &Path) -> Result<PruneConfig, InfrastructureError> {
    load_prune_config_with(project_dir, |key| std::env::var(key).ok())
}

/// Same as [`load_prune_config`] with an explicit environment lookup.
pub fn load_prune_config_with<F>(
    project_dir: &Path,
    lookup: F,
) -> Result<PruneConfig, InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match find_config_file(project_dir) {
        Some(config_path) => {
            info!(path = ?config_path, "Loading ueprune configuration");
            let content = fs::read_to_string(&config_path)?;
            if content.trim().is_empty() {
                PruneConfig::default()
            } else {
                serde_yaml::from_str(&content)?
            }
        }
        None => {
            debug!(dir = ?project_dir, "No configuration file, using defaults");
            PruneConfig::default()
        }
    };

    apply_env_overrides(&mut config, lookup)?;
    config.validate()?;

    Ok(config)
}

pub fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

fn apply_env_overrides<F>(config: &mut PruneConfig, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_BUILD_TOOL) {
        info!(old = ?config.build_tool, new = ?val, "Overriding build tool via ENV");
        config.build_tool = PathBuf::from(val);
    }
    if let Some(val) = lookup(ENV_TIMEOUT_SECS) {
        let secs = val.trim().parse::<u64>().map_err(|e| {
            InfrastructureError::ConfigError(format!("{}='{}': {}", ENV_TIMEOUT_SECS, val, e))
        })?;
        info!(old = ?config.timeout_secs, new = secs, "Overriding timeout via ENV");
        config.timeout_secs = Some(secs);
    }
    if let Some(val) = lookup(ENV_DESCRIPTOR_POLICY) {
        let policy = val.parse::<DescriptorPolicy>().map_err(|e| {
            InfrastructureError::ConfigError(format!("{}: {}", ENV_DESCRIPTOR_POLICY, e))
        })?;
        info!(old = %config.descriptor_policy, new = %policy, "Overriding descriptor policy via ENV");
        config.descriptor_policy = policy;
    }
    Ok(())
}

/// Commented starter file written by `ueprune init`.
pub fn default_config_template() -> String {
    format!(
        r#"# ueprune configuration
#
# Path (or command on PATH) of the tool that regenerates the IDE project files.
build-tool: '{build_tool}'

# Where class sources live, relative to this file.
source-dir: Source

# Build output removed before regeneration.
binaries-dir: Binaries

# What to do when several *.uproject files are found:
#   first       - shallowest one wins
#   strict      - refuse to continue
#   concatenate - legacy behavior, glue every path together
descriptor-policy: first

# best-effort keeps going when a file cannot be deleted, strict aborts.
delete-policy: best-effort

# Seconds to wait for the build tool. Leave unset to wait forever.
# timeout-secs: 600

# Appended after -projectfiles -project=... -game -engine -progress
extra-args: []
"#,
        build_tool = DEFAULT_BUILD_TOOL
    )
}
