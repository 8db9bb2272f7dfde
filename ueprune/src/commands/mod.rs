// ueprune/src/commands/mod.rs

pub mod clean;
pub mod init;
pub mod locate;
pub mod regenerate;
pub mod remove;

use anyhow::Context;
use std::path::{Path, PathBuf};

use ueprune_core::domain::DescriptorPolicy;
use ueprune_core::domain::project::PruneConfig;
use ueprune_core::infrastructure::config::load_prune_config;

use crate::cli::ToolArgs;

/// Absolute project root plus the layered configuration (file < env < flags).
pub struct Workspace {
    pub root: PathBuf,
    pub config: PruneConfig,
}

impl Workspace {
    pub fn load(project_dir: &Path) -> anyhow::Result<Self> {
        let root = std::path::absolute(project_dir)
            .with_context(|| format!("Cannot resolve project directory {:?}", project_dir))?;
        if !root.is_dir() {
            anyhow::bail!("❌ Project directory not found: {}", root.display());
        }
        let config = load_prune_config(&root)?;
        tracing::debug!(root = ?root, build_tool = ?config.build_tool, "Workspace loaded");
        Ok(Self { root, config })
    }

    pub fn apply_tool_args(&mut self, tool: &ToolArgs) {
        if let Some(build_tool) = &tool.build_tool {
            self.config.build_tool = build_tool.clone();
        }
        if let Some(secs) = tool.timeout_secs {
            self.config.timeout_secs = Some(secs);
        }
    }

    pub fn apply_descriptor_policy(&mut self, policy: Option<DescriptorPolicy>) {
        if let Some(policy) = policy {
            self.config.descriptor_policy = policy;
        }
    }
}
