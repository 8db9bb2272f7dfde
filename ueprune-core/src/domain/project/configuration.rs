// ueprune-core/src/domain/project/configuration.rs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use validator::Validate;

use crate::domain::descriptor::DescriptorPolicy;
use crate::domain::removal::DeletePolicy;

#[cfg(windows)]
pub const DEFAULT_BUILD_TOOL: &str = r"C:\Program Files\Epic Games\UE_5.3\Engine\Binaries\DotNET\UnrealBuildTool\UnrealBuildTool.exe";
#[cfg(not(windows))]
pub const DEFAULT_BUILD_TOOL: &str = "UnrealBuildTool";

#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
pub struct PruneConfig {
    #[serde(rename = "build-tool", default = "default_build_tool")]
    pub build_tool: PathBuf,

    #[validate(length(min = 1, message = "source-dir cannot be empty"))]
    #[serde(rename = "source-dir", default = "default_source_dir")]
    pub source_dir: String,

    #[validate(length(min = 1, message = "binaries-dir cannot be empty"))]
    #[serde(rename = "binaries-dir", default = "default_binaries_dir")]
    pub binaries_dir: String,

    #[serde(rename = "descriptor-policy", default)]
    pub descriptor_policy: DescriptorPolicy,

    #[serde(rename = "delete-policy", default)]
    pub delete_policy: DeletePolicy,

    /// `None` waits for the build tool forever.
    #[validate(range(min = 1, message = "timeout-secs must be at least 1"))]
    #[serde(rename = "timeout-secs", default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(rename = "extra-args", default)]
    pub extra_args: Vec<String>,
}

impl PruneConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            build_tool: default_build_tool(),
            source_dir: default_source_dir(),
            binaries_dir: default_binaries_dir(),
            descriptor_policy: DescriptorPolicy::default(),
            delete_policy: DeletePolicy::default(),
            timeout_secs: None,
            extra_args: Vec::new(),
        }
    }
}

fn default_build_tool() -> PathBuf {
    PathBuf::from(DEFAULT_BUILD_TOOL)
}
fn default_source_dir() -> String {
    "Source".to_string()
}
fn default_binaries_dir() -> String {
    "Binaries".to_string()
}
