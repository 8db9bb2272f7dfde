// ueprune-core/src/application/locate.rs

use std::path::Path;
use tracing::{info, instrument, warn};

use crate::domain::descriptor::{DescriptorPath, DescriptorPolicy, resolve_descriptor};
use crate::error::PruneError;
use crate::infrastructure::discovery::find_descriptors;

/// Search `project_dir` recursively for `*.uproject` and resolve the result
/// with `policy`.
#[instrument(skip(project_dir))]
pub fn locate_descriptor(
    project_dir: &Path,
    policy: DescriptorPolicy,
) -> Result<DescriptorPath, PruneError> {
    let matches = find_descriptors(project_dir)?;
    let resolved = resolve_descriptor(project_dir, matches, policy)?;

    if resolved.is_empty() {
        warn!(dir = ?project_dir, "No project descriptor found");
    } else if resolved.is_ambiguous() {
        warn!(
            count = resolved.matches.len(),
            chosen = %resolved.value,
            "Several project descriptors found"
        );
    } else {
        info!(descriptor = %resolved.value, "Project descriptor located");
    }

    Ok(resolved)
}
