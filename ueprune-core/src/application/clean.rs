// ueprune-core/src/application/clean.rs

use std::path::{Component, Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::domain::removal::CleanOutcome;
use crate::error::PruneError;
use crate::infrastructure::fs::remove_dir_forced;

/// Recursively delete the build output directory under the project root.
///
/// A missing directory is a `Missing` outcome, never an error; only an
/// unsafe `binaries_dir` is.
#[instrument(skip(project_dir))]
pub fn clean_build_output(
    project_dir: &Path,
    binaries_dir: &str,
    dry_run: bool,
) -> Result<CleanOutcome, PruneError> {
    let target = project_subdir(project_dir, binaries_dir)?;

    let outcome = if dry_run {
        if target.exists() {
            CleanOutcome::Planned { path: target }
        } else {
            CleanOutcome::Missing { path: target }
        }
    } else {
        remove_dir_forced(&target)
    };

    match &outcome {
        CleanOutcome::Removed { path } => info!(path = ?path, "🗑️  Build output removed"),
        CleanOutcome::Planned { path } => info!(path = ?path, "Build output would be removed"),
        CleanOutcome::Missing { path } => warn!(path = ?path, "Build output directory not found"),
        CleanOutcome::Failed { path, reason } => {
            warn!(path = ?path, %reason, "Build output could not be removed")
        }
    }

    Ok(outcome)
}

/// Join a configured relative directory onto the project root.
///
/// Only plain names are accepted: no `..`, no root, no prefix.
pub(crate) fn project_subdir(project_dir: &Path, rel: &str) -> Result<PathBuf, PruneError> {
    let rel_path = Path::new(rel);
    let plain = !rel.is_empty()
        && rel_path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if !plain {
        return Err(PruneError::UnsafePath(rel.to_string()));
    }
    Ok(project_dir.join(rel_path))
}
