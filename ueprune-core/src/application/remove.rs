// ueprune-core/src/application/remove.rs

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::domain::class::ClassName;
use crate::domain::error::DomainError;
use crate::domain::removal::{DeletePolicy, RemovalOutcome, RemovalReport};
use crate::error::PruneError;
use crate::infrastructure::discovery::{ClassFileScan, find_class_files};
use crate::infrastructure::fs::remove_file_best_effort;

/// Delete every `<class>.h` / `<class>.cpp` under `source_dir`.
///
/// Under `BestEffort` each failure lands in the report and the walk goes
/// on. Under `Strict` the first failure is returned as `DeleteFailed`.
/// Directories the walk could not read count as failures.
#[instrument(skip(source_dir), fields(class = %class))]
pub fn remove_class_files(
    source_dir: &Path,
    class: &ClassName,
    policy: DeletePolicy,
    dry_run: bool,
) -> Result<RemovalReport, PruneError> {
    if class.is_empty() {
        warn!("Empty class name, targeting files named '.h' and '.cpp'");
    }

    let scan = find_class_files(source_dir, class)?;
    debug!(
        count = scan.matches.len(),
        unreadable = scan.unreadable.len(),
        "Class files matched"
    );

    if dry_run {
        apply_removals(scan, policy, |_| RemovalOutcome::Planned)
    } else {
        apply_removals(scan, policy, remove_file_best_effort)
    }
}

fn apply_removals<F>(
    scan: ClassFileScan,
    policy: DeletePolicy,
    remove: F,
) -> Result<RemovalReport, PruneError>
where
    F: Fn(&Path) -> RemovalOutcome,
{
    let mut report = RemovalReport::default();

    // An unreadable directory under strict aborts before anything is deleted.
    for entry in scan.unreadable {
        let reason = format!("could not scan directory: {}", entry.reason);
        warn!(path = ?entry.path, %reason, "Could not remove");
        if policy == DeletePolicy::Strict {
            return Err(DomainError::DeleteFailed {
                path: entry.path.display().to_string(),
                reason,
            }
            .into());
        }
        report.push(entry.path, RemovalOutcome::Failed { reason });
    }

    for path in scan.matches {
        let outcome = remove(&path);

        match &outcome {
            RemovalOutcome::Removed => info!(path = ?path, "🗑️  Removed"),
            RemovalOutcome::Planned => info!(path = ?path, "Would remove"),
            RemovalOutcome::Failed { reason } => {
                warn!(path = ?path, %reason, "Could not remove");
                if policy == DeletePolicy::Strict {
                    return Err(DomainError::DeleteFailed {
                        path: path.display().to_string(),
                        reason: reason.clone(),
                    }
                    .into());
                }
            }
        }

        report.push(path, outcome);
    }

    Ok(report)
}
