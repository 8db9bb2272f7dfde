use crate::domain::removal::{CleanOutcome, RemovalOutcome};
use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Write content to a file atomically using a temporary file.
///
/// The temporary file is created next to the target so the final rename
/// never crosses filesystems. The target is either fully written or left
/// untouched.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;

    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;

    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// Delete one file, reporting failure instead of raising it.
pub fn remove_file_best_effort(path: &Path) -> RemovalOutcome {
    match fs::remove_file(path) {
        Ok(()) => RemovalOutcome::Removed,
        Err(e) => RemovalOutcome::Failed {
            reason: e.to_string(),
        },
    }
}

/// Recursively delete a directory. A missing directory is reported, not raised.
pub fn remove_dir_forced(path: &Path) -> CleanOutcome {
    let path_buf = path.to_path_buf();
    match fs::remove_dir_all(path) {
        Ok(()) => CleanOutcome::Removed { path: path_buf },
        Err(e) if e.kind() == ErrorKind::NotFound => CleanOutcome::Missing { path: path_buf },
        Err(e) => CleanOutcome::Failed {
            path: path_buf,
            reason: e.to_string(),
        },
    }
}
