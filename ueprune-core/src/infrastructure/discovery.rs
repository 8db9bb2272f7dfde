// ueprune-core/src/infrastructure/discovery.rs

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::domain::class::ClassName;
use crate::domain::descriptor::DESCRIPTOR_EXTENSION;
use crate::infrastructure::error::InfrastructureError;

/// A directory (or entry) the class-file walk could not read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of scanning `Source/` for one class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassFileScan {
    pub matches: Vec<PathBuf>,
    /// Anything listed here may hide further matches.
    pub unreadable: Vec<UnreadableEntry>,
}

/// Every file under `source_dir` named exactly `<class>.h` or `<class>.cpp`.
///
/// A missing `source_dir` yields an empty scan. Entries the walk cannot read
/// are returned alongside the matches; the caller decides what they mean.
pub fn find_class_files(
    source_dir: &Path,
    class: &ClassName,
) -> Result<ClassFileScan, InfrastructureError> {
    let mut scan = ClassFileScan::default();
    if !source_dir.is_dir() {
        debug!(dir = ?source_dir, "Source directory not found");
        return Ok(scan);
    }

    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Unreadable entry under source directory");
                scan.unreadable.push(UnreadableEntry {
                    path: e.path().unwrap_or(source_dir).to_path_buf(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if entry.file_type().is_file()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| class.matches_file_name(name))
        {
            scan.matches.push(entry.into_path());
        }
    }

    Ok(scan)
}

/// Every `*.uproject` file under `root`, in walk order (file names sorted).
pub fn find_descriptors(root: &Path) -> Result<Vec<PathBuf>, InfrastructureError> {
    let mut matches = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            // The root itself must be readable.
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext == DESCRIPTOR_EXTENSION)
        {
            matches.push(entry.into_path());
        }
    }

    debug!(count = matches.len(), "Project descriptors found");
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, "")?;
        Ok(())
    }

    #[test]
    fn test_find_class_files_exact_names_only() -> Result<()> {
        let dir = tempdir()?;
        let source = dir.path().join("Source");
        touch(&source.join("Game/Enemy.h"))?;
        touch(&source.join("Game/Private/Enemy.cpp"))?;
        touch(&source.join("Game/Enemy.hpp"))?;
        touch(&source.join("Game/EnemyBoss.h"))?;
        touch(&source.join("Game/enemy.cpp"))?;
        fs::create_dir_all(source.join("Game/Enemy.h.d"))?;

        let found = find_class_files(&source, &ClassName::new("Enemy"))?;
        assert!(found.unreadable.is_empty());
        assert_eq!(
            found.matches,
            vec![
                source.join("Game/Enemy.h"),
                source.join("Game/Private/Enemy.cpp")
            ]
        );
        Ok(())
    }

    #[test]
    fn test_find_class_files_without_source_dir() -> Result<()> {
        let dir = tempdir()?;
        let found = find_class_files(&dir.path().join("Source"), &ClassName::new("Enemy"))?;
        assert_eq!(found, ClassFileScan::default());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_find_class_files_reports_unreadable_dirs() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir()?;
        let source = dir.path().join("Source");
        let locked = source.join("Locked");
        touch(&locked.join("Enemy.h"))?;
        touch(&source.join("Open/Enemy.cpp"))?;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

        // Permission bits mean nothing to root.
        let still_readable = fs::read_dir(&locked).is_ok();
        let found = find_class_files(&source, &ClassName::new("Enemy"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        if still_readable {
            return Ok(());
        }

        let found = found?;
        assert_eq!(found.matches, vec![source.join("Open/Enemy.cpp")]);
        assert_eq!(found.unreadable.len(), 1);
        assert_eq!(found.unreadable[0].path, locked);
        Ok(())
    }

    #[test]
    fn test_find_descriptors_sorted() -> Result<()> {
        let dir = tempdir()?;
        touch(&dir.path().join("B.uproject"))?;
        touch(&dir.path().join("A.uproject"))?;
        touch(&dir.path().join("Plugins/P/P.uplugin"))?;
        touch(&dir.path().join("notes.uproject.txt"))?;

        let found = find_descriptors(dir.path())?;
        assert_eq!(
            found,
            vec![dir.path().join("A.uproject"), dir.path().join("B.uproject")]
        );
        Ok(())
    }

    #[test]
    fn test_find_descriptors_missing_root_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        assert!(find_descriptors(&dir.path().join("nowhere")).is_err());
        Ok(())
    }
}
