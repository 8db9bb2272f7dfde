// ueprune-core/src/domain/removal.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// What to do when a target file cannot be deleted.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DeletePolicy {
    /// Record the failure and keep going.
    #[default]
    BestEffort,
    /// Abort on the first failure.
    Strict,
}

impl DeletePolicy {
    pub const VARIANTS: [&'static str; 2] = ["best-effort", "strict"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BestEffort => "best-effort",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeletePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "best-effort" | "best_effort" => Ok(Self::BestEffort),
            "strict" => Ok(Self::Strict),
            _ => Err(DomainError::UnknownPolicy {
                value: s.to_string(),
                expected: Self::VARIANTS.join(", "),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RemovalOutcome {
    Removed,
    /// Dry run: the file matched and would have been deleted.
    Planned,
    Failed { reason: String },
}

impl RemovalOutcome {
    pub fn succeeded(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalEntry {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: RemovalOutcome,
}

/// Per-file result of the source removal step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemovalReport {
    pub entries: Vec<RemovalEntry>,
}

impl RemovalReport {
    pub fn push(&mut self, path: PathBuf, outcome: RemovalOutcome) {
        self.entries.push(RemovalEntry { path, outcome });
    }

    pub fn removed(&self) -> impl Iterator<Item = &RemovalEntry> {
        self.entries.iter().filter(|e| e.outcome.succeeded())
    }

    pub fn failures(&self) -> impl Iterator<Item = &RemovalEntry> {
        self.entries.iter().filter(|e| !e.outcome.succeeded())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of removing the build output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CleanOutcome {
    Removed { path: PathBuf },
    Planned { path: PathBuf },
    /// Nothing to delete. Reported, never fatal.
    Missing { path: PathBuf },
    Failed { path: PathBuf, reason: String },
}

impl CleanOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Removed { path }
            | Self::Planned { path }
            | Self::Missing { path }
            | Self::Failed { path, .. } => path,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
