// ueprune-core/src/domain/descriptor.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::domain::error::DomainError;

pub const DESCRIPTOR_EXTENSION: &str = "uproject";

/// How the locator turns zero, one or many `*.uproject` matches into the
/// single `-project=` argument.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorPolicy {
    /// Every match joined with no separator (legacy batch behavior).
    Concatenate,
    /// Shallowest match, ties broken by path order.
    #[default]
    First,
    /// Exactly one match or an error.
    Strict,
}

impl DescriptorPolicy {
    pub const VARIANTS: [&'static str; 3] = ["concatenate", "first", "strict"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concatenate => "concatenate",
            Self::First => "first",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for DescriptorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DescriptorPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "concatenate" => Ok(Self::Concatenate),
            "first" => Ok(Self::First),
            "strict" => Ok(Self::Strict),
            _ => Err(DomainError::UnknownPolicy {
                value: s.to_string(),
                expected: Self::VARIANTS.join(", "),
            }),
        }
    }
}

/// The resolved descriptor argument plus the raw matches it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorPath {
    pub value: String,
    pub matches: Vec<PathBuf>,
    pub policy: DescriptorPolicy,
}

impl DescriptorPath {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// True when more than one descriptor was found and only one was used
    /// (or, under `concatenate`, all of them were glued together).
    pub fn is_ambiguous(&self) -> bool {
        self.matches.len() > 1
    }
}

/// Apply `policy` to the matches, given in walk order.
pub fn resolve_descriptor(
    root: &Path,
    matches: Vec<PathBuf>,
    policy: DescriptorPolicy,
) -> Result<DescriptorPath, DomainError> {
    let value = match policy {
        DescriptorPolicy::Concatenate => matches
            .iter()
            .map(|p| p.to_string_lossy())
            .collect::<String>(),
        DescriptorPolicy::First => shallowest(&matches)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default(),
        DescriptorPolicy::Strict => match matches.as_slice() {
            [] => return Err(DomainError::DescriptorNotFound(root.display().to_string())),
            [single] => single.to_string_lossy().into_owned(),
            many => {
                return Err(DomainError::MultipleDescriptors {
                    paths: many.iter().map(|p| p.display().to_string()).collect(),
                });
            }
        },
    };

    Ok(DescriptorPath {
        value,
        matches,
        policy,
    })
}

fn shallowest(matches: &[PathBuf]) -> Option<&PathBuf> {
    matches
        .iter()
        .min_by(|a, b| {
            a.components()
                .count()
                .cmp(&b.components().count())
                .then_with(|| a.cmp(b))
        })
}
