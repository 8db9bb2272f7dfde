// ueprune-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum PruneError {
    // --- DOMAIN ERRORS (descriptor policy, strict deletes) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, YAML, walks) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Unsafe path traversal detected: {0}")]
    #[diagnostic(
        code(ueprune::unsafe_path),
        help("Configured directories must be plain names relative to the project root.")
    )]
    UnsafePath(String),
}

impl From<std::io::Error> for PruneError {
    fn from(err: std::io::Error) -> Self {
        PruneError::Infrastructure(InfrastructureError::Io(err))
    }
}
