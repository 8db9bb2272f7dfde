// ueprune-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("No project descriptor (*.uproject) found under '{0}'")]
    #[diagnostic(
        code(ueprune::domain::descriptor_missing),
        help("Run from the project root or pass --project-dir.")
    )]
    DescriptorNotFound(String),

    #[error("Multiple project descriptors found: {}", .paths.join(", "))]
    #[diagnostic(
        code(ueprune::domain::descriptor_ambiguous),
        help("Use --descriptor-policy first to pick the shallowest one.")
    )]
    MultipleDescriptors { paths: Vec<String> },

    #[error("Failed to delete '{path}': {reason}")]
    #[diagnostic(code(ueprune::domain::delete_failed))]
    DeleteFailed { path: String, reason: String },

    #[error("Unknown policy '{value}' (expected one of: {expected})")]
    #[diagnostic(code(ueprune::domain::policy))]
    UnknownPolicy { value: String, expected: String },
}
