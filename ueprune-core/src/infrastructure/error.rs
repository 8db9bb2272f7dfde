// ueprune-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(ueprune::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    #[error("Directory walk failed: {0}")]
    #[diagnostic(code(ueprune::infra::walk))]
    Walk(#[from] walkdir::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(ueprune::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(ueprune::infra::config_invalid))]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(ueprune::infra::config))]
    ConfigError(String),

    #[error("Configuration file already exists at '{0}'")]
    #[diagnostic(
        code(ueprune::infra::config_exists),
        help("Pass --force to overwrite it.")
    )]
    ConfigExists(String),
}
