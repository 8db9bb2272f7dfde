// ueprune-core/src/infrastructure/mod.rs

pub mod config;
pub mod discovery;
pub mod error;
pub mod fs;
pub mod process;
