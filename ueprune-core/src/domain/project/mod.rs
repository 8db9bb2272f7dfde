// ueprune-core/src/domain/project/mod.rs

pub mod configuration;
pub use configuration::{DEFAULT_BUILD_TOOL, PruneConfig};
