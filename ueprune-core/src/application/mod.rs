// ueprune-core/src/application/mod.rs

pub mod clean;
pub mod init;
pub mod input;
pub mod locate;
pub mod pipeline;
pub mod regenerate;
pub mod remove;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use ueprune_core::application::{prune_class, clean_build_output};`

pub use clean::clean_build_output;
pub use init::init_config;
pub use input::{read_class_name, wait_for_enter};
pub use locate::locate_descriptor;
pub use pipeline::{PruneEvent, PruneReport, PruneRequest, prune_class};
pub use regenerate::regenerate_project_files;
pub use remove::remove_class_files;
