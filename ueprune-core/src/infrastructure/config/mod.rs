pub mod project;

pub use crate::domain::project::PruneConfig;
pub use project::{CONFIG_FILE_NAMES, default_config_template, find_config_file, load_prune_config};
