// ueprune/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use ueprune_core::domain::{DeletePolicy, DescriptorPolicy};

#[derive(Parser)]
#[command(name = "ueprune")]
#[command(about = "Removes an Unreal Engine class and regenerates the project files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project root (holds Source/, Binaries/ and the .uproject)
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Debug logging (RUST_LOG still wins when set)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📝 Writes a commented ueprune.yaml into the project root
    Init {
        /// Overwrite an existing ueprune.yaml
        #[arg(long)]
        force: bool,
    },

    /// 🗑️  Removes a class, wipes Binaries/ and regenerates the project files
    Remove(RemoveArgs),

    /// 🧹 Removes the build output directory only
    Clean {
        /// Report what would be removed without deleting
        #[arg(long)]
        dry_run: bool,
    },

    /// 🔍 Prints the project descriptor that would be handed to the build tool
    Locate {
        #[arg(long)]
        descriptor_policy: Option<DescriptorPolicy>,
    },

    /// ⚙️  Regenerates the IDE project files only
    Regenerate {
        #[command(flatten)]
        tool: ToolArgs,

        #[arg(long)]
        descriptor_policy: Option<DescriptorPolicy>,

        /// Print the command line without running it
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RemoveArgs {
    /// Class to remove (prompted for when omitted)
    pub class: Option<String>,

    #[command(flatten)]
    pub tool: ToolArgs,

    /// concatenate | first | strict
    #[arg(long)]
    pub descriptor_policy: Option<DescriptorPolicy>,

    /// best-effort | strict
    #[arg(long)]
    pub delete_policy: Option<DeletePolicy>,

    /// Report what would happen without deleting or spawning anything
    #[arg(long)]
    pub dry_run: bool,

    /// Exit right away instead of waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Exit with status 1 when any step reported a failure
    #[arg(long)]
    pub fail_on_error: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ToolArgs {
    /// Build tool executable (overrides ueprune.yaml and UEPRUNE_BUILD_TOOL)
    #[arg(long)]
    pub build_tool: Option<PathBuf>,

    /// Give up on the build tool after this many seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
