// ueprune/src/main.rs

mod cli;
mod commands;
mod logging;

use clap::Parser;

use cli::{Cli, Commands};
use ueprune_core::PruneError;
use ueprune_core::infrastructure::error::InfrastructureError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG=debug ueprune remove ... for the details
    logging::init_cli_logger(cli.verbose);

    if let Err(err) = run(cli).await {
        report_error(err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let project_dir = cli.project_dir;

    match cli.command {
        Commands::Init { force } => commands::init::execute(project_dir, force),
        Commands::Remove(args) => commands::remove::execute(project_dir, args).await,
        Commands::Clean { dry_run } => commands::clean::execute(project_dir, dry_run),
        Commands::Locate { descriptor_policy } => {
            commands::locate::execute(project_dir, descriptor_policy)
        }
        Commands::Regenerate {
            tool,
            descriptor_policy,
            dry_run,
        } => commands::regenerate::execute(project_dir, tool, descriptor_policy, dry_run).await,
    }
}

/// Core errors carry miette diagnostics (code + help); render them fully.
fn report_error(err: anyhow::Error) {
    let err = match err.downcast::<PruneError>() {
        Ok(diagnostic) => return eprintln!("{:?}", miette::Report::new(diagnostic)),
        Err(err) => err,
    };
    match err.downcast::<InfrastructureError>() {
        Ok(diagnostic) => eprintln!("{:?}", miette::Report::new(diagnostic)),
        Err(other) => eprintln!("❌ {:#}", other),
    }
}
