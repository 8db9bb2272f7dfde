// ueprune-core/src/application/regenerate.rs

use tracing::info;

use crate::domain::generator::{GeneratorInvocation, GeneratorOutcome};
use crate::domain::ports::ProjectFileGenerator;

/// Run the project-file generator once. The outcome is reported, never raised.
pub async fn regenerate_project_files(
    generator: &dyn ProjectFileGenerator,
    invocation: &GeneratorInvocation,
    dry_run: bool,
) -> GeneratorOutcome {
    if dry_run {
        info!(command = %invocation.command_line(), "Dry run, build tool not started");
        return GeneratorOutcome::Skipped;
    }

    let outcome = generator.generate(invocation).await;
    info!(outcome = %outcome.describe(), "Project file generation finished");
    outcome
}
