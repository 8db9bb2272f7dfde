// ueprune-core/src/application/pipeline.rs

use serde::Serialize;
use std::path::Path;
use tracing::instrument;

use crate::application::clean::{clean_build_output, project_subdir};
use crate::application::locate::locate_descriptor;
use crate::application::regenerate::regenerate_project_files;
use crate::application::remove::remove_class_files;
use crate::domain::class::ClassName;
use crate::domain::descriptor::DescriptorPath;
use crate::domain::generator::{GeneratorInvocation, GeneratorOutcome};
use crate::domain::ports::ProjectFileGenerator;
use crate::domain::project::PruneConfig;
use crate::domain::removal::{CleanOutcome, RemovalReport};
use crate::error::PruneError;

pub struct PruneRequest<'a> {
    pub project_dir: &'a Path,
    pub class: ClassName,
    pub config: &'a PruneConfig,
    pub dry_run: bool,
}

/// Progress notifications, emitted before each step runs.
#[derive(Debug)]
pub enum PruneEvent<'a> {
    RemovingClass {
        class: &'a ClassName,
        source_dir: &'a Path,
    },
    CleaningOutput {
        binaries_dir: &'a str,
    },
    LocatingDescriptor,
    Regenerating {
        descriptor: &'a DescriptorPath,
        invocation: &'a GeneratorInvocation,
    },
}

impl PruneEvent<'_> {
    pub fn step(&self) -> &'static str {
        match self {
            Self::RemovingClass { .. } => "remove",
            Self::CleaningOutput { .. } => "clean",
            Self::LocatingDescriptor => "locate",
            Self::Regenerating { .. } => "regenerate",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PruneReport {
    pub class: ClassName,
    pub removal: RemovalReport,
    pub clean: CleanOutcome,
    pub descriptor: DescriptorPath,
    pub command_line: String,
    pub generator: GeneratorOutcome,
    pub dry_run: bool,
}

impl PruneReport {
    /// Anything that did not go as planned. A missing build directory does
    /// not count.
    pub fn has_failures(&self) -> bool {
        self.removal.has_failures() || self.clean.is_failure() || !self.generator.is_success()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Remove a class, wipe the build output and regenerate the project files.
///
/// Steps run in a fixed order and later steps do not look at earlier
/// outcomes. Only the `strict` policies and unsafe paths end the run early.
#[instrument(skip_all, fields(class = %request.class, dry_run = request.dry_run))]
pub async fn prune_class<F>(
    generator: &dyn ProjectFileGenerator,
    request: &PruneRequest<'_>,
    on_event: F,
) -> Result<PruneReport, PruneError>
where
    F: Fn(&PruneEvent<'_>),
{
    let config = request.config;

    // 1. Source files
    let source_dir = project_subdir(request.project_dir, &config.source_dir)?;
    on_event(&PruneEvent::RemovingClass {
        class: &request.class,
        source_dir: &source_dir,
    });
    let removal = remove_class_files(
        &source_dir,
        &request.class,
        config.delete_policy,
        request.dry_run,
    )?;

    // 2. Build output
    on_event(&PruneEvent::CleaningOutput {
        binaries_dir: &config.binaries_dir,
    });
    let clean = clean_build_output(request.project_dir, &config.binaries_dir, request.dry_run)?;

    // 3. Descriptor
    on_event(&PruneEvent::LocatingDescriptor);
    let descriptor = locate_descriptor(request.project_dir, config.descriptor_policy)?;

    // 4. Project files
    let invocation = GeneratorInvocation::new(&config.build_tool, descriptor.value.clone())
        .with_extra_args(config.extra_args.clone())
        .with_timeout(config.timeout());
    on_event(&PruneEvent::Regenerating {
        descriptor: &descriptor,
        invocation: &invocation,
    });
    let generator_outcome =
        regenerate_project_files(generator, &invocation, request.dry_run).await;

    Ok(PruneReport {
        class: request.class.clone(),
        removal,
        clean,
        command_line: invocation.command_line(),
        descriptor,
        generator: generator_outcome,
        dry_run: request.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::descriptor::DescriptorPolicy;
    use crate::domain::error::DomainError;
    use crate::domain::removal::DeletePolicy;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// Records every invocation instead of spawning anything.
    struct RecordingGenerator {
        calls: Mutex<Vec<Vec<String>>>,
        outcome: GeneratorOutcome,
    }

    impl RecordingGenerator {
        fn new(outcome: GeneratorOutcome) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                outcome,
            }
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl ProjectFileGenerator for RecordingGenerator {
        async fn generate(&self, invocation: &GeneratorInvocation) -> GeneratorOutcome {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(invocation.args());
            }
            self.outcome.clone()
        }
    }

    fn game_project(root: &Path) -> Result<()> {
        fs::create_dir_all(root.join("Source/Game/Private"))?;
        fs::create_dir_all(root.join("Binaries/Win64"))?;
        fs::write(root.join("Source/Game/PlayerCharacter.h"), "#pragma once")?;
        fs::write(root.join("Source/Game/Private/PlayerCharacter.cpp"), "// impl")?;
        fs::write(root.join("Source/Game/Game.Build.cs"), "// rules")?;
        fs::write(root.join("Binaries/Win64/MyGame.dll"), "bin")?;
        fs::write(root.join("MyGame.uproject"), "{}")?;
        Ok(())
    }

    #[tokio::test]
    async fn test_end_to_end_player_character() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path();
        game_project(root)?;

        let config = PruneConfig::default();
        let generator = RecordingGenerator::new(GeneratorOutcome::Succeeded);
        let events = Mutex::new(Vec::new());
        let request = PruneRequest {
            project_dir: root,
            class: ClassName::new("PlayerCharacter"),
            config: &config,
            dry_run: false,
        };

        let report = prune_class(&generator, &request, |e| {
            if let Ok(mut events) = events.lock() {
                events.push(e.step());
            }
        })
        .await?;

        assert!(!root.join("Source/Game/PlayerCharacter.h").exists());
        assert!(!root.join("Source/Game/Private/PlayerCharacter.cpp").exists());
        assert!(root.join("Source/Game/Game.Build.cs").exists());
        assert!(!root.join("Binaries").exists());
        assert!(!report.has_failures());

        let descriptor = root.join("MyGame.uproject");
        assert_eq!(
            generator.calls(),
            vec![vec![
                "-projectfiles".to_string(),
                format!("-project={}", descriptor.display()),
                "-game".to_string(),
                "-engine".to_string(),
                "-progress".to_string(),
            ]]
        );

        let events = events.lock().map(|e| e.clone()).unwrap_or_default();
        assert_eq!(events, vec!["remove", "clean", "locate", "regenerate"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_runs_to_completion_when_everything_is_missing() -> Result<()> {
        let dir = tempdir()?;
        let config = PruneConfig::default();
        let generator = RecordingGenerator::new(GeneratorOutcome::Failed { code: Some(1) });
        let request = PruneRequest {
            project_dir: dir.path(),
            class: ClassName::new(""),
            config: &config,
            dry_run: false,
        };

        let report = prune_class(&generator, &request, |_| {}).await?;

        assert!(report.removal.is_empty());
        assert!(matches!(report.clean, CleanOutcome::Missing { .. }));
        assert!(report.descriptor.is_empty());
        assert_eq!(generator.calls()[0][1], "-project=");
        assert!(report.has_failures());
        Ok(())
    }

    #[tokio::test]
    async fn test_dry_run_touches_nothing() -> Result<()> {
        let dir = tempdir()?;
        game_project(dir.path())?;
        let config = PruneConfig::default();
        let generator = RecordingGenerator::new(GeneratorOutcome::Succeeded);
        let request = PruneRequest {
            project_dir: dir.path(),
            class: ClassName::new("PlayerCharacter"),
            config: &config,
            dry_run: true,
        };

        let report = prune_class(&generator, &request, |_| {}).await?;

        assert!(dir.path().join("Source/Game/PlayerCharacter.h").exists());
        assert!(dir.path().join("Binaries").exists());
        assert!(generator.calls().is_empty());
        assert_eq!(report.generator, GeneratorOutcome::Skipped);
        assert_eq!(report.removal.entries.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_strict_descriptor_policy_aborts_before_generator() -> Result<()> {
        let dir = tempdir()?;
        game_project(dir.path())?;
        fs::write(dir.path().join("Other.uproject"), "{}")?;

        let config = PruneConfig {
            descriptor_policy: DescriptorPolicy::Strict,
            delete_policy: DeletePolicy::Strict,
            ..PruneConfig::default()
        };
        let generator = RecordingGenerator::new(GeneratorOutcome::Succeeded);
        let request = PruneRequest {
            project_dir: dir.path(),
            class: ClassName::new("PlayerCharacter"),
            config: &config,
            dry_run: false,
        };

        let result = prune_class(&generator, &request, |_| {}).await;
        assert!(matches!(
            result,
            Err(PruneError::Domain(DomainError::MultipleDescriptors { .. }))
        ));
        assert!(generator.calls().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_report_serializes() -> Result<()> {
        let dir = tempdir()?;
        game_project(dir.path())?;
        let config = PruneConfig::default();
        let generator = RecordingGenerator::new(GeneratorOutcome::Succeeded);
        let request = PruneRequest {
            project_dir: dir.path(),
            class: ClassName::new("PlayerCharacter"),
            config: &config,
            dry_run: false,
        };

        let report = prune_class(&generator, &request, |_| {}).await?;
        let json: serde_json::Value = serde_json::from_str(&report.to_json()?)?;

        assert_eq!(json["class"], "PlayerCharacter");
        assert_eq!(json["clean"]["status"], "removed");
        assert_eq!(json["generator"]["status"], "succeeded");
        assert_eq!(json["descriptor"]["policy"], "first");
        assert_eq!(json["removal"]["entries"][0]["status"], "removed");
        Ok(())
    }
}
