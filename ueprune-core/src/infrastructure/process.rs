// ueprune-core/src/infrastructure/process.rs

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::{debug, info, instrument, warn};

use crate::domain::generator::{GeneratorInvocation, GeneratorOutcome};
use crate::domain::ports::ProjectFileGenerator;

/// Runs the external build tool as a child process.
///
/// stdout/stderr go straight to the console; stdin is closed so the tool
/// cannot swallow the operator's final keypress. With a timeout the tool
/// runs in its own process group, so wrapper scripts die with their children.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildToolRunner;

#[async_trait]
impl ProjectFileGenerator for BuildToolRunner {
    #[instrument(skip(self, invocation), fields(tool = %invocation.tool.display()))]
    async fn generate(&self, invocation: &GeneratorInvocation) -> GeneratorOutcome {
        let mut command = Command::new(&invocation.tool);
        command
            .args(invocation.args())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        // Only with a timeout: a separate group no longer receives the terminal's Ctrl+C.
        #[cfg(unix)]
        if invocation.timeout.is_some() {
            command.process_group(0);
        }

        info!(command = %invocation.command_line(), "Spawning build tool");

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!(error = %e, "Build tool could not be started");
                return GeneratorOutcome::SpawnFailed {
                    reason: e.to_string(),
                };
            }
        };

        let waited = match invocation.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(waited) => waited,
                Err(_) => {
                    warn!(?limit, "Build tool timed out, killing it");
                    kill_process_tree(&mut child).await;
                    return GeneratorOutcome::TimedOut {
                        after_secs: limit.as_secs(),
                    };
                }
            },
            None => child.wait().await,
        };

        match waited {
            Ok(status) if status.success() => GeneratorOutcome::Succeeded,
            Ok(status) => {
                warn!(code = ?status.code(), "Build tool exited with failure");
                GeneratorOutcome::Failed {
                    code: status.code(),
                }
            }
            Err(e) => GeneratorOutcome::SpawnFailed {
                reason: format!("failed to wait for build tool: {}", e),
            },
        }
    }
}

/// Kill the tool and everything it started, then reap it.
async fn kill_process_tree(child: &mut Child) {
    if let Some(pid) = child.id() {
        #[cfg(unix)]
        {
            use nix::sys::signal::{Signal, killpg};
            use nix::unistd::Pid;

            match i32::try_from(pid) {
                Ok(raw) => {
                    if let Err(e) = killpg(Pid::from_raw(raw), Signal::SIGKILL) {
                        warn!(pid, error = %e, "Failed to kill build tool process group");
                    }
                }
                Err(_) => warn!(pid, "Process id out of range for a process group"),
            }
        }

        #[cfg(windows)]
        {
            let status = Command::new("taskkill")
                .args(["/PID", &pid.to_string(), "/T", "/F"])
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .await;
            if let Err(e) = status {
                warn!(pid, error = %e, "taskkill could not be started");
            }
        }
    }

    // Group leader is already dead on unix; this reaps it.
    if let Err(e) = child.kill().await {
        debug!(error = %e, "Build tool already gone");
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use std::time::Duration;
    use tempfile::tempdir;

    fn script(dir: &Path, name: &str, body: &str) -> Result<PathBuf> {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body))?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(path)
    }

    #[tokio::test]
    async fn test_success_and_arguments() -> Result<()> {
        let dir = tempdir()?;
        let log = dir.path().join("args.txt");
        let tool = script(
            dir.path(),
            "ubt",
            &format!("printf '%s\\n' \"$@\" > '{}'", log.display()),
        )?;

        let invocation = GeneratorInvocation::new(&tool, "/p/MyGame.uproject");
        let outcome = BuildToolRunner.generate(&invocation).await;

        assert_eq!(outcome, GeneratorOutcome::Succeeded);
        assert_eq!(
            fs::read_to_string(&log)?,
            "-projectfiles\n-project=/p/MyGame.uproject\n-game\n-engine\n-progress\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_exit_code_is_reported() -> Result<()> {
        let dir = tempdir()?;
        let tool = script(dir.path(), "ubt", "exit 3")?;

        let outcome = BuildToolRunner
            .generate(&GeneratorInvocation::new(&tool, ""))
            .await;
        assert_eq!(outcome, GeneratorOutcome::Failed { code: Some(3) });
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_tool_is_a_spawn_failure() -> Result<()> {
        let dir = tempdir()?;
        let outcome = BuildToolRunner
            .generate(&GeneratorInvocation::new(dir.path().join("missing"), ""))
            .await;
        assert!(matches!(outcome, GeneratorOutcome::SpawnFailed { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn test_timeout_kills_the_tool() -> Result<()> {
        let dir = tempdir()?;
        let tool = script(dir.path(), "ubt", "sleep 30")?;

        let invocation = GeneratorInvocation::new(&tool, "x.uproject")
            .with_timeout(Some(Duration::from_millis(200)));
        let outcome = BuildToolRunner.generate(&invocation).await;

        assert_eq!(outcome, GeneratorOutcome::TimedOut { after_secs: 0 });
        Ok(())
    }

    #[tokio::test]
    async fn test_timeout_kills_work_started_by_a_wrapper() -> Result<()> {
        let dir = tempdir()?;
        let marker = dir.path().join("generated.txt");
        // No `exec`: the real work runs in a grandchild of ueprune.
        let tool = script(
            dir.path(),
            "RunUBT.sh",
            &format!("(sleep 1; touch '{}')\necho finished", marker.display()),
        )?;

        let invocation = GeneratorInvocation::new(&tool, "x.uproject")
            .with_timeout(Some(Duration::from_millis(200)));
        let outcome = BuildToolRunner.generate(&invocation).await;
        assert_eq!(outcome, GeneratorOutcome::TimedOut { after_secs: 0 });

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(!marker.exists(), "work outlived the timeout");
        Ok(())
    }

    #[tokio::test]
    async fn test_no_timeout_waits_for_the_wrapper() -> Result<()> {
        let dir = tempdir()?;
        let marker = dir.path().join("generated.txt");
        let tool = script(
            dir.path(),
            "RunUBT.sh",
            &format!("(sleep 0.2; touch '{}')", marker.display()),
        )?;

        let outcome = BuildToolRunner
            .generate(&GeneratorInvocation::new(&tool, "x.uproject"))
            .await;
        assert_eq!(outcome, GeneratorOutcome::Succeeded);
        assert!(marker.exists());
        Ok(())
    }
}
