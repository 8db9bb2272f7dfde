// ueprune-core/src/domain/generator.rs

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Flags passed to the build tool, before and after `-project=`.
pub const PROJECT_FILES_FLAG: &str = "-projectfiles";
pub const TRAILING_FLAGS: [&str; 3] = ["-game", "-engine", "-progress"];

/// Everything needed to run the project-file generator once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInvocation {
    pub tool: PathBuf,
    pub descriptor: String,
    pub extra_args: Vec<String>,
    pub timeout: Option<Duration>,
}

impl GeneratorInvocation {
    pub fn new(tool: impl Into<PathBuf>, descriptor: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            descriptor: descriptor.into(),
            extra_args: Vec::new(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }

    /// `-projectfiles -project=<descriptor> -game -engine -progress [extra...]`
    ///
    /// An empty descriptor still yields `-project=`; the tool decides what to
    /// do with it.
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(5 + self.extra_args.len());
        args.push(PROJECT_FILES_FLAG.to_string());
        args.push(format!("-project={}", self.descriptor));
        args.extend(TRAILING_FLAGS.iter().map(|f| f.to_string()));
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Shell-like rendering, for logs and dry runs only.
    pub fn command_line(&self) -> String {
        let mut line = self.tool.display().to_string();
        for arg in self.args() {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GeneratorOutcome {
    Succeeded,
    /// Non-zero exit. `code` is `None` when the process was killed by a signal.
    Failed { code: Option<i32> },
    TimedOut { after_secs: u64 },
    SpawnFailed { reason: String },
    /// Dry run; nothing was spawned.
    Skipped,
}

impl GeneratorOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Skipped)
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Succeeded => "succeeded".to_string(),
            Self::Failed { code: Some(code) } => format!("failed with exit code {}", code),
            Self::Failed { code: None } => "terminated by signal".to_string(),
            Self::TimedOut { after_secs } => format!("timed out after {}s", after_secs),
            Self::SpawnFailed { reason } => format!("could not be started: {}", reason),
            Self::Skipped => "skipped (dry run)".to_string(),
        }
    }
}
