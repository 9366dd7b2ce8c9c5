//! Executes assembled commands with the system `git` binary via
//! [`tokio::process::Command`].
//!
//! Tokens are passed through unchanged, after an optional `-C <dir>`. Terminal
//! prompts are disabled so a credential request fails instead of hanging.

use crate::artifacts::command::Command;
use anyhow::{Context, bail};
use derive_new::new;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tracing::{debug, instrument, warn};

pub const DEFAULT_GIT_BINARY: &str = "git";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct GitConfig {
    #[new(value = "PathBuf::from(DEFAULT_GIT_BINARY)")]
    binary: PathBuf,
    #[new(default)]
    work_dir: Option<PathBuf>,
    #[new(default)]
    env: Vec<(String, String)>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GitConfig {
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Run git as if started in `dir` (`git -C <dir>`).
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn work_dir(&self) -> Option<&Path> {
        self.work_dir.as_deref()
    }

    /// Checks what can be checked before spawning.
    ///
    /// A binary given as a path must be an executable file; a bare program name
    /// is left to `PATH` lookup.
    pub fn validate(&self) -> anyhow::Result<()> {
        let is_path = self
            .binary
            .parent()
            .is_some_and(|parent| !parent.as_os_str().is_empty());

        if is_path {
            if !self.binary.is_file() {
                bail!("git binary {} does not exist", self.binary.display());
            }
            if !is_executable::is_executable(&self.binary) {
                bail!("git binary {} is not executable", self.binary.display());
            }
        }

        if let Some(dir) = &self.work_dir
            && !dir.is_dir()
        {
            bail!("working directory {} is not a directory", dir.display());
        }

        Ok(())
    }
}

#[derive(Debug, Clone, new)]
pub struct Git {
    config: GitConfig,
}

impl Default for Git {
    fn default() -> Self {
        Self::new(GitConfig::default())
    }
}

impl Git {
    pub fn config(&self) -> &GitConfig {
        &self.config
    }

    /// Runs `command` to completion and returns its stdout.
    ///
    /// A non-zero exit status is an error carrying git's stderr.
    #[instrument(skip_all, fields(command = %command))]
    pub async fn run(&self, command: &Command) -> anyhow::Result<String> {
        self.config.validate()?;

        let mut cmd = tokio::process::Command::new(&self.config.binary);
        if let Some(dir) = &self.config.work_dir {
            cmd.arg("-C").arg(dir);
        }
        cmd.args(command.tokens());

        cmd.env("GIT_TERMINAL_PROMPT", "0");
        for (key, value) in &self.config.env {
            cmd.env(key, value);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        debug!(binary = %self.config.binary.display(), "spawning git {}", command.subcommand());

        let output = cmd
            .output()
            .await
            .with_context(|| format!("failed to spawn {command}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = %output.status, "git {} failed", command.subcommand());
            bail!("{command} failed ({}): {}", output.status, stderr.trim());
        }

        debug!("git {} succeeded", command.subcommand());
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
