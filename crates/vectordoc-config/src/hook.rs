//! Pre-build hook for hosted documentation builds.
//!
//! Hosted builds need an external preparation step before the engine runs.
//! The conditional lives in [`hook_from_env`]: when the hosting environment
//! variable is set, the resolved hook runs the preparation command; outside
//! that context the loader gets a [`NoopHook`]. The loader itself always
//! invokes whatever hook it was given, which keeps the gating logic testable
//! without real environment variables or subprocesses.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Environment variable signalling a hosted documentation build
pub const HOSTED_BUILD_ENV: &str = "READTHEDOCS";

/// Preparation command run before hosted builds, relative to the config dir
pub const PRE_BUILD_COMMAND: &str = "./before-rtd";

/// Errors that can occur while running the pre-build hook
#[derive(Debug, Error)]
pub enum HookError {
    /// The hook command could not be launched
    #[error("could not launch {command}: {source}")]
    Launch {
        /// Command that was attempted
        command: String,
        /// Underlying spawn error
        source: std::io::Error,
    },

    /// The hook command exited with a non-zero status
    #[error("{command} exited with {status}")]
    Exit {
        /// Command that was run
        command: String,
        /// Exit status reported by the OS
        status: ExitStatus,
    },
}

/// A preparation step run before any documentation generation
///
/// Implementations block until the step completes. There is no retry or
/// timeout; the caller aborts the whole build on failure.
pub trait PreBuildHook: Send + Sync {
    /// Run the hook to completion
    fn run(&self) -> Result<(), HookError>;

    /// The external command this hook runs, if any
    fn command(&self) -> Option<&Path> {
        None
    }
}

/// Hook used outside the hosted-build context; does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl PreBuildHook for NoopHook {
    fn run(&self) -> Result<(), HookError> {
        Ok(())
    }
}

/// Hook that synchronously runs an external command with no arguments
#[derive(Debug, Clone)]
pub struct CommandHook {
    command: PathBuf,
    working_dir: PathBuf,
}

impl CommandHook {
    /// Create a hook running `command` from `working_dir`
    pub fn new(command: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            working_dir: working_dir.into(),
        }
    }
}

impl PreBuildHook for CommandHook {
    fn run(&self) -> Result<(), HookError> {
        let command = self.command.display().to_string();
        let status = Command::new(&self.command)
            .current_dir(&self.working_dir)
            .status()
            .map_err(|source| HookError::Launch {
                command: command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(HookError::Exit { command, status })
        }
    }

    fn command(&self) -> Option<&Path> {
        Some(&self.command)
    }
}

/// Resolve the pre-build hook from the process environment
///
/// Returns a [`CommandHook`] for [`PRE_BUILD_COMMAND`] when
/// [`HOSTED_BUILD_ENV`] is set to a non-empty value, otherwise a
/// [`NoopHook`].
pub fn hook_from_env(config_dir: impl Into<PathBuf>) -> Box<dyn PreBuildHook> {
    hook_for(std::env::var(HOSTED_BUILD_ENV).ok().as_deref(), config_dir)
}

/// Resolve the hook for an explicit environment value
///
/// Split out from [`hook_from_env`] so the gating rule can be tested without
/// touching the process environment.
pub fn hook_for(env_value: Option<&str>, config_dir: impl Into<PathBuf>) -> Box<dyn PreBuildHook> {
    match env_value {
        Some(value) if !value.is_empty() => {
            Box::new(CommandHook::new(PRE_BUILD_COMMAND, config_dir))
        }
        _ => Box::new(NoopHook),
    }
}
