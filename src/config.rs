use crate::error::{GitCalError, Result};
use crate::window::LeapRule;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_TIMEOUT: &str = "GIT_CAL_TIMEOUT";
pub const ENV_GIT: &str = "GIT_CAL_GIT";
pub const ENV_LEAP_RULE: &str = "GIT_CAL_LEAP_RULE";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime knobs that are not command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Program invoked to list commits.
    pub git_program: OsString,
    /// Directory the log command runs in.
    pub workdir: PathBuf,
    /// Upper bound on how long the log command may run.
    pub timeout: Duration,
    pub leap_rule: LeapRule,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            git_program: OsString::from("git"),
            workdir: PathBuf::from("."),
            timeout: DEFAULT_TIMEOUT,
            leap_rule: LeapRule::default(),
        }
    }
}

impl Settings {
    /// Reads overrides from the process environment and runs in the current
    /// directory.
    pub fn from_env() -> Result<Self> {
        let mut settings = Self::from_lookup(|key| std::env::var_os(key))?;
        settings.workdir = std::env::current_dir()?;
        Ok(settings)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut settings = Self::default();

        if let Some(program) = lookup(ENV_GIT).filter(|v| !v.is_empty()) {
            settings.git_program = program;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT) {
            let text = raw.to_string_lossy();
            let timeout = humantime::parse_duration(text.trim()).map_err(|e| {
                GitCalError::Config(format!("{ENV_TIMEOUT}='{text}' is not a duration: {e}"))
            })?;
            if timeout.is_zero() {
                return Err(GitCalError::Config(format!(
                    "{ENV_TIMEOUT} must be greater than zero"
                )));
            }
            settings.timeout = timeout;
        }

        if let Some(raw) = lookup(ENV_LEAP_RULE) {
            settings.leap_rule = raw.to_string_lossy().parse()?;
        }

        Ok(settings)
    }
}
