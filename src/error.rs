use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitCalError>;

#[derive(Error, Debug)]
pub enum GitCalError {
    #[error("Path does not exist: {}", .0.display())]
    InvalidPath(PathBuf),
    #[error("Command failed ({status}): {command}{}", stderr_suffix(.stderr))]
    UpstreamCommand {
        command: String,
        status: String,
        stderr: String,
    },
    #[error("Command timed out after {}: {command}", format_timeout(.timeout))]
    CommandTimeout { command: String, timeout: Duration },
    #[error("Failed to start command: {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed timestamp on line {line_number}: '{line}' is not an integer epoch")]
    MalformedTimestamp { line_number: usize, line: String },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_timeout(timeout: &Duration) -> String {
    humantime::format_duration(*timeout).to_string()
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{trimmed}")
    }
}
