use crate::error::{GitCalError, Result};
use crate::model::LogQuery;
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, info};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Anything that can produce raw commit timestamps, one epoch per line.
pub trait LogSource {
    fn fetch(&self, query: &LogQuery) -> Result<String>;
}

/// Fails on the first path that does not exist.
pub fn validate_paths(paths: &[PathBuf]) -> Result<()> {
    match paths.iter().find(|p| !p.exists()) {
        Some(missing) => Err(GitCalError::InvalidPath(missing.clone())),
        None => Ok(()),
    }
}

/// Arguments for `git log` listing non-merge author timestamps from the last
/// 13 months.
pub fn log_args(query: &LogQuery) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "log".into(),
        "--no-merges".into(),
        "--format=%at".into(),
        "--since=13 months ago".into(),
    ];
    if let Some(author) = &query.author {
        args.push(format!("--author={author}").into());
    }
    if !query.paths.is_empty() {
        args.push("--".into());
        args.extend(query.paths.iter().map(|p| p.as_os_str().to_owned()));
    }
    args
}

pub struct GitLogSource {
    program: OsString,
    workdir: PathBuf,
    timeout: Duration,
}

impl GitLogSource {
    pub fn new(program: impl Into<OsString>, workdir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            workdir: workdir.into(),
            timeout,
        }
    }

    fn command_line(&self, args: &[OsString]) -> String {
        std::iter::once(&self.program)
            .chain(args)
            .map(|a| {
                let s = a.to_string_lossy();
                if s.contains(' ') {
                    format!("\"{s}\"")
                } else {
                    s.into_owned()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl LogSource for GitLogSource {
    fn fetch(&self, query: &LogQuery) -> Result<String> {
        let args = log_args(query);
        let command = self.command_line(&args);
        info!(%command, workdir = %self.workdir.display(), "running log command");

        let mut child = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| GitCalError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("failed to capture command stdout"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| io::Error::other("failed to capture command stderr"))?;
        let stdout_reader = drain(stdout);
        let stderr_reader = drain(stderr);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Reading commit history...");

        let started = Instant::now();
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if started.elapsed() >= self.timeout {
                pb.finish_and_clear();
                let _ = child.kill();
                let _ = child.wait();
                return Err(GitCalError::CommandTimeout {
                    command,
                    timeout: self.timeout,
                });
            }
            pb.tick();
            thread::sleep(POLL_INTERVAL);
        };
        pb.finish_and_clear();

        let out = join_drain(stdout_reader)?;
        let err = join_drain(stderr_reader)?;
        debug!(%status, bytes = out.len(), elapsed = ?started.elapsed(), "log command finished");

        if !status.success() {
            return Err(GitCalError::UpstreamCommand {
                command,
                status: status.to_string(),
                stderr: String::from_utf8_lossy(&err).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn join_drain(handle: JoinHandle<io::Result<Vec<u8>>>) -> Result<Vec<u8>> {
    let bytes = handle
        .join()
        .map_err(|_| io::Error::other("output reader thread panicked"))??;
    Ok(bytes)
}
