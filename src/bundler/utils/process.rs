//! External tool execution with streamed output.

use crate::bundler::error::{Error, Result};
use std::collections::VecDeque;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Number of trailing stderr lines kept for diagnostics.
const STDERR_TAIL_LINES: usize = 20;

/// A single invocation of an external tool.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    /// Name shown in messages (the configured program string).
    pub display_name: String,
    /// Resolved program path.
    pub program: PathBuf,
    /// Arguments in order.
    pub args: Vec<OsString>,
    /// Working directory of the child.
    pub working_dir: PathBuf,
    /// Time budget before the child is killed.
    pub timeout: Duration,
}

impl ToolInvocation {
    /// Creates an invocation with no arguments.
    pub fn new(
        display_name: impl Into<String>,
        program: impl Into<PathBuf>,
        working_dir: &Path,
        timeout: Duration,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.to_path_buf(),
            timeout,
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Renders the command line for logs.
    pub fn command_line(&self) -> String {
        let mut line = self.display_name.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

/// Result of a tool run
#[derive(Debug)]
pub struct ToolRunResult {
    /// Exit status of the child
    pub status: ExitStatus,
    /// Last stderr lines, oldest first
    pub stderr_tail: Vec<String>,
}

impl ToolRunResult {
    /// Converts an unsuccessful exit into [`Error::ToolFailed`].
    pub fn check(self, tool: &str) -> Result<()> {
        if self.status.success() {
            return Ok(());
        }
        Err(Error::ToolFailed {
            tool: tool.to_string(),
            status: self.status.to_string(),
            stderr_tail: self.stderr_tail,
        })
    }
}

/// Runs a tool to completion, forwarding every stdout and stderr line to
/// `on_line` as it arrives.
///
/// Both streams are drained before the exit status is read. A child that
/// outlives `invocation.timeout` is killed and reported as
/// [`Error::ToolTimedOut`].
pub async fn run_tool<F>(invocation: &ToolInvocation, on_line: &F) -> Result<ToolRunResult>
where
    F: Fn(&str) + Sync,
{
    log::debug!(
        "Running `{}` in {}",
        invocation.command_line(),
        invocation.working_dir.display()
    );

    let mut child = Command::new(&invocation.program)
        .args(&invocation.args)
        .current_dir(&invocation.working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| Error::ToolNotFound {
            tool: invocation.display_name.clone(),
            reason: e.to_string(),
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let drain = async {
        tokio::join!(
            async {
                if let Some(stdout) = stdout {
                    let mut lines = BufReader::new(stdout).lines();
                    while let Ok(Some(line)) = lines.next_line().await {
                        on_line(&line);
                    }
                }
            },
            async {
                let mut tail = VecDeque::with_capacity(STDERR_TAIL_LINES);
                if let Some(stderr) = stderr {
                    let mut lines = BufReader::new(stderr).lines();
                    while let Ok(Some(line)) = lines.next_line().await {
                        on_line(&line);
                        if tail.len() == STDERR_TAIL_LINES {
                            tail.pop_front();
                        }
                        tail.push_back(line);
                    }
                }
                tail
            }
        )
    };

    let outcome = tokio::time::timeout(invocation.timeout, async {
        let (_, tail) = drain.await;
        let status = child.wait().await;
        (tail, status)
    })
    .await;

    match outcome {
        Ok((tail, Ok(status))) => {
            log::debug!("`{}` exited with {}", invocation.display_name, status);
            Ok(ToolRunResult {
                status,
                stderr_tail: tail.into(),
            })
        }
        Ok((_, Err(e))) => Err(Error::GenericError(format!(
            "failed to wait for `{}`: {}",
            invocation.display_name, e
        ))),
        Err(_elapsed) => {
            log::warn!(
                "`{}` exceeded {:?}, terminating",
                invocation.display_name,
                invocation.timeout
            );
            if let Err(e) = child.kill().await {
                log::warn!("Failed to kill `{}`: {}", invocation.display_name, e);
            }
            Err(Error::ToolTimedOut {
                tool: invocation.display_name.clone(),
                timeout: invocation.timeout,
            })
        }
    }
}
