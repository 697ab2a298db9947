//! Timed invocation of a tool's version switch.

use std::env;
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{Result, ToolcheckError};

const DEFAULT_TIMEOUT_SECONDS: u64 = 15;
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Captured output of one version query.
#[derive(Debug, Clone)]
pub struct InvocationOutput {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl InvocationOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// The text to parse a version out of. Some tools (notably java)
    /// print their banner on stderr.
    pub fn version_text(&self) -> &str {
        let stdout = self.stdout.trim();
        if stdout.is_empty() {
            self.stderr.trim()
        } else {
            stdout
        }
    }
}

/// Timeout for version queries, overridable via `TOOLCHECK_TIMEOUT`.
pub fn query_timeout() -> Duration {
    let seconds = env::var("TOOLCHECK_TIMEOUT")
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
    Duration::from_secs(seconds)
}

/// Run `tool switch` and capture its output, killing the child if it
/// exceeds `timeout`.
pub fn query_version(tool: &str, switch: &str, timeout: Duration) -> Result<InvocationOutput> {
    tracing::debug!("running {tool} {switch}");
    let start = Instant::now();

    let mut child = Command::new(tool)
        .arg(switch)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| ToolcheckError::Invocation {
            tool: tool.to_string(),
            message: err.to_string(),
        })?;

    // Drain both pipes off-thread so a chatty tool cannot deadlock on a
    // full pipe buffer while we poll for exit.
    let stdout_handle = child.stdout.take().map(reader_thread);
    let stderr_handle = child.stderr.take().map(reader_thread);

    let exit_code = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status.code(),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ToolcheckError::Timeout {
                        tool: tool.to_string(),
                        seconds: timeout.as_secs(),
                    });
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(err) => {
                return Err(ToolcheckError::Invocation {
                    tool: tool.to_string(),
                    message: err.to_string(),
                })
            }
        }
    };

    let stdout = stdout_handle
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();
    let stderr = stderr_handle
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();

    Ok(InvocationOutput {
        exit_code,
        stdout,
        stderr,
    })
}

fn reader_thread<R: Read + Send + 'static>(mut source: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buffer = Vec::new();
        let _ = source.read_to_end(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    })
}
