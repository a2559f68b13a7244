//! Subprocess execution with a deadline

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{TpromptsError, TpromptsResult};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Last non-empty stderr line, falling back to stdout
    pub fn message(&self) -> String {
        let pick = |text: &str| {
            text.lines()
                .map(str::trim)
                .rfind(|l| !l.is_empty())
                .map(str::to_string)
        };
        pick(&self.stderr)
            .or_else(|| pick(&self.stdout))
            .unwrap_or_else(|| "exited unsuccessfully".to_string())
    }
}

/// Run `command` to completion, killing it once `timeout` elapses.
///
/// `label` names the operation in errors (`git clone`).
pub fn run(command: &mut Command, label: &str, timeout: Duration) -> TpromptsResult<CommandOutput> {
    log::debug!("Running {:?} (timeout {}s)", command, timeout.as_secs());

    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| TpromptsError::SubprocessFailed {
            command: label.to_string(),
            message: format!("failed to start: {}", e),
        })?;

    // Drain pipes concurrently so a chatty child cannot block on a full pipe
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = match wait_until(&mut child, Instant::now() + timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(TpromptsError::Timeout {
                operation: label.to_string(),
                timeout,
            });
        }
        Err(e) => {
            let _ = child.kill();
            return Err(TpromptsError::SubprocessFailed {
                command: label.to_string(),
                message: e.to_string(),
            });
        }
    };

    Ok(CommandOutput {
        success: status.success(),
        stdout: stdout.join().unwrap_or_default(),
        stderr: stderr.join().unwrap_or_default(),
    })
}

fn wait_until(
    child: &mut Child,
    deadline: Instant,
) -> std::io::Result<Option<std::process::ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}
