//! Child process driver.
//!
//! Runs the real binary with inherited stdin while stdout and stderr are
//! piped. Each stream is drained on its own task, which echoes every chunk
//! to the wrapper's matching stream and records it in an [`OutputListener`].

use setup_terragrunt_actions::Runner;
use setup_terragrunt_core::{Error, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::OutputListener;

/// Captured result of one run of the wrapped binary.
#[derive(Debug, Clone)]
pub struct ProxyOutcome {
    /// Everything the child wrote to stdout.
    pub stdout: String,
    /// Everything the child wrote to stderr.
    pub stderr: String,
    /// Exit code the wrapper should exit with.
    pub exit_code: i32,
}

impl ProxyOutcome {
    /// Publish the outcome as step outputs.
    pub fn publish(&self, runner: &Runner) -> Result<()> {
        runner.set_output("stdout", &self.stdout)?;
        runner.set_output("stderr", &self.stderr)?;
        runner.set_output("exitcode", &self.exit_code.to_string())
    }
}

/// Run `program` with `args` and wait for it to exit.
pub async fn run(program: &Path, args: &[OsString]) -> Result<ProxyOutcome> {
    debug!(program = %program.display(), ?args, "Running wrapped binary");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::filesystem_at("execute", program, e))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::configuration("stdout pipe not available"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| Error::configuration("stderr pipe not available"))?;

    let stdout_task = tee(stdout, tokio::io::stdout());
    let stderr_task = tee(stderr, tokio::io::stderr());

    let status = child
        .wait()
        .await
        .map_err(|e| Error::filesystem_at("wait for", program, e))?;

    let stdout = join(stdout_task).await;
    let stderr = join(stderr_task).await;

    let exit_code = exit_code(status);
    debug!(exit_code, "Wrapped binary exited");

    Ok(ProxyOutcome {
        stdout: stdout.contents(),
        stderr: stderr.contents(),
        exit_code,
    })
}

/// Copy `reader` to `echo` chunk by chunk, recording every chunk.
fn tee<R, W>(mut reader: R, mut echo: W) -> JoinHandle<OutputListener>
where
    R: AsyncRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut listener = OutputListener::new();
        let mut buf = [0u8; 8192];
        loop {
            match reader.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => {
                    listener.append(&buf[..n]);
                    if let Err(e) = echo.write_all(&buf[..n]).await {
                        warn!(error = %e, "Failed to echo output");
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read output");
                    break;
                }
            }
        }
        let _ = echo.flush().await;
        listener
    })
}

async fn join(task: JoinHandle<OutputListener>) -> OutputListener {
    task.await.unwrap_or_else(|e| {
        warn!(error = %e, "Output task failed");
        OutputListener::new()
    })
}

/// The child's exit code, or `128 + signal` when a signal killed it.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
