use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::{ChildStdin, Command};

use crate::exec::error::ExecError;

/// Captured result of one program invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Exit code, `None` if the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// Successful output with the given stdout and an empty stderr
    pub fn ok(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: Vec::new(),
            exit_code: Some(0),
        }
    }

    /// Failed output with the given stderr and exit code
    pub fn failed(stderr: impl Into<Vec<u8>>, exit_code: i32) -> Self {
        Self {
            stdout: Vec::new(),
            stderr: stderr.into(),
            exit_code: Some(exit_code),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Trait for anything that can execute an external program and capture its output
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, feeding `stdin` if given, and wait for it to exit
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        stdin: Option<&[u8]>,
    ) -> Result<CommandOutput, ExecError>;
}

/// Runs programs as real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        stdin: Option<&[u8]>,
    ) -> Result<CommandOutput, ExecError> {
        tracing::debug!(program = %program.display(), ?args, "Running command");

        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd.stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|source| ExecError::Spawn {
            program: program.to_path_buf(),
            source,
        })?;

        // stdin is fed concurrently with draining stdout/stderr
        let pipe = child.stdin.take();
        let (written, output) = tokio::join!(write_stdin(pipe, stdin), child.wait_with_output());
        let output = output?;
        match written {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                tracing::debug!(program = %program.display(), "Child exited without reading all of stdin");
            }
            Err(e) => return Err(e.into()),
        }

        let result = CommandOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code: output.status.code(),
        };

        tracing::debug!(
            program = %program.display(),
            ?args,
            exit_code = ?result.exit_code,
            stdout_len = result.stdout.len(),
            stderr_len = result.stderr.len(),
            "Command finished"
        );

        Ok(result)
    }
}

/// Write `input` to the child's stdin, then close it so the child sees EOF
async fn write_stdin(pipe: Option<ChildStdin>, input: Option<&[u8]>) -> std::io::Result<()> {
    if let (Some(mut pipe), Some(input)) = (pipe, input) {
        pipe.write_all(input).await?;
        pipe.shutdown().await?;
    }
    Ok(())
}
