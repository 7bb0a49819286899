//! Mock command runner for deterministic testing
//!
//! Implements `CommandRunner` without spawning processes. Responses come
//! from a closure over the argument list, and every invocation is captured
//! for later verification in tests.
//!
//! # Example
//! ```
//! use audiocli::exec::mock::MockRunner;
//! use audiocli::exec::CommandOutput;
//!
//! let runner = MockRunner::new(|args| {
//!     if args.is_empty() {
//!         CommandOutput::ok("usage: tinymix ...")
//!     } else {
//!         CommandOutput::ok("")
//!     }
//! });
//! assert!(runner.invocations().is_empty());
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::exec::error::ExecError;
use crate::exec::runner::{CommandOutput, CommandRunner};

type Responder = dyn Fn(&[String]) -> CommandOutput + Send + Sync;

/// One captured call to `run`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub stdin: Option<Vec<u8>>,
}

/// Scripted command runner for tests
#[derive(Clone)]
pub struct MockRunner {
    responder: Arc<Responder>,
    /// Whether every call should fail to spawn
    fail_spawn: bool,
    invocations: Arc<Mutex<Vec<Invocation>>>,
}

impl MockRunner {
    /// Create a runner answering each call with `responder(args)`
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&[String]) -> CommandOutput + Send + Sync + 'static,
    {
        Self {
            responder: Arc::new(responder),
            fail_spawn: false,
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Runner whose every invocation fails as if the binary were missing
    pub fn failing() -> Self {
        let mut runner = Self::new(|_| CommandOutput::default());
        runner.fail_spawn = true;
        runner
    }

    /// Get captured invocations for assertions
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().clone()
    }

    /// Argument lists of all captured invocations, in call order
    pub fn captured_args(&self) -> Vec<Vec<String>> {
        self.invocations
            .lock()
            .iter()
            .map(|inv| inv.args.clone())
            .collect()
    }

    /// Reset all captured state
    pub fn reset(&self) {
        self.invocations.lock().clear();
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        stdin: Option<&[u8]>,
    ) -> Result<CommandOutput, ExecError> {
        self.invocations.lock().push(Invocation {
            program: program.to_path_buf(),
            args: args.to_vec(),
            stdin: stdin.map(<[u8]>::to_vec),
        });

        if self.fail_spawn {
            return Err(ExecError::Spawn {
                program: program.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock-failure"),
            });
        }

        Ok((self.responder)(args))
    }
}
