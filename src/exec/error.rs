use std::path::PathBuf;

use thiserror::Error;

/// Failure to run an external program at all (as opposed to the program
/// running and reporting an error).
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Failed to spawn {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
