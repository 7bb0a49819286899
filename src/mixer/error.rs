use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::exec::ExecError;
use crate::mixer::dialect::Dialect;

/// Malformed `tinymix` dump. Every variant names the offending line.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unable to get the {which} line from the dump")]
    MissingHeader { which: &'static str },
    #[error("line '{prefix}...' is too long")]
    LineTooLong { prefix: String },
    #[error("not enough columns in line '{line}': received {received}, but expected at least 5")]
    NotEnoughColumns { line: String, received: usize },
    #[error("control index '{token}' in line '{line}' is not an unsigned integer")]
    InvalidIndex { token: String, line: String },
    #[error("unexpected control index {found} (expected: {expected}) in line '{line}'")]
    IndexMismatch {
        found: u64,
        expected: usize,
        line: String,
    },
    #[error("unable to parse the value type '{token}' in line '{line}'")]
    UnknownValueType { token: String, line: String },
    #[error("amount of values '{token}' in line '{line}' is not an unsigned integer")]
    InvalidCount { token: String, line: String },
    #[error("value #{position} is missing in line '{line}'")]
    MissingValue { position: usize, line: String },
    #[error("unable to parse the value '{token}' in line '{line}': {source}")]
    InvalidNumber {
        token: String,
        line: String,
        #[source]
        source: ParseIntError,
    },
    #[error("unexpected boolean value '{token}' in line '{line}'")]
    InvalidBoolean { token: String, line: String },
    #[error("the {0} dialect of tinymix is not supported")]
    UnsupportedDialect(Dialect),
}

/// A stored control that cannot be turned back into `tinymix` arguments
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("invalid boolean value '{0}'")]
    InvalidBoolean(String),
    #[error("enum control '{name}' has several values but none is selected")]
    MissingSelection { name: String },
    #[error("enum control '{name}' selects value #{selected} but has only {len} values")]
    SelectionOutOfRange {
        name: String,
        selected: usize,
        len: usize,
    },
}

/// Errors from mixer client operations
#[derive(Debug, Error)]
pub enum MixerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Unable to execute tinymix: {0}")]
    Exec(#[from] ExecError),
    #[error("Unable to detect the tinymix binary type: {0}")]
    Probe(String),
    #[error("tinymix {args:?}: stderr was not empty: {stderr}")]
    Stderr { args: Vec<String>, stderr: String },
    #[error("tinymix {args:?} exited with {}", describe_exit(.code))]
    ExitStatus {
        args: Vec<String>,
        code: Option<i32>,
    },
    #[error("Unable to decode the tinymix dump: {0}")]
    Decode(#[from] DecodeError),
    #[error("Invalid state data: {0}")]
    State(#[from] serde_json::Error),
    #[error("Unable to access state file {}: {source}", .path.display())]
    StateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "a signal".to_string(),
    }
}
