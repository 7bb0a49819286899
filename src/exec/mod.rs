//! Subprocess execution

pub mod error;
pub mod mock;
mod runner;

pub use error::ExecError;
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
