pub mod cli;
pub mod config;
pub mod exec;
pub mod mixer;
pub mod util;

pub use config::{ConfigError, DeviceSelector, TinymixConfig};
pub use exec::{CommandOutput, CommandRunner, ExecError, SystemRunner};
pub use mixer::{
    decode, encode, ControlRecord, DecodeError, Dialect, DialectPreference, EncodeError,
    MixerError, RestoreReport, Tinymix, ValueType,
};
