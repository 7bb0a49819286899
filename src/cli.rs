//! Command-line definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::CliOverrides;
use crate::mixer::DialectPreference;

/// Save and restore audio mixer state through tinymix
#[derive(Debug, Parser)]
#[command(name = "audiocli")]
#[command(version)]
pub struct Cli {
    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: tracing::Level,

    /// Config file (default: ~/.audiocli/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Mixer state operations
    Mixer(MixerArgs),
}

#[derive(Debug, Args)]
pub struct MixerArgs {
    #[command(flatten)]
    pub tinymix: TinymixArgs,

    #[command(subcommand)]
    pub command: MixerCommand,
}

#[derive(Debug, Subcommand)]
pub enum MixerCommand {
    /// Capture every control of the device into a state file
    Save {
        /// Destination state file
        file: PathBuf,
    },
    /// Restore every control from a state file
    Load {
        /// State file written by `save`
        file: PathBuf,
    },
    /// Print the current state as JSON
    Dump,
}

#[derive(Debug, Clone, Args)]
pub struct TinymixArgs {
    /// Path to the tinymix tool
    #[arg(long, global = true)]
    pub tinymix_path: Option<PathBuf>,

    /// Index of the sound card (cannot be used with --device-name)
    #[arg(long, global = true, conflicts_with = "device_name")]
    pub device_idx: Option<u32>,

    /// Name of the sound card (cannot be used with --device-idx)
    #[arg(long, global = true)]
    pub device_name: Option<String>,

    /// tinymix dialect
    #[arg(long, global = true, value_enum, ignore_case = true)]
    pub dialect: Option<DialectPreference>,
}

impl From<TinymixArgs> for CliOverrides {
    fn from(args: TinymixArgs) -> Self {
        Self {
            tinymix_path: args.tinymix_path,
            device_idx: args.device_idx,
            device_name: args.device_name,
            dialect: args.dialect,
        }
    }
}
