use std::sync::Arc;

use anyhow::{Context, Result};
use audiocli::cli::{Cli, Commands, MixerCommand};
use audiocli::config::{self, FileSettings};
use audiocli::mixer::{state, Tinymix};
use audiocli::{util, SystemRunner};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(cli.log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(log_level = %cli.log_level, "Logging initialized");

    let config_path = cli.config.clone().unwrap_or_else(util::config_path);
    let file_settings = FileSettings::load(&config_path)?;

    let Commands::Mixer(mixer) = cli.command;
    let config = config::resolve(file_settings, mixer.tinymix.into())?;
    let tinymix = Tinymix::new(config, Arc::new(SystemRunner::new()))
        .await
        .context("Unable to initialize tinymix")?;

    match mixer.command {
        MixerCommand::Save { file } => {
            let records = tinymix.get_state().await?;
            state::save_to_file(&file, &records)?;
        }
        MixerCommand::Load { file } => {
            let records = state::load_from_file(&file)?;
            let report = tinymix.load_state(&records).await?;
            if !report.is_complete() {
                tracing::warn!(
                    failed = report.failed,
                    skipped = report.skipped,
                    "Some controls were not restored"
                );
            }
        }
        MixerCommand::Dump => {
            let records = tinymix.get_state().await?;
            println!("{}", state::to_json_pretty(&records)?);
        }
    }

    tracing::debug!("end");
    Ok(())
}
