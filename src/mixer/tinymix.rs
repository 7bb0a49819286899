//! Client for the `tinymix` utility
//!
//! Captures the full control state of a sound card with one dump invocation
//! and restores it with one invocation per control.

use std::sync::Arc;

use crate::config::TinymixConfig;
use crate::exec::{CommandOutput, CommandRunner};
use crate::mixer::control::ControlRecord;
use crate::mixer::decode::decode;
use crate::mixer::dialect::Dialect;
use crate::mixer::encode::encode;
use crate::mixer::error::{DecodeError, MixerError};

/// Outcome of restoring a saved state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Controls `tinymix` accepted
    pub restored: usize,
    /// Controls that could not be encoded and were never sent
    pub skipped: usize,
    /// Controls `tinymix` rejected or could not be run for
    pub failed: usize,
}

impl RestoreReport {
    pub fn total(&self) -> usize {
        self.restored + self.skipped + self.failed
    }

    pub fn is_complete(&self) -> bool {
        self.skipped == 0 && self.failed == 0
    }
}

pub struct Tinymix {
    config: TinymixConfig,
    dialect: Dialect,
    runner: Arc<dyn CommandRunner>,
}

impl Tinymix {
    /// Create a client, probing the binary when the dialect is not fixed
    pub async fn new(
        config: TinymixConfig,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Self, MixerError> {
        let dialect = match config.dialect.fixed() {
            Some(dialect) => dialect,
            None => Self::detect_dialect(&config, runner.as_ref()).await?,
        };
        tracing::debug!(%dialect, path = %config.tinymix_path.display(), "Using tinymix");

        Ok(Self {
            config,
            dialect,
            runner,
        })
    }

    async fn detect_dialect(
        config: &TinymixConfig,
        runner: &dyn CommandRunner,
    ) -> Result<Dialect, MixerError> {
        let output = runner
            .run(&config.tinymix_path, &[], None)
            .await
            .map_err(|e| MixerError::Probe(e.to_string()))?;
        if !output.success() {
            return Err(MixerError::Probe(format!(
                "tinymix exited with {:?}: {}",
                output.exit_code,
                output.stderr_lossy().trim()
            )));
        }
        Ok(Dialect::detect(&output.stdout_lossy()))
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn config(&self) -> &TinymixConfig {
        &self.config
    }

    /// Arguments of the invocation that dumps every control of the device
    pub fn dump_args(device_index: u32) -> Vec<String> {
        vec![
            "-t".to_string(),
            "-D".to_string(),
            device_index.to_string(),
            "-a".to_string(),
        ]
    }

    /// Read the current state of every control
    pub async fn get_state(&self) -> Result<Vec<ControlRecord>, MixerError> {
        let device_index = self.config.device.index()?;
        let args = Self::dump_args(device_index);

        let output = self
            .runner
            .run(&self.config.tinymix_path, &args, None)
            .await?;
        check_output(&args, &output)?;

        let records = decode(&output.stdout_lossy(), self.dialect)?;
        tracing::info!(controls = records.len(), device_index, "Captured mixer state");
        Ok(records)
    }

    /// Restore every control in order
    ///
    /// A control that fails is logged and skipped; the rest are still restored.
    pub async fn load_state(&self, records: &[ControlRecord]) -> Result<RestoreReport, MixerError> {
        let device_index = self.config.device.index()?;
        if !self.dialect.is_supported() {
            return Err(DecodeError::UnsupportedDialect(self.dialect).into());
        }

        let mut report = RestoreReport::default();
        for record in records {
            let args = match encode(record, device_index) {
                Ok(args) => args,
                Err(e) => {
                    tracing::error!(control = %record.name, error = %e, "Unable to encode control, skipping");
                    report.skipped += 1;
                    continue;
                }
            };

            match self
                .runner
                .run(&self.config.tinymix_path, &args, None)
                .await
            {
                Ok(output) => match check_output(&args, &output) {
                    Ok(()) => report.restored += 1,
                    Err(e) => {
                        tracing::error!(control = %record.name, error = %e, "Failed to restore control");
                        report.failed += 1;
                    }
                },
                Err(e) => {
                    tracing::error!(control = %record.name, error = %e, "Calling tinymix failed");
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            restored = report.restored,
            skipped = report.skipped,
            failed = report.failed,
            "Restored mixer state"
        );
        Ok(report)
    }
}

/// Non-empty stderr takes precedence over the exit status
fn check_output(args: &[String], output: &CommandOutput) -> Result<(), MixerError> {
    if !output.stderr.is_empty() {
        return Err(MixerError::Stderr {
            args: args.to_vec(),
            stderr: output.stderr_lossy(),
        });
    }
    if !output.success() {
        return Err(MixerError::ExitStatus {
            args: args.to_vec(),
            code: output.exit_code,
        });
    }
    Ok(())
}
