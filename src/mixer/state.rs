//! Persisted mixer state (JSON)

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::mixer::control::ControlRecord;
use crate::mixer::error::MixerError;

#[cfg(unix)]
const STATE_FILE_MODE: u32 = 0o640;

pub fn to_json(records: &[ControlRecord]) -> Result<String, MixerError> {
    Ok(serde_json::to_string(records)?)
}

pub fn to_json_pretty(records: &[ControlRecord]) -> Result<String, MixerError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parse a state document, numbering records by position
pub fn from_json(json: &str) -> Result<Vec<ControlRecord>, MixerError> {
    let mut records: Vec<ControlRecord> = serde_json::from_str(json)?;
    for (index, record) in records.iter_mut().enumerate() {
        record.index = index;
    }
    Ok(records)
}

pub fn save_to_file(path: &Path, records: &[ControlRecord]) -> Result<(), MixerError> {
    let json = to_json(records)?;
    let file_error = |source| MixerError::StateFile {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(STATE_FILE_MODE);
    }

    let mut file = options.open(path).map_err(file_error)?;
    file.write_all(json.as_bytes()).map_err(file_error)?;

    tracing::info!(path = %path.display(), controls = records.len(), "Saved mixer state");
    Ok(())
}

pub fn load_from_file(path: &Path) -> Result<Vec<ControlRecord>, MixerError> {
    let json = std::fs::read_to_string(path).map_err(|source| MixerError::StateFile {
        path: path.to_path_buf(),
        source,
    })?;
    let records = from_json(&json)?;
    tracing::debug!(path = %path.display(), controls = records.len(), "Loaded mixer state");
    Ok(records)
}
