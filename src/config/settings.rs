use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::mixer::DialectPreference;

/// Name of the tool looked up in PATH when no path is configured
pub const TINYMIX_BINARY: &str = "tinymix";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("device index and device name cannot be used together")]
    ConflictingDevice,
    #[error("selecting a device by name ('{0}') is not supported yet")]
    DeviceByNameUnsupported(String),
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// How the target sound card is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceSelector {
    Index(u32),
    Name(String),
}

impl DeviceSelector {
    /// Resolve to a card index; names are not supported
    pub fn index(&self) -> Result<u32, ConfigError> {
        match self {
            DeviceSelector::Index(idx) => Ok(*idx),
            DeviceSelector::Name(name) => Err(ConfigError::DeviceByNameUnsupported(name.clone())),
        }
    }
}

impl Default for DeviceSelector {
    fn default() -> Self {
        DeviceSelector::Index(0)
    }
}

/// Validated configuration for talking to `tinymix`
#[derive(Debug, Clone)]
pub struct TinymixConfig {
    pub tinymix_path: PathBuf,
    pub device: DeviceSelector,
    pub dialect: DialectPreference,
}

impl Default for TinymixConfig {
    fn default() -> Self {
        Self {
            tinymix_path: default_tinymix_path(),
            device: DeviceSelector::default(),
            dialect: DialectPreference::Auto,
        }
    }
}

impl TinymixConfig {
    pub fn builder() -> TinymixConfigBuilder {
        TinymixConfigBuilder::default()
    }
}

/// `tinymix` from PATH if it can be found, otherwise the bare name
fn default_tinymix_path() -> PathBuf {
    which::which(TINYMIX_BINARY).unwrap_or_else(|_| PathBuf::from(TINYMIX_BINARY))
}

/// Collects optional settings; `build` validates them
#[derive(Debug, Clone, Default)]
pub struct TinymixConfigBuilder {
    tinymix_path: Option<PathBuf>,
    device_index: Option<u32>,
    device_name: Option<String>,
    dialect: Option<DialectPreference>,
}

impl TinymixConfigBuilder {
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tinymix_path = Some(path.into());
        self
    }

    pub fn with_device_index(mut self, index: u32) -> Self {
        self.device_index = Some(index);
        self
    }

    pub fn with_device_name(mut self, name: impl Into<String>) -> Self {
        self.device_name = Some(name.into());
        self
    }

    pub fn with_dialect(mut self, dialect: DialectPreference) -> Self {
        self.dialect = Some(dialect);
        self
    }

    pub fn build(self) -> Result<TinymixConfig, ConfigError> {
        let device = match (self.device_index, self.device_name) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingDevice),
            (Some(idx), None) => DeviceSelector::Index(idx),
            (None, Some(name)) => DeviceSelector::Name(name),
            (None, None) => DeviceSelector::default(),
        };

        Ok(TinymixConfig {
            tinymix_path: self.tinymix_path.unwrap_or_else(default_tinymix_path),
            device,
            dialect: self.dialect.unwrap_or_default(),
        })
    }
}

/// Contents of the config file; every key is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub tinymix_path: Option<PathBuf>,
    pub device_idx: Option<u32>,
    pub device_name: Option<String>,
    pub dialect: Option<DialectPreference>,
}

impl FileSettings {
    pub fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the file at `path`, or defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &contents)
    }
}

/// Settings given on the command line, overriding the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub tinymix_path: Option<PathBuf>,
    pub device_idx: Option<u32>,
    pub device_name: Option<String>,
    pub dialect: Option<DialectPreference>,
}

/// Merge file settings with command-line overrides into a validated config
///
/// A device given on the command line replaces the file's device selection
/// entirely, so a file `device_idx` never conflicts with a CLI `--device-name`.
pub fn resolve(file: FileSettings, cli: CliOverrides) -> Result<TinymixConfig, ConfigError> {
    let mut builder = TinymixConfig::builder();

    if let Some(path) = cli.tinymix_path.or(file.tinymix_path) {
        builder = builder.with_path(path);
    }

    let (device_idx, device_name) = if cli.device_idx.is_some() || cli.device_name.is_some() {
        (cli.device_idx, cli.device_name)
    } else {
        (file.device_idx, file.device_name)
    };
    if let Some(idx) = device_idx {
        builder = builder.with_device_index(idx);
    }
    if let Some(name) = device_name {
        builder = builder.with_device_name(name);
    }

    if let Some(dialect) = cli.dialect.or(file.dialect) {
        builder = builder.with_dialect(dialect);
    }

    builder.build()
}
