use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Text the upstream `tinymix` prints in its usage, absent from the Google build
const UPSTREAM_USAGE_MARKER: &str = "get NAME|ID";

/// Output convention of a particular `tinymix` build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// tinyalsa upstream
    Upstream,
    /// Android (Google) fork
    Google,
}

impl Dialect {
    /// Dialects whose dumps can be decoded and restored
    pub const SUPPORTED: &'static [Dialect] = &[Dialect::Google];

    /// Classify a build from the output of running it with no arguments
    pub fn detect(probe_output: &str) -> Self {
        if probe_output.contains(UPSTREAM_USAGE_MARKER) {
            Dialect::Upstream
        } else {
            Dialect::Google
        }
    }

    pub fn is_supported(&self) -> bool {
        Self::SUPPORTED.contains(self)
    }

    /// Whether the dump carries a second header line before the column header
    pub fn has_secondary_header(&self) -> bool {
        matches!(self, Dialect::Google)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Upstream => "upstream",
            Dialect::Google => "google",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured dialect: fixed, or detected by probing the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DialectPreference {
    /// Probe the tool to find out
    #[default]
    Auto,
    /// tinyalsa upstream
    Upstream,
    /// Android (Google) fork
    Google,
}

impl DialectPreference {
    /// The fixed dialect, or `None` when it must be probed
    pub fn fixed(&self) -> Option<Dialect> {
        match self {
            DialectPreference::Auto => None,
            DialectPreference::Upstream => Some(Dialect::Upstream),
            DialectPreference::Google => Some(Dialect::Google),
        }
    }
}
