//! Tool configuration
//!
//! Settings come from an optional JSON file and are then overridden by
//! command-line flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::TextEncoding;

/// Directory under the platform config dir
#[cfg(feature = "cli")]
const CONFIG_DIR: &str = "sha1d";

/// Config file name
#[cfg(feature = "cli")]
const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// How digests are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<digest>  <source>` lines, like sha1sum
    #[default]
    Hex,
    /// One JSON object per input
    Json,
    /// Raw 20-byte digests
    Raw,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Hex => "hex",
            OutputFormat::Json => "json",
            OutputFormat::Raw => "raw",
        })
    }
}

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Encoding applied to text arguments (files and stdin are hashed as-is)
    pub encoding: TextEncoding,
    /// Output format
    pub format: OutputFormat,
    /// Print hex digests in uppercase
    pub uppercase: bool,
    /// Worker threads for batch hashing (default: number of CPU cores)
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            format: OutputFormat::Hex,
            uppercase: false,
            threads: None,
        }
    }
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub encoding: Option<TextEncoding>,
    pub format: Option<OutputFormat>,
    pub uppercase: bool,
    pub threads: Option<usize>,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load an explicit config file, or the default one if it exists.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            log::debug!("Loading config from {}", path.display());
            return Self::load_from_file(path);
        }

        #[cfg(feature = "cli")]
        if let Some(path) = default_config_path().filter(|p| p.exists()) {
            log::debug!("Loading config from {}", path.display());
            return Self::load_from_file(&path);
        }

        Ok(Self::default())
    }

    /// Batch worker count: configured value, else one per CPU core
    #[cfg(feature = "cli")]
    pub fn worker_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(encoding) = overrides.encoding {
            self.encoding = encoding;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if overrides.uppercase {
            self.uppercase = true;
        }
        if let Some(threads) = overrides.threads {
            self.threads = Some(threads);
        }
    }
}

/// Default config path: `<config dir>/sha1d/config.json`
#[cfg(feature = "cli")]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
