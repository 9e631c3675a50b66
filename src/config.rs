//! Session configuration file.
//!
//! Optional TOML file; every key may be omitted. Command-line flags take
//! precedence over anything set here.
//!
//! ```toml
//! prompt = "ysh> "
//! echo = true
//! debug_flags = "ci"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Initial prompt
    pub prompt: Option<String>,
    /// Echo each input line before running it
    pub echo: Option<bool>,
    /// Debug flags, same letters as `-@`
    pub debug_flags: Option<String>,
}

impl ShellConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
