//! Error types for loading and writing the rc file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOME is not set; cannot locate the configuration directory")]
    HomeNotSet,

    #[error("Failed to read config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Config at {path:?} must be a mapping of sections at the top level")]
    NotAMapping { path: PathBuf },

    #[error("Template has no {{payload}} placeholder")]
    MissingPlaceholder,

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Invalid comment anchor: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Failed to write config to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown config key: {0}")]
    UnknownKey(String),

    #[error("Config key {0} is a section, not a single value")]
    NotALeaf(String),
}
