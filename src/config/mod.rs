//! Configuration store for the RIPE Atlas tools.
//!
//! Built-in defaults are merged with the user's rc file at
//! `~/.config/ripe-atlas-tools/rc`, a YAML file that only needs to name the
//! settings it changes. The merged tree can be written back to the same
//! path with its section comments intact.

mod defaults;
mod error;
mod loader;
mod merge;
mod paths;
mod types;
mod writer;


pub use error::ConfigError;
pub use types::Config;

use std::path::{Path, PathBuf};

/// Reads and writes one rc file.
///
/// Built once per process and handed to whatever needs configuration;
/// nothing here is cached globally.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    rc_path: PathBuf,
}

impl ConfigStore {
    /// Store for `$HOME/.config/ripe-atlas-tools/rc`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HomeNotSet`] if `HOME` is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::in_home(&paths::home_dir()?))
    }

    /// Store for the rc file under an explicit home directory.
    pub fn in_home(home: &Path) -> Self {
        Self::at(paths::rc_path_in(home))
    }

    /// Store for an rc file at an arbitrary path.
    pub fn at(rc_path: impl Into<PathBuf>) -> Self {
        Self {
            rc_path: rc_path.into(),
        }
    }

    pub fn rc_path(&self) -> &Path {
        &self.rc_path
    }
}
