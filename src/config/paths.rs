//! Path resolution for the rc file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::constants::{APP_NAME, HOME_ENV, RC_FILENAME};

/// Returns `<home>/.config/ripe-atlas-tools`.
pub fn config_dir_in(home: &Path) -> PathBuf {
    home.join(".config").join(APP_NAME)
}

/// Returns `<home>/.config/ripe-atlas-tools/rc`.
pub fn rc_path_in(home: &Path) -> PathBuf {
    config_dir_in(home).join(RC_FILENAME)
}

/// Reads `HOME` verbatim. An unset or empty value is an error.
pub(super) fn home_dir() -> Result<PathBuf, ConfigError> {
    home_from(std::env::var_os(HOME_ENV))
}

fn home_from(value: Option<OsString>) -> Result<PathBuf, ConfigError> {
    match value {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
        _ => Err(ConfigError::HomeNotSet),
    }
}
