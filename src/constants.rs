//! Centralized constants for ripe-atlas.
//!
//! Names, filenames and environment variables live here so they can be
//! changed in one place.

/// Directory name under `~/.config` holding the rc file.
pub const APP_NAME: &str = "ripe-atlas-tools";

/// Name of the user override file.
pub const RC_FILENAME: &str = "rc";

/// Placeholder in the rc template replaced by the serialized config.
pub const TEMPLATE_PLACEHOLDER: &str = "{payload}";

/// Environment variable holding the home directory.
pub const HOME_ENV: &str = "HOME";

/// Environment variable overriding the log filter (e.g. `debug`).
pub const LOG_ENV: &str = "RIPE_ATLAS_LOG";
