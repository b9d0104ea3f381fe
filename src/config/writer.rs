//! Writing a config back to the rc file with its section comments.
//!
//! YAML serialization drops comments, so the dump is dropped into a
//! template and a comment is put back in front of each known section
//! header line.

use regex::{NoExpand, Regex};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use super::error::ConfigError;
use super::types::Config;
use super::ConfigStore;
use crate::constants::TEMPLATE_PLACEHOLDER;

/// Template shipped with the binary.
pub const BASE_TEMPLATE: &str = include_str!("templates/base.yaml");

/// Header line patterns and the text each one is replaced with, applied in order.
const SECTION_COMMENTS: [(&str, &str); 4] = [
    (
        r"(?m)^ripe-ncc:$",
        "\n# Don't mess with these, or Bad Things may happen\nripe-ncc:",
    ),
    (r"(?m)^authorisation:$", "# Authorisation\nauthorisation:"),
    (
        r"(?m)^specification:$",
        "\n# Measurement Creation\nspecification:",
    ),
    (
        r"(?m)^  tags:$",
        "  # Tags added to probes selection\n  tags:",
    ),
];

impl ConfigStore {
    /// Writes `config` to the rc file using the bundled template.
    pub fn write(&self, config: &Config) -> Result<(), ConfigError> {
        self.write_with_template(config, BASE_TEMPLATE)
    }

    /// Writes `config` to the rc file using `template`, which must contain
    /// a `{payload}` placeholder.
    ///
    /// The rc file is replaced in one rename; on any failure the previous
    /// file is left untouched.
    pub fn write_with_template(&self, config: &Config, template: &str) -> Result<(), ConfigError> {
        let contents = render(config, template)?;
        replace_file(&self.rc_path, &contents)
    }
}

/// Renders the commented rc file text for `config`.
pub fn render(config: &Config, template: &str) -> Result<String, ConfigError> {
    if !template.contains(TEMPLATE_PLACEHOLDER) {
        return Err(ConfigError::MissingPlaceholder);
    }
    let payload = config.to_yaml()?;
    let mut text = template.replace(TEMPLATE_PLACEHOLDER, payload.trim_end());
    for (header, commented) in SECTION_COMMENTS {
        let pattern = Regex::new(header)?;
        text = pattern.replace_all(&text, NoExpand(commented)).into_owned();
    }
    Ok(text)
}

fn replace_file(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let write_error = |source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir).map_err(write_error)?;
    let mut staged = NamedTempFile::new_in(dir).map_err(write_error)?;
    staged.write_all(contents.as_bytes()).map_err(write_error)?;
    staged.as_file().sync_all().map_err(write_error)?;
    staged.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
