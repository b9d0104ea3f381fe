//! Reading the rc file and merging it over the defaults.

use serde_yaml::{Mapping, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::error::ConfigError;
use super::types::Config;
use super::ConfigStore;

impl ConfigStore {
    /// Returns the defaults with the rc file merged on top.
    ///
    /// A missing, empty or comment-only rc file yields the pure defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read, is not valid YAML, or
    /// holds something other than a mapping at the top level.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let mut config = Config::defaults();
        if let Some(overrides) = self.read_overrides()? {
            config.merge(overrides);
        }
        Ok(config)
    }

    /// Reads the raw override tree, or `None` when there is nothing to apply.
    pub fn read_overrides(&self) -> Result<Option<Mapping>, ConfigError> {
        let contents = match fs::read_to_string(&self.rc_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.rc_path.clone(),
                    source,
                })
            }
        };
        parse_overrides(&self.rc_path, &contents)
    }
}

fn parse_overrides(path: &Path, contents: &str) -> Result<Option<Mapping>, ConfigError> {
    if !has_content(contents) {
        return Ok(None);
    }
    let parsed: Value = serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match parsed {
        Value::Null => Ok(None),
        Value::Mapping(tree) => Ok(Some(tree)),
        _ => Err(ConfigError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

/// True if anything besides blank lines, comments and document markers is present.
fn has_content(contents: &str) -> bool {
    contents.lines().map(str::trim).any(|line| {
        !line.is_empty() && !line.starts_with('#') && line != "---" && line != "..."
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines_are_not_content() {
        assert!(!has_content(""));
        assert!(!has_content("\n\t\n"));
        assert!(!has_content("---\n# only a note\n  # indented note\n...\n"));
        assert!(has_content("# note\nspecification:\n  af: 6\n"));
    }

    #[test]
    fn test_empty_mapping_parses_to_empty_override() {
        let parsed = parse_overrides(Path::new("rc"), "{}\n").unwrap();
        assert_eq!(parsed, Some(Mapping::new()));
    }

    #[test]
    fn test_scalar_document_is_rejected() {
        let err = parse_overrides(Path::new("rc"), "42\n").unwrap_err();
        assert!(matches!(err, ConfigError::NotAMapping { .. }));
    }
}
