//! The merged configuration tree and dotted-path access into it.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use super::defaults::default_tree;
use super::error::ConfigError;
use super::merge::deep_merge;

/// Merged configuration: the defaults with the user's rc file laid on top.
///
/// Sections are nested mappings keyed by strings such as
/// `specification.types.ping.packets`. Values keep whatever YAML type the
/// defaults or the rc file gave them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config(Mapping);

impl Config {
    /// Returns a fresh copy of the built-in defaults.
    pub fn defaults() -> Self {
        Self(default_tree())
    }

    /// Deep-merges `overrides` on top of this config.
    pub fn merge(&mut self, overrides: Mapping) {
        deep_merge(&mut self.0, overrides);
    }

    /// Looks up a dotted key such as `ripe-ncc.endpoint`.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let mut node = self.0.get(segments.next()?)?;
        for segment in segments {
            node = node.as_mapping()?.get(segment)?;
        }
        Some(node)
    }

    /// Replaces the value of an existing dotted key.
    ///
    /// Only keys already present in the tree can be set, and only when they
    /// hold a single value rather than a whole section.
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let (parents, leaf) = match key.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, key),
        };

        let mut section = &mut self.0;
        if let Some(parents) = parents {
            for segment in parents.split('.') {
                section = section
                    .get_mut(segment)
                    .and_then(Value::as_mapping_mut)
                    .ok_or_else(unknown)?;
            }
        }

        let slot = section.get_mut(leaf).ok_or_else(unknown)?;
        if slot.is_mapping() {
            return Err(ConfigError::NotALeaf(key.to_string()));
        }
        *slot = value;
        Ok(())
    }

    /// Serializes the tree as block-style YAML with keys sorted at every
    /// level, so the output does not depend on rc file ordering.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(&sorted(&self.0))?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl From<Mapping> for Config {
    fn from(tree: Mapping) -> Self {
        Self(tree)
    }
}

fn sorted(tree: &Mapping) -> Mapping {
    let mut entries: Vec<(&Value, &Value)> = tree.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.as_str().cmp(&b.as_str()));
    entries
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Mapping(nested) => Value::Mapping(sorted(nested)),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_nested_and_missing() {
        let config = Config::defaults();
        assert_eq!(
            config.lookup("specification.types.ping.size"),
            Some(&Value::from(48))
        );
        assert_eq!(
            config.lookup("ripe-ncc.endpoint"),
            Some(&Value::from("https://atlas.ripe.net"))
        );
        assert!(config.lookup("specification.types.http").is_none());
        assert!(config.lookup("specification.af.deeper").is_none());
        assert!(config.lookup("").is_none());
    }

    #[test]
    fn test_set_existing_leaf() {
        let mut config = Config::defaults();
        config
            .set("authorisation.create", Value::from("b2c3-key"))
            .unwrap();
        assert_eq!(
            config.lookup("authorisation.create"),
            Some(&Value::from("b2c3-key"))
        );
        assert_eq!(config.lookup("authorisation.fetch"), Some(&Value::from("")));
    }

    #[test]
    fn test_set_null_leaf() {
        let mut config = Config::defaults();
        config.set("specification.times.interval", Value::from(600)).unwrap();
        assert_eq!(
            config.lookup("specification.times.interval"),
            Some(&Value::from(600))
        );
    }

    #[test]
    fn test_set_rejects_unknown_and_sections() {
        let mut config = Config::defaults();
        assert!(matches!(
            config.set("authorisation.delete", Value::from("x")),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            config.set("specification.af.v6", Value::from(1)),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            config.set("specification.source", Value::from("WW")),
            Err(ConfigError::NotALeaf(_))
        ));
        assert_eq!(config, Config::defaults());
    }

    #[test]
    fn test_yaml_is_sorted_block_style() {
        let yaml = Config::defaults().to_yaml().unwrap();
        let top: Vec<&str> = yaml
            .lines()
            .filter(|line| !line.starts_with(' ') && !line.starts_with('-'))
            .collect();
        assert_eq!(top, ["authorisation:", "ripe-ncc:", "specification:"]);
        assert!(yaml.contains("  tags:\n"));
        assert!(!yaml.contains('{'));
        assert!(yaml.contains("        include:\n        - system-ipv4-works\n"));
    }
}
