//! rc file operations behind the `ripe-atlas configure` subcommand family.

use anyhow::{Context, Result};
use colored::Colorize;
use serde_yaml::Value;

use super::ConfigureAction;
use crate::config::{Config, ConfigStore};

/// Dispatches a configure subcommand to its handler.
pub(crate) fn handle_configure(action: ConfigureAction) -> Result<()> {
    let store = ConfigStore::from_env()?;
    match action {
        ConfigureAction::Show { key, defaults } => {
            let config = if defaults {
                Config::defaults()
            } else {
                load(&store)?
            };
            if key.is_none() {
                println!("{} {}", "Config path:".bold(), store.rc_path().display());
                println!();
            }
            print!("{}", render_value(&config, key.as_deref())?);
            Ok(())
        }
        ConfigureAction::Path => {
            println!("{}", store.rc_path().display());
            Ok(())
        }
        ConfigureAction::Init { force } => {
            init(&store, force)?;
            println!("{} {}", "Wrote".green().bold(), store.rc_path().display());
            Ok(())
        }
        ConfigureAction::Set { assignments } => {
            let changed = set(&store, &assignments)?;
            for (key, value) in changed {
                println!("{} = {}", key.cyan(), value);
            }
            println!("{} {}", "Saved".green().bold(), store.rc_path().display());
            Ok(())
        }
    }
}

fn load(store: &ConfigStore) -> Result<Config> {
    tracing::debug!(path = %store.rc_path().display(), "loading configuration");
    Ok(store.load()?)
}

/// Renders the whole config, or the subtree/value at `key`, as YAML text.
fn render_value(config: &Config, key: Option<&str>) -> Result<String> {
    let Some(key) = key else {
        return Ok(config.to_yaml()?);
    };
    let value = config
        .lookup(key)
        .with_context(|| format!("Unknown config key '{}'", key))?;
    match value {
        Value::Mapping(section) => Ok(Config::from(section.clone()).to_yaml()?),
        other => Ok(serde_yaml::to_string(other)?),
    }
}

/// Writes the defaults to the rc file, refusing to clobber one unless `force`.
fn init(store: &ConfigStore, force: bool) -> Result<()> {
    let path = store.rc_path();
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }
    store
        .write(&Config::defaults())
        .with_context(|| format!("Failed to initialise {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote default configuration");
    Ok(())
}

/// Applies `KEY=VALUE` assignments to the merged config and saves it.
///
/// Nothing is written unless every assignment is valid.
fn set(store: &ConfigStore, assignments: &[String]) -> Result<Vec<(String, String)>> {
    let mut config = load(store)?;
    let mut changed = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let (key, value) = parse_assignment(assignment)?;
        let shown = serde_yaml::to_string(&value)?.trim_end().to_string();
        config
            .set(&key, value)
            .with_context(|| format!("Cannot set '{}'", key))?;
        changed.push((key, shown));
    }
    store.write(&config)?;
    tracing::info!(path = %store.rc_path().display(), count = changed.len(), "saved configuration");
    Ok(changed)
}

/// Splits `KEY=VALUE` and reads the value as YAML.
///
/// An empty value is the empty string; text YAML cannot read as a single
/// value is taken literally.
fn parse_assignment(assignment: &str) -> Result<(String, Value)> {
    let (key, raw) = assignment
        .split_once('=')
        .with_context(|| format!("Expected KEY=VALUE, got '{}'", assignment))?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("Missing key in '{}'", assignment);
    }

    let value = if raw.is_empty() {
        Value::from("")
    } else {
        match serde_yaml::from_str::<Value>(raw) {
            Ok(Value::Mapping(_)) => {
                anyhow::bail!("'{}' needs a single value, not a section", key)
            }
            Ok(Value::Null) if !matches!(raw.trim(), "~" | "null" | "Null" | "NULL") => {
                Value::from(raw)
            }
            Ok(value) => value,
            Err(_) => Value::from(raw),
        }
    };
    Ok((key.to_string(), value))
}
