//! Deep merge of an override tree onto a base tree.

use serde_yaml::{Mapping, Value};

/// Merges `overrides` into `base`, key by key.
///
/// Nested mappings are merged recursively so siblings the override does not
/// mention are kept. Any other override value replaces the base value at
/// that key outright, whatever its type. A mapping override for a key whose
/// base value is not a mapping starts from an empty mapping.
pub fn deep_merge(base: &mut Mapping, overrides: Mapping) {
    for (key, value) in overrides {
        match value {
            Value::Mapping(nested) => match base.get_mut(&key) {
                Some(Value::Mapping(existing)) => deep_merge(existing, nested),
                _ => {
                    let mut fresh = Mapping::new();
                    deep_merge(&mut fresh, nested);
                    base.insert(key, Value::Mapping(fresh));
                }
            },
            leaf => {
                base.insert(key, leaf);
            }
        }
    }
}
