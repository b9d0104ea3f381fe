//! Built-in defaults for every setting the tools read.
//!
//! The tree is rebuilt on each call so callers always own an independent
//! copy they can merge into.

use serde_yaml::{Mapping, Value};

/// Measurement types that carry per-family tag filters.
const TAGGED_TYPES: [&str; 6] = ["ping", "traceroute", "dns", "ssl", "http", "ntp"];

/// Address families with their own tag filters.
const FAMILIES: [(&str, &str); 2] = [("ipv4", "system-ipv4-works"), ("ipv6", "system-ipv6-works")];

/// Builds the default configuration tree.
pub fn default_tree() -> Mapping {
    mapping([
        (
            "authorisation",
            map([("fetch", Value::from("")), ("create", Value::from(""))]),
        ),
        ("specification", specification()),
        (
            "ripe-ncc",
            map([
                ("endpoint", Value::from("https://atlas.ripe.net")),
                ("version", Value::from(0)),
            ]),
        ),
    ])
}

fn specification() -> Value {
    map([
        ("af", Value::from(4)),
        ("description", Value::from("")),
        (
            "source",
            map([
                ("type", Value::from("area")),
                ("value", Value::from("WW")),
                ("requested", Value::from(50)),
            ]),
        ),
        (
            "times",
            map([
                ("one-off", Value::from(true)),
                ("interval", Value::Null),
                ("start", Value::Null),
                ("stop", Value::Null),
            ]),
        ),
        ("types", measurement_types()),
        ("tags", tags()),
    ])
}

fn measurement_types() -> Value {
    map([
        (
            "ping",
            map([
                ("packets", Value::from(3)),
                ("packet-interval", Value::from(1000)),
                ("size", Value::from(48)),
            ]),
        ),
        (
            "traceroute",
            map([
                ("packets", Value::from(3)),
                ("size", Value::from(48)),
                ("protocol", Value::from("ICMP")),
                ("dont-fragment", Value::from(false)),
                ("paris", Value::from(0)),
                ("first-hop", Value::from(1)),
                ("max-hops", Value::from(255)),
                ("port", Value::from(80)),
                ("destination-option-size", Value::Null),
                ("hop-by-hop-option-size", Value::Null),
                ("timeout", Value::from(4000)),
            ]),
        ),
        ("ssl", map([("port", Value::from(443))])),
        (
            "ntp",
            map([("packets", Value::from(3)), ("timeout", Value::from(4000))]),
        ),
        (
            "dns",
            map([
                ("set-cd-bit", Value::from(false)),
                ("set-do-bit", Value::from(false)),
                ("protocol", Value::from("UDP")),
                ("query-class", Value::from("IN")),
                ("query-type", Value::from("A")),
                ("query-argument", Value::Null),
                ("set-nsid-bit", Value::from(false)),
                ("udp-payload-size", Value::from(512)),
                ("set-rd-bit", Value::from(true)),
                ("retry", Value::from(0)),
            ]),
        ),
    ])
}

fn tags() -> Value {
    let mut families = Mapping::new();
    for (family, works_tag) in FAMILIES {
        let mut per_type = Mapping::new();
        for kind in TAGGED_TYPES {
            per_type.insert(Value::from(kind), tag_filter(&[]));
        }
        per_type.insert(Value::from("all"), tag_filter(&[works_tag]));
        families.insert(Value::from(family), Value::Mapping(per_type));
    }
    Value::Mapping(families)
}

fn tag_filter(include: &[&str]) -> Value {
    let include = include.iter().map(|tag| Value::from(*tag)).collect();
    map([
        ("include", Value::Sequence(include)),
        ("exclude", Value::Sequence(Vec::new())),
    ])
}

fn mapping<const N: usize>(entries: [(&str, Value); N]) -> Mapping {
    entries
        .into_iter()
        .map(|(key, value)| (Value::from(key), value))
        .collect()
}

fn map<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Mapping(mapping(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at<'a>(tree: &'a Mapping, path: &[&str]) -> &'a Value {
        let (first, rest) = path.split_first().unwrap();
        rest.iter()
            .fold(&tree[*first], |node, key| &node[*key])
    }

    #[test]
    fn test_top_level_sections() {
        let tree = default_tree();
        let keys: Vec<&str> = tree.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, ["authorisation", "specification", "ripe-ncc"]);
    }

    #[test]
    fn test_measurement_defaults() {
        let tree = default_tree();
        assert_eq!(at(&tree, &["specification", "af"]), &Value::from(4));
        assert_eq!(
            at(&tree, &["specification", "types", "ping", "packets"]),
            &Value::from(3)
        );
        assert_eq!(
            at(&tree, &["specification", "types", "traceroute", "protocol"]),
            &Value::from("ICMP")
        );
        assert_eq!(
            at(&tree, &["specification", "types", "dns", "query-argument"]),
            &Value::Null
        );
        assert_eq!(
            at(&tree, &["specification", "times", "one-off"]),
            &Value::from(true)
        );
    }

    #[test]
    fn test_tag_filters_per_family() {
        let tree = default_tree();
        for (family, works_tag) in FAMILIES {
            let all = at(&tree, &["specification", "tags", family, "all"]);
            assert_eq!(all["include"], Value::Sequence(vec![Value::from(works_tag)]));
            assert_eq!(all["exclude"], Value::Sequence(Vec::new()));

            let per_type = at(&tree, &["specification", "tags", family])
                .as_mapping()
                .unwrap();
            assert_eq!(per_type.len(), TAGGED_TYPES.len() + 1);
        }
    }

    #[test]
    fn test_each_call_is_independent() {
        let mut first = default_tree();
        first.insert(Value::from("authorisation"), Value::Null);
        assert_ne!(first, default_tree());
    }
}
