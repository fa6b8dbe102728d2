//! Environment variable section merging.

use std::collections::BTreeMap;

use litbuild_core::Value;

use crate::{ConfigError, ConfigResult};

/// Flatten an `env` section into a variable map.
///
/// Accepted shapes:
/// - a scalar of whitespace-separated `KEY=VALUE` tokens,
/// - a sequence of such scalars (later entries win on key collision),
/// - a mapping whose `global` entry holds either of the above.
///
/// An absent section, or any other shape, yields an empty map. A token
/// without `=`, or a non-string sequence entry, is a [`ConfigError::MalformedEnvSpec`].
pub fn merge(section: Option<&Value>) -> ConfigResult<BTreeMap<String, String>> {
    match section {
        Some(Value::Scalar(spec)) => parse_tokens(spec),
        Some(Value::Sequence(entries)) => parse_entries(entries),
        Some(Value::Mapping(map)) => match map.get("global") {
            Some(Value::Scalar(spec)) => parse_tokens(spec),
            Some(Value::Sequence(entries)) => parse_entries(entries),
            _ => Ok(BTreeMap::new()),
        },
        None => Ok(BTreeMap::new()),
    }
}

fn parse_entries(entries: &[Value]) -> ConfigResult<BTreeMap<String, String>> {
    let mut variables = BTreeMap::new();
    for entry in entries {
        let spec = entry.as_str().ok_or_else(|| {
            ConfigError::MalformedEnvSpec("environment list entries must be strings".to_string())
        })?;
        // extend: last write wins, in sequence order
        variables.extend(parse_tokens(spec)?);
    }
    Ok(variables)
}

fn parse_tokens(spec: &str) -> ConfigResult<BTreeMap<String, String>> {
    let mut variables = BTreeMap::new();
    for token in spec.split_whitespace() {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| ConfigError::MalformedEnvSpec(token.to_string()))?;
        variables.insert(key.to_string(), value.to_string());
    }
    Ok(variables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_scalar_spec() {
        let section = Value::from("A=1 B=2");
        let merged = merge(Some(&section)).unwrap();
        assert_eq!(merged, vars(&[("A", "1"), ("B", "2")]));
    }

    #[test]
    fn test_sequence_last_write_wins() {
        let section = Value::from(vec![Value::from("A=1 B=2"), Value::from("B=3 C=4")]);
        let merged = merge(Some(&section)).unwrap();
        assert_eq!(merged, vars(&[("A", "1"), ("B", "3"), ("C", "4")]));
    }

    #[test]
    fn test_global_subkey() {
        let mut map = IndexMap::new();
        map.insert("global".to_string(), Value::from("PATH=/opt/bin"));
        let merged = merge(Some(&Value::Mapping(map))).unwrap();
        assert_eq!(merged, vars(&[("PATH", "/opt/bin")]));
    }

    #[test]
    fn test_mapping_without_global_is_empty() {
        let mut map = IndexMap::new();
        map.insert("matrix".to_string(), Value::from("A=1"));
        let merged = merge(Some(&map.into())).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_absent_section_is_empty() {
        assert!(merge(None).unwrap().is_empty());
    }

    #[test]
    fn test_token_without_separator_is_rejected() {
        let section = Value::from("A=1 BROKEN");
        let err = merge(Some(&section)).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedEnvSpec(token) if token == "BROKEN"));
    }

    #[test]
    fn test_non_string_entry_is_rejected() {
        let section = Value::from(vec![Value::from(vec![Value::from("A=1")])]);
        assert!(matches!(
            merge(Some(&section)),
            Err(ConfigError::MalformedEnvSpec(_))
        ));
    }
}
