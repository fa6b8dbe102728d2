//! Environment matrix expansion.

use litbuild_core::{ExecutionEnvironment, Value};

/// Expand an `environments` section into the build matrix.
///
/// An absent section yields a single label-less default environment. A
/// mapping contributes one label dimension per nesting level: every entry's
/// key is prepended to each environment expanded from its value.
pub fn expand(section: Option<&Value>) -> Vec<ExecutionEnvironment> {
    expand_node(section, 0)
}

fn expand_node(value: Option<&Value>, depth: usize) -> Vec<ExecutionEnvironment> {
    match value {
        Some(Value::Mapping(map)) => {
            let mut environments = Vec::new();
            for (key, child) in map {
                for env in expand_node(Some(child), depth + 1) {
                    environments.push(env.with_leading_label(key.as_str()));
                }
            }
            environments
        }
        Some(Value::Sequence(list)) => expand_list(list, depth),
        Some(Value::Scalar(label)) => vec![ExecutionEnvironment::with_label(label.as_str())],
        None => vec![ExecutionEnvironment::default()],
    }
}

fn expand_list(list: &[Value], depth: usize) -> Vec<ExecutionEnvironment> {
    // Depth-sensitive: a flat list of strings at the top level is ONE
    // multi-label environment; the same list nested under a mapping key is a
    // set of single-label alternatives. An empty top-level list is vacuously
    // simple and yields one label-less environment.
    let mut simple = depth == 0;
    let mut labels = Vec::new();
    for element in list {
        match element {
            Value::Scalar(label) => labels.push(label.clone()),
            _ => simple = false,
        }
    }
    if simple {
        vec![ExecutionEnvironment::new(labels)]
    } else {
        expand_alternatives(list)
    }
}

fn expand_alternatives(list: &[Value]) -> Vec<ExecutionEnvironment> {
    let mut environments = Vec::new();
    for element in list {
        match element {
            Value::Scalar(label) => {
                environments.push(ExecutionEnvironment::with_label(label.as_str()));
            }
            Value::Sequence(labels) => {
                // One level only: nested sequences are label lists, not
                // re-expanded environment sections.
                environments.push(ExecutionEnvironment::new(
                    labels.iter().filter_map(Value::as_str),
                ));
            }
            Value::Mapping(_) => {}
        }
    }
    environments
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn labels(environments: &[ExecutionEnvironment]) -> Vec<Vec<String>> {
        environments.iter().map(|e| e.labels().to_vec()).collect()
    }

    #[test]
    fn test_absent_section_yields_default_environment() {
        let matrix = expand(None);
        assert_eq!(matrix.len(), 1);
        assert!(matrix[0].is_default());
    }

    #[test]
    fn test_scalar_yields_single_label() {
        let matrix = expand(Some(&Value::from("linux")));
        assert_eq!(labels(&matrix), vec![vec!["linux".to_string()]]);
    }

    #[test]
    fn test_flat_list_is_one_environment() {
        let section = Value::from(vec![Value::from("linux"), Value::from("jdk7")]);
        let matrix = expand(Some(&section));
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix[0].labels(), ["linux", "jdk7"]);
    }

    #[test]
    fn test_empty_list_is_vacuously_simple() {
        let matrix = expand(Some(&Value::Sequence(Vec::new())));
        assert_eq!(matrix.len(), 1);
        assert!(matrix[0].is_default());
    }

    #[test]
    fn test_list_of_lists_is_alternatives() {
        let section = Value::from(vec![
            Value::from(vec![Value::from("a"), Value::from("b")]),
            Value::from(vec![Value::from("c")]),
        ]);
        let matrix = expand(Some(&section));
        assert_eq!(
            labels(&matrix),
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string()]
            ]
        );
    }

    #[test]
    fn test_mixed_list_falls_through_to_alternatives() {
        let section = Value::from(vec![
            Value::from("solo"),
            Value::from(vec![Value::from("x"), Value::from("y")]),
        ]);
        let matrix = expand(Some(&section));
        assert_eq!(
            labels(&matrix),
            vec![
                vec!["solo".to_string()],
                vec!["x".to_string(), "y".to_string()]
            ]
        );
    }

    #[test]
    fn test_mapping_prepends_key_to_nested_list() {
        // Nested lists sit at depth 1, so [a, b] is two alternatives.
        let mut map = IndexMap::new();
        map.insert(
            "x".to_string(),
            Value::from(vec![Value::from("a"), Value::from("b")]),
        );
        let matrix = expand(Some(&Value::Mapping(map)));
        assert_eq!(
            labels(&matrix),
            vec![
                vec!["x".to_string(), "a".to_string()],
                vec!["x".to_string(), "b".to_string()]
            ]
        );
    }

    #[test]
    fn test_nested_mappings_add_label_dimensions() {
        let mut inner = IndexMap::new();
        inner.insert("os".to_string(), Value::from("linux"));
        let mut outer = IndexMap::new();
        outer.insert("ci".to_string(), Value::Mapping(inner));
        let matrix = expand(Some(&Value::Mapping(outer)));
        assert_eq!(
            labels(&matrix),
            vec![vec!["ci".to_string(), "os".to_string(), "linux".to_string()]]
        );
    }

    #[test]
    fn test_empty_mapping_yields_empty_matrix() {
        let matrix = expand(Some(&Value::Mapping(IndexMap::new())));
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_expansion_is_pure() {
        let section = Value::from(vec![Value::from("linux"), Value::from("jdk7")]);
        assert_eq!(expand(Some(&section)), expand(Some(&section)));
    }
}
