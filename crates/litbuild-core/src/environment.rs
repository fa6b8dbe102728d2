//! Execution environments: the points of the build matrix.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};

/// One point in the build matrix.
///
/// An environment is identified by its labels (e.g. platform or language
/// version tags) plus the environment variables attached to it. Label order
/// reflects declaration order and is kept for display, but equality and
/// hashing treat labels as a set: `[linux, jdk7]` and `[jdk7, linux]` name
/// the same environment when merging per-environment command lists.
///
/// Environments are built once by matrix expansion, decorated once with
/// variables, and immutable from then on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionEnvironment {
    labels: Vec<String>,
    variables: BTreeMap<String, String>,
}

impl ExecutionEnvironment {
    /// An environment with the given labels and no variables.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            variables: BTreeMap::new(),
        }
    }

    /// An environment with a single label.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self::new([label.into()])
    }

    /// The labels, in declaration order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The attached environment variables.
    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }

    /// Whether this is the label-less default environment.
    pub fn is_default(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether one of this environment's labels is `label`.
    pub fn matches(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// A copy of this environment with `label` prepended to its labels.
    pub fn with_leading_label(&self, label: impl Into<String>) -> Self {
        let mut labels = Vec::with_capacity(self.labels.len() + 1);
        labels.push(label.into());
        labels.extend(self.labels.iter().cloned());
        Self {
            labels,
            variables: self.variables.clone(),
        }
    }

    /// A copy of this environment carrying `variables`.
    pub fn with_variables(&self, variables: BTreeMap<String, String>) -> Self {
        Self {
            labels: self.labels.clone(),
            variables,
        }
    }

    fn label_set(&self) -> BTreeSet<&str> {
        self.labels.iter().map(String::as_str).collect()
    }
}

impl PartialEq for ExecutionEnvironment {
    fn eq(&self, other: &Self) -> bool {
        self.label_set() == other.label_set() && self.variables == other.variables
    }
}

impl Eq for ExecutionEnvironment {}

impl Hash for ExecutionEnvironment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with Eq: order-insensitive over labels.
        for label in self.label_set() {
            label.hash(state);
        }
        for (key, value) in &self.variables {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl std::fmt::Display for ExecutionEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.labels.is_empty() {
            write!(f, "[default]")
        } else {
            write!(f, "[{}]", self.labels.join(", "))
        }
    }
}

/// Which environment a command section is being resolved for.
///
/// The wildcard is used when extracting task commands: tasks are not tied to
/// a concrete environment, so environment-keyed (mapping-shaped) command
/// sections do not apply to them and are dropped.
#[derive(Debug, Clone, Copy)]
pub enum CommandScope<'a> {
    /// No concrete environment; mapping-shaped sections contribute nothing.
    Any,
    /// Resolve against this environment's labels.
    Env(&'a ExecutionEnvironment),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(env: &ExecutionEnvironment) -> u64 {
        let mut hasher = DefaultHasher::new();
        env.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality_ignores_label_order() {
        let a = ExecutionEnvironment::new(["linux", "jdk7"]);
        let b = ExecutionEnvironment::new(["jdk7", "linux"]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_equality_considers_variables() {
        let plain = ExecutionEnvironment::with_label("linux");
        let vars = BTreeMap::from([("CC".to_string(), "gcc".to_string())]);
        let decorated = plain.with_variables(vars);
        assert_ne!(plain, decorated);
    }

    #[test]
    fn test_leading_label_preserves_order() {
        let env = ExecutionEnvironment::new(["a", "b"]).with_leading_label("x");
        assert_eq!(env.labels(), ["x", "a", "b"]);
    }

    #[test]
    fn test_matches() {
        let env = ExecutionEnvironment::new(["linux", "rust"]);
        assert!(env.matches("rust"));
        assert!(!env.matches("windows"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ExecutionEnvironment::default().to_string(), "[default]");
        assert_eq!(
            ExecutionEnvironment::new(["linux", "jdk7"]).to_string(),
            "[linux, jdk7]"
        );
    }
}
