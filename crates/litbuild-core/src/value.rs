//! The generic document value tree.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node in a raw literate build document.
///
/// Produced by a document front-end (YAML today, Markdown later) and consumed
/// read-only by the compiler. Only three shapes exist: string-keyed mappings,
/// ordered sequences, and scalar strings. Front-ends are responsible for
/// reducing everything else to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A string-keyed mapping. Entry order follows the source document.
    Mapping(IndexMap<String, Value>),
    /// An ordered sequence of values.
    Sequence(Vec<Value>),
    /// A scalar string.
    Scalar(String),
}

impl Value {
    /// The scalar string, if this value is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// The mapping entries, if this value is a mapping.
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// The sequence elements, if this value is a sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(seq: Vec<Value>) -> Self {
        Value::Sequence(seq)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Mapping(map)
    }
}
