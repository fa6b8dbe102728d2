//! The compiled project model.

use indexmap::IndexMap;

use crate::ExecutionEnvironment;

/// The normalized result of compiling a literate build document.
///
/// Immutable once assembled. Map iteration follows construction order: the
/// build map mirrors the matrix, the task map mirrors the source document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectModel {
    /// The build matrix, in expansion order.
    pub environments: Vec<ExecutionEnvironment>,
    /// Build commands per environment, accumulated across build ids.
    pub build: IndexMap<ExecutionEnvironment, Vec<String>>,
    /// Named environment-agnostic tasks, in document order.
    pub tasks: IndexMap<String, Vec<String>>,
}

impl ProjectModel {
    /// The build commands for `environment`, if it is part of the matrix.
    pub fn build_commands(&self, environment: &ExecutionEnvironment) -> Option<&[String]> {
        self.build.get(environment).map(Vec::as_slice)
    }

    /// The commands of the task named `name`.
    pub fn task(&self, name: &str) -> Option<&[String]> {
        self.tasks.get(name).map(Vec::as_slice)
    }

    /// Whether the model defines neither build commands nor tasks.
    pub fn is_empty(&self) -> bool {
        self.build.values().all(Vec::is_empty) && self.tasks.is_empty()
    }
}
