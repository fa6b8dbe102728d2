//! Model assembly: document tree → [`ProjectModel`].

use std::collections::HashSet;

use indexmap::IndexMap;
use litbuild_core::{CommandScope, ExecutionEnvironment, ProjectModel, Value};

use crate::{ConfigError, ConfigResult, commands, envvars, matrix};

/// Assembles a [`ProjectModel`] from a parsed literate build document.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    build_ids: Vec<String>,
    environments_id: String,
    envvars_id: String,
}

impl ModelBuilder {
    /// A builder recognizing `build_ids` as build sections, with the given
    /// environments and envvars section keys.
    pub fn new(
        build_ids: Vec<String>,
        environments_id: impl Into<String>,
        envvars_id: impl Into<String>,
    ) -> Self {
        Self {
            build_ids,
            environments_id: environments_id.into(),
            envvars_id: envvars_id.into(),
        }
    }

    /// Compile `document` into a project model.
    ///
    /// Fails with [`ConfigError::MalformedDocument`] when the top level is
    /// not a mapping; no partial model is ever returned.
    pub fn build(&self, document: &Value) -> ConfigResult<ProjectModel> {
        let Some(entries) = document.as_mapping() else {
            return Err(ConfigError::MalformedDocument);
        };

        let variables = envvars::merge(entries.get(self.envvars_id.as_str()))?;
        let environments: Vec<ExecutionEnvironment> =
            matrix::expand(entries.get(self.environments_id.as_str()))
                .iter()
                .map(|env| env.with_variables(variables.clone()))
                .collect();

        // Explicit fold: every matrix environment is a key up front, so the
        // build map's key set always equals the matrix.
        let mut build: IndexMap<ExecutionEnvironment, Vec<String>> = environments
            .iter()
            .map(|env| (env.clone(), Vec::new()))
            .collect();
        for build_id in &self.build_ids {
            let Some(section) = entries.get(build_id.as_str()) else {
                continue;
            };
            for environment in &environments {
                let extracted = commands::extract(section, CommandScope::Env(environment));
                if let Some(list) = build.get_mut(environment) {
                    list.extend(extracted);
                }
            }
        }

        // Everything that is not a build section becomes a task, resolved
        // without an environment context.
        let build_ids: HashSet<&str> = self.build_ids.iter().map(String::as_str).collect();
        let mut tasks = IndexMap::new();
        for (name, section) in entries {
            if build_ids.contains(name.as_str()) {
                continue;
            }
            tasks.insert(
                name.clone(),
                commands::extract(section, CommandScope::Any),
            );
        }

        Ok(ProjectModel {
            environments,
            build,
            tasks,
        })
    }
}
