//! YAML front-end: marker file resolution, parsing, and the end-to-end
//! model loading pipeline.

use indexmap::IndexMap;
use litbuild_core::{ProjectModel, ProjectRepository, Value};
use tracing::debug;

use crate::{ConfigError, ConfigResult, LanguageRegistry, ModelBuilder};

/// Configuration for one model-building request.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    /// Base name for the marker document (`.<base_name>.yml`).
    pub base_name: String,
    /// Top-level keys treated as build sections, in declaration order.
    pub build_ids: Vec<String>,
    /// Key of the environments section.
    pub environments_id: String,
    /// Key of the environment variables section.
    pub envvars_id: String,
}

impl Default for ModelRequest {
    fn default() -> Self {
        Self {
            base_name: "litbuild".to_string(),
            build_ids: vec!["build".to_string()],
            environments_id: "environments".to_string(),
            envvars_id: "env".to_string(),
        }
    }
}

impl ModelRequest {
    /// A request for `.<base_name>.yml` with default section keys.
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            ..Self::default()
        }
    }

    /// Replace the build ids from a comma/space-delimited list.
    pub fn with_build_id(mut self, spec: &str) -> Self {
        self.build_ids = spec
            .split([',', ' '])
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    /// The model builder configured by this request.
    pub fn builder(&self) -> ModelBuilder {
        ModelBuilder::new(
            self.build_ids.clone(),
            self.environments_id.as_str(),
            self.envvars_id.as_str(),
        )
    }
}

/// Candidate marker documents for `base_name`, most specific first.
pub fn marker_files(base_name: &str) -> Vec<String> {
    vec![format!(".{base_name}.yml"), ".travis.yml".to_string()]
}

/// Parse raw YAML bytes into a document value tree.
///
/// Booleans and numbers coerce to their string form; nulls, tagged values,
/// and non-stringifiable mapping keys are dropped. A document whose top
/// level vanishes entirely (e.g. an empty file) is malformed.
pub fn parse(bytes: &[u8]) -> ConfigResult<Value> {
    let raw: serde_yaml::Value = serde_yaml::from_slice(bytes)?;
    convert(raw).ok_or(ConfigError::MalformedDocument)
}

fn convert(value: serde_yaml::Value) -> Option<Value> {
    match value {
        serde_yaml::Value::Mapping(map) => {
            let mut entries = IndexMap::new();
            for (key, child) in map {
                let Some(key) = scalar_key(&key) else {
                    continue;
                };
                if let Some(converted) = convert(child) {
                    entries.insert(key, converted);
                }
            }
            Some(Value::Mapping(entries))
        }
        serde_yaml::Value::Sequence(elements) => Some(Value::Sequence(
            elements.into_iter().filter_map(convert).collect(),
        )),
        serde_yaml::Value::String(s) => Some(Value::Scalar(s)),
        serde_yaml::Value::Bool(b) => Some(Value::Scalar(b.to_string())),
        serde_yaml::Value::Number(n) => Some(Value::Scalar(n.to_string())),
        _ => None,
    }
}

fn scalar_key(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Locate, parse, decorate, and compile the marker document of `repository`.
///
/// Fails with [`ConfigError::ModelNotFound`] when no marker document exists.
pub fn load_project_model(
    request: &ModelRequest,
    repository: &dyn ProjectRepository,
    languages: &LanguageRegistry,
) -> ConfigResult<ProjectModel> {
    for name in marker_files(&request.base_name) {
        if !repository.is_file(&name) {
            continue;
        }
        debug!(file = %name, "Found literate marker document");
        let bytes = repository.get(&name)?;
        let document = parse(&bytes)?;
        let document = languages.decorate(document, repository)?;
        return request.builder().build(&document);
    }
    Err(ConfigError::ModelNotFound)
}
