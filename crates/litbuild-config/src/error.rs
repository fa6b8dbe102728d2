//! Document compilation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("document top level is not a mapping")]
    MalformedDocument,

    #[error("malformed environment variable spec: {0}")]
    MalformedEnvSpec(String),

    #[error("no literate marker document found")]
    ModelNotFound,

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("repository error: {0}")]
    Repository(#[from] litbuild_core::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
