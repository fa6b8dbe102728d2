//! Literate build document compilation.
//!
//! This crate turns a parsed document tree into a
//! [`ProjectModel`](litbuild_core::ProjectModel):
//! - `matrix` expands the environments section into the build matrix
//! - `envvars` merges declared variables into every environment
//! - `commands` extracts per-environment command lists
//! - `model` assembles the final model
//! - `yaml` locates and parses YAML marker documents
//! - `language` applies language-specific document decoration

pub mod commands;
pub mod envvars;
pub mod error;
pub mod language;
pub mod matrix;
pub mod model;
pub mod yaml;

pub use error::{ConfigError, ConfigResult};
pub use language::{LanguagePlugin, LanguageRegistry};
pub use model::ModelBuilder;
pub use yaml::{ModelRequest, load_project_model};
