//! Core domain types for the litbuild literate build compiler.
//!
//! This crate contains:
//! - The generic document value tree
//! - Execution environments and the compiled project model
//! - The project repository abstraction (document source)
//! - Shared error types

pub mod environment;
pub mod error;
pub mod model;
pub mod repository;
pub mod value;

pub use environment::{CommandScope, ExecutionEnvironment};
pub use error::{Error, Result};
pub use model::ProjectModel;
pub use repository::{DirRepository, MemoryRepository, ProjectRepository};
pub use value::Value;
