//! Project repository abstraction: where literate documents are read from.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::{Error, Result};

/// Read-only access to the files of a project.
///
/// The compiler only ever needs to probe for a marker document and read it;
/// language plugins may probe for additional files (lockfiles, manifests).
pub trait ProjectRepository {
    /// Whether `name` exists as a file in the repository.
    fn is_file(&self, name: &str) -> bool;

    /// The contents of the file `name`.
    fn get(&self, name: &str) -> Result<Vec<u8>>;
}

/// A repository rooted at a local directory.
#[derive(Debug, Clone)]
pub struct DirRepository {
    root: PathBuf,
}

impl DirRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this repository reads from.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl ProjectRepository for DirRepository {
    fn is_file(&self, name: &str) -> bool {
        self.root.join(name).is_file()
    }

    fn get(&self, name: &str) -> Result<Vec<u8>> {
        Ok(std::fs::read(self.root.join(name))?)
    }
}

/// An in-memory repository, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), contents.into());
    }
}

impl ProjectRepository for MemoryRepository {
    fn is_file(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn get(&self, name: &str) -> Result<Vec<u8>> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }
}
