//! Language plugins: document decoration before model assembly.

use litbuild_core::{ProjectRepository, Value};
use tracing::debug;

use crate::ConfigResult;

/// The top-level key naming the project language.
pub const LANGUAGE_ID: &str = "language";

/// A language-specific document rewriter.
///
/// Plugins inject the conventions of a language ecosystem — default build
/// commands, toolchain environments — by rewriting the raw document before
/// model assembly. They may probe the repository for additional files
/// (manifests, lockfiles) to decide what to inject.
pub trait LanguagePlugin {
    /// Language names this plugin handles.
    fn supported(&self) -> &[&str];

    /// Rewrite `document`, reading extra project files as needed.
    fn decorate(
        &self,
        document: Value,
        repository: &dyn ProjectRepository,
    ) -> ConfigResult<Value>;
}

/// An ordered set of language plugins, resolved by a single linear scan.
#[derive(Default)]
pub struct LanguageRegistry {
    plugins: Vec<Box<dyn LanguagePlugin>>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin. Earlier registrations win when languages overlap.
    pub fn register(&mut self, plugin: Box<dyn LanguagePlugin>) {
        self.plugins.push(plugin);
    }

    /// Apply the first plugin supporting the document's `language` entry.
    ///
    /// Applied at most once; documents without a recognized language pass
    /// through unchanged.
    pub fn decorate(
        &self,
        document: Value,
        repository: &dyn ProjectRepository,
    ) -> ConfigResult<Value> {
        let language = document
            .as_mapping()
            .and_then(|entries| entries.get(LANGUAGE_ID))
            .and_then(Value::as_str)
            .map(str::to_string);
        let Some(language) = language else {
            return Ok(document);
        };

        for plugin in &self.plugins {
            if plugin.supported().contains(&language.as_str()) {
                debug!(language = %language, "Decorating document with language plugin");
                return plugin.decorate(document, repository);
            }
        }
        Ok(document)
    }
}

impl std::fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("plugins", &self.plugins.len())
            .finish()
    }
}
