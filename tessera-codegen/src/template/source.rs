use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Named raw-text resources holding template content.
pub trait TemplateSource {
    /// Load a resource by name. `None` means the resource is unavailable.
    fn load(&self, resource: &str) -> Option<String>;
}

/// Templates handed over by the host as an in-memory content set.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    resources: IndexMap<String, String>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, replacing any previous content with the same name.
    pub fn with(mut self, resource: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(resource, content);
        self
    }

    /// Add a resource, replacing any previous content with the same name.
    pub fn insert(&mut self, resource: impl Into<String>, content: impl Into<String>) {
        self.resources.insert(resource.into(), content.into());
    }
}

impl<K, V> FromIterator<(K, V)> for MemorySource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            resources: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl TemplateSource for MemorySource {
    fn load(&self, resource: &str) -> Option<String> {
        self.resources.get(resource).cloned()
    }
}

/// Templates stored as files in one directory, named by resource.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the template directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for DirectorySource {
    fn load(&self, resource: &str) -> Option<String> {
        let path = self.root.join(resource);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "loaded template");
                Some(content)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "template unavailable");
                None
            }
        }
    }
}
