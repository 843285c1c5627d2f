//! Sinks that receive the assembled document.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};

use crate::document::GeneratedDocument;

/// Receives the output of a generation pass.
pub trait DocumentSink {
    /// Hand over the assembled document.
    fn emit(&mut self, document: &GeneratedDocument) -> Result<WriteResult>;
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// Content was written
    Written,
    /// The destination already held identical content
    Unchanged,
}

/// Writes the document to a file, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSink for FileSink {
    fn emit(&mut self, document: &GeneratedDocument) -> Result<WriteResult> {
        let existing = std::fs::read_to_string(&self.path).ok();
        if existing.as_deref() == Some(document.content.as_str()) {
            tracing::debug!(path = %self.path.display(), "output unchanged");
            return Ok(WriteResult::Unchanged);
        }

        write_file(&self.path, &document.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;
        tracing::info!(
            path = %self.path.display(),
            bytes = document.content.len(),
            "wrote document"
        );
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Keeps emitted documents in memory as `(name, content)` pairs.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    documents: Vec<(String, String)>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents emitted so far, in order.
    pub fn documents(&self) -> &[(String, String)] {
        &self.documents
    }
}

impl DocumentSink for MemorySink {
    fn emit(&mut self, document: &GeneratedDocument) -> Result<WriteResult> {
        self.documents
            .push((document.name.clone(), document.content.clone()));
        Ok(WriteResult::Written)
    }
}
