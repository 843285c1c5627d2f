use std::path::{Path, PathBuf};

use tessera_ir::TypeNode;

use super::{MAX_DEPTH, parse_tree_with_limit};
use crate::{Error, Result};

/// A type tree file with both raw content and parsed roots.
#[derive(Debug)]
pub struct TypeTree {
    path: PathBuf,
    content: String,
    roots: Vec<TypeNode>,
}

impl TypeTree {
    /// Open and parse a type tree file with the default depth limit.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_limit(path, MAX_DEPTH)
    }

    /// Open and parse a type tree file.
    pub fn open_with_limit(path: impl AsRef<Path>, max_depth: usize) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let roots = parse_tree_with_limit(&content, &filename, max_depth)?;

        Ok(Self {
            path,
            content,
            roots,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed root nodes.
    pub fn roots(&self) -> &[TypeNode] {
        &self.roots
    }

    /// Total number of nodes across all roots.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(TypeNode::node_count).sum()
    }
}
