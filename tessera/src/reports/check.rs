//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a dry generation pass.
#[derive(Debug)]
pub struct CheckReport {
    /// Type tree that was checked.
    pub input: PathBuf,
    /// Number of root nodes.
    pub root_count: usize,
    /// Number of nodes in the whole tree.
    pub node_count: usize,
    /// Warning messages (unavailable templates).
    pub warnings: Vec<String>,
    /// Info messages (unrecognized classifications).
    pub infos: Vec<String>,
    /// Normalized tree as JSON, if requested.
    pub tree_dump: Option<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        out.preformatted(&format!(
            "✓ {} is valid ({} roots, {} nodes)",
            self.input.display(),
            self.root_count,
            self.node_count
        ));

        if let Some(dump) = &self.tree_dump {
            out.newline();
            out.preformatted(dump);
        }
    }
}
