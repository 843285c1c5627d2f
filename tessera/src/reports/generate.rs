//! Generate command report data structures.

use std::path::PathBuf;

use tessera_codegen::WriteResult;

use super::output::{Output, Report};

/// Report data from a generation pass.
#[derive(Debug)]
pub struct GenerateReport {
    /// Type tree the pass read.
    pub input: PathBuf,
    /// Number of root nodes.
    pub root_count: usize,
    /// Number of nodes in the whole tree.
    pub node_count: usize,
    /// Number of subtrees skipped for lack of a template.
    pub skipped_count: usize,
    /// Warning messages from rendering.
    pub warnings: Vec<String>,
    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of the generation pass.
#[derive(Debug)]
pub enum GenerationResult {
    /// The document was handed to the file sink.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when the document was written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output path.
    pub path: PathBuf,
    /// Whether the file changed.
    pub write: WriteResult,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Document name.
    pub name: String,
    /// Document content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => {
                out.divider(&preview.name);
                out.preformatted(&preview.content);
                out.divider("Summary");
                self.render_counts(out);
            }
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Input", &self.input.display().to_string());
        self.render_counts(out);
        out.newline();

        let path = written.path.display().to_string();
        match written.write {
            WriteResult::Written => out.added_item(&path),
            WriteResult::Unchanged => out.list_item(&format!("{} (unchanged)", path)),
        }
    }

    fn render_counts(&self, out: &mut dyn Output) {
        out.key_value(
            "Types",
            &format!(
                "{} root{}, {} node{}",
                self.root_count,
                plural(self.root_count),
                self.node_count,
                plural(self.node_count)
            ),
        );
        if self.skipped_count > 0 {
            out.key_value("Skipped subtrees", &self.skipped_count.to_string());
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
