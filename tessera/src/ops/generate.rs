//! Generate operation - one full generation pass.

use std::path::Path;

use eyre::{Context, Result};
use tessera_codegen::{Document, DocumentSink, FileSink};
use tessera_manifest::TypeTree;

use super::Project;
use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Where to write the document.
    pub output: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Renders every root of the tree, wraps the result in the document scaffold
/// and hands it to a file sink (or returns it for preview).
pub fn generate(
    project: &Project,
    tree: &TypeTree,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let repo = project.repository();
    let document = Document::new(project.renderer(&repo))
        .assemble(tree.roots())
        .wrap_err("Failed to render type tree")?;

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            name: document.name.clone(),
            content: document.content.clone(),
        })
    } else {
        let mut sink = FileSink::new(opts.output);
        let write = sink.emit(&document)?;
        GenerationResult::Written(WrittenResult {
            path: sink.path().to_path_buf(),
            write,
        })
    };

    tracing::info!(
        roots = document.root_count,
        skipped = document.skipped_count(),
        "generation pass complete"
    );

    Ok(GenerateReport {
        input: tree.path().to_path_buf(),
        root_count: document.root_count,
        node_count: tree.node_count(),
        skipped_count: document.skipped_count(),
        warnings: document
            .diagnostics
            .warnings()
            .map(|diag| match &diag.location {
                Some(loc) => format!("{} (at {})", diag.message, loc),
                None => diag.message.clone(),
            })
            .collect(),
        result,
    })
}
