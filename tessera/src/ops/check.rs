//! Check operation - render without writing, collecting diagnostics.

use eyre::{Context, Result};
use tessera_codegen::{Document, Severity};
use tessera_manifest::TypeTree;

use super::Project;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs a full pass in memory and reports every node that would be skipped.
pub fn check(project: &Project, tree: &TypeTree, dump: bool) -> Result<CheckReport> {
    let repo = project.repository();
    let document = Document::new(project.renderer(&repo))
        .assemble(tree.roots())
        .wrap_err("Failed to render type tree")?;

    let mut warnings = Vec::new();
    let mut infos = Vec::new();
    for diag in &document.diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!(
                "{} [{}]\n  --> {}",
                diag.message,
                diag.code.as_str(),
                loc
            ),
            None => format!("{} [{}]", diag.message, diag.code.as_str()),
        };
        match diag.severity {
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let tree_dump = if dump {
        let json = serde_json::to_string_pretty(tree.roots())
            .wrap_err("Failed to serialize type tree")?;
        Some(json)
    } else {
        None
    };

    Ok(CheckReport {
        input: tree.path().to_path_buf(),
        root_count: tree.roots().len(),
        node_count: tree.node_count(),
        warnings,
        infos,
        tree_dump,
    })
}
