//! Document assembly.
//!
//! The emitted document is a fixed scaffold around the rendered roots:
//!
//! ```text
//! using System;namespace SourceGenerator{<root 1><root 2>...}
//! ```
//!
//! Pieces are concatenated without separators or formatting.

use tessera_ir::TypeNode;

use crate::{
    diagnostic::Diagnostics,
    renderer::{RenderError, Renderer},
};

/// Import declaration opening the document.
pub const PRELUDE: &str = "using System;";
/// Namespace wrapping all generated types.
pub const NAMESPACE: &str = "SourceGenerator";
/// Opens the namespace block.
pub const BLOCK_OPEN: &str = "{";
/// Closes the namespace block.
pub const BLOCK_CLOSE: &str = "}";
/// Name the document is registered under.
pub const DOCUMENT_NAME: &str = "Source.cs";

/// The output of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    /// Name the document is registered under.
    pub name: String,
    /// The assembled text.
    pub content: String,
    /// Advisory notices raised while rendering.
    pub diagnostics: Diagnostics,
    /// Number of root nodes rendered.
    pub root_count: usize,
}

impl GeneratedDocument {
    /// Number of subtrees skipped for lack of a template.
    ///
    /// A skipped node takes its descendants with it; the whole subtree
    /// counts once.
    pub fn skipped_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Assembles a document from a list of root nodes.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    renderer: Renderer<'a>,
}

impl<'a> Document<'a> {
    /// Create an assembler rendering through `renderer`.
    pub fn new(renderer: Renderer<'a>) -> Self {
        Self { renderer }
    }

    /// Wrap an already rendered body in the document scaffold.
    pub fn scaffold(body: &str) -> String {
        let mut out = String::with_capacity(
            PRELUDE.len() + "namespace ".len() + NAMESPACE.len() + body.len() + 2,
        );
        out.push_str(PRELUDE);
        out.push_str("namespace ");
        out.push_str(NAMESPACE);
        out.push_str(BLOCK_OPEN);
        out.push_str(body);
        out.push_str(BLOCK_CLOSE);
        out
    }

    /// Render every root in order and wrap the result in the scaffold.
    ///
    /// An empty root list yields the bare scaffold.
    pub fn assemble(&self, roots: &[TypeNode]) -> Result<GeneratedDocument, RenderError> {
        let mut diagnostics = Diagnostics::new();
        let mut body = String::new();
        for root in roots {
            body.push_str(&self.renderer.render(root, &mut diagnostics)?);
        }

        tracing::debug!(
            roots = roots.len(),
            skipped = diagnostics.len(),
            bytes = body.len(),
            "document assembled"
        );

        Ok(GeneratedDocument {
            name: DOCUMENT_NAME.to_string(),
            content: Self::scaffold(&body),
            diagnostics,
            root_count: roots.len(),
        })
    }
}
