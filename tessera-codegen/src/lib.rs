//! Template rendering and document assembly for the Tessera template generator.
//!
//! # Module Organization
//!
//! - [`template`] - Template sources, the classification registry and the repository
//! - [`placeholder`] - Literal `{Name}` / `{Type}` / `{Children}` substitution
//! - [`renderer`] - Recursive rendering of one type node and its subtree
//! - [`document`] - The fixed document scaffold around all rendered roots
//! - [`diagnostic`] - Advisory notices collected during a pass
//! - [`output`] - Sinks that receive the assembled document

pub mod diagnostic;
pub mod document;
pub mod output;
pub mod placeholder;
pub mod renderer;
pub mod template;

pub use diagnostic::{Diagnostic, DiagnosticCode, Diagnostics, Severity};
pub use document::{Document, GeneratedDocument};
pub use output::{DocumentSink, FileSink, MemorySink, WriteResult};
pub use renderer::{RenderError, Renderer};
pub use template::{
    DirectorySource, Lookup, MemorySource, TemplateKinds, TemplateRepository, TemplateSource,
};
