//! Template lookup by classification.
//!
//! ```text
//! classification ─(TemplateKinds)→ resource name ─(TemplateSource)→ template text
//! ```
//!
//! [`TemplateRepository`] bulk-loads every registered resource up front, so
//! lookups during rendering never touch the source again.

mod kinds;
mod repository;
mod source;

pub use kinds::TemplateKinds;
pub use repository::{Lookup, TemplateRepository};
pub use source::{DirectorySource, MemorySource, TemplateSource};
