//! Type description tree for the Tessera template generator.
//!
//! A generation pass consumes a list of root [`TypeNode`]s. Each node names
//! a [`Classification`] which selects the template that renders it; children
//! are rendered recursively and spliced into their parent's template.
//!
//! # Architecture
//!
//! ```text
//! context.json → tessera-manifest (parsing) → tessera-ir (TypeNode tree) → tessera-codegen
//! ```
//!
//! The tree is immutable input data: it is materialized once per pass and
//! nothing downstream mutates it.

mod classification;
mod node;

pub use classification::Classification;
pub use node::TypeNode;
