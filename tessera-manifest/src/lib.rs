//! Type tree and configuration parsing for the Tessera template generator.
//!
//! - [`parse_tree`] / [`TypeTree`] read the JSON type description tree.
//! - [`ConfigFile`] reads `tessera.toml`.
//!
//! Every error is a [`miette::Diagnostic`] carrying the offending source, so
//! the host can print it with context. A malformed type tree is the one fatal
//! condition of a generation pass.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod tree;

pub use config::{CONFIG_FILE, Config, ConfigFile, GeneratorConfig, parse_config};
pub use error::{Error, Result, SourceContext};
pub use tree::{MAX_DEPTH, TypeTree, parse_tree, parse_tree_with_limit};
