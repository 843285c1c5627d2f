//! Core operations.
//!
//! This module contains the generation logic behind tessera commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod kinds;
mod project;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use kinds::kinds;
pub use project::Project;
