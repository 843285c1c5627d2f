//! Kinds command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// A registered classification.
#[derive(Debug)]
pub struct KindInfo {
    pub classification: String,
    pub resource: String,
    /// Whether the template resource could be loaded.
    pub available: bool,
}

/// Report data listing registered classifications.
#[derive(Debug)]
pub struct KindsReport {
    /// Directory the templates were loaded from.
    pub templates_dir: PathBuf,
    pub kinds: Vec<KindInfo>,
}

impl Report for KindsReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Templates", &self.templates_dir.display().to_string());
        out.section(&format!("Classifications ({})", self.kinds.len()));
        for kind in &self.kinds {
            let line = format!("{} → {}", kind.classification, kind.resource);
            if kind.available {
                out.added_item(&line);
            } else {
                out.missing_item(&format!("{} (missing)", line));
            }
        }
    }
}
