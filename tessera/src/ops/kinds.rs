//! Kinds operation - registered classifications and template availability.

use super::Project;
use crate::reports::{KindInfo, KindsReport};

/// Execute the kinds operation.
pub fn kinds(project: &Project) -> KindsReport {
    let repo = project.repository();
    let kinds = repo
        .kinds()
        .iter()
        .map(|(classification, resource)| KindInfo {
            classification: classification.to_string(),
            resource: resource.to_string(),
            available: repo.lookup_text(classification).is_some(),
        })
        .collect();

    KindsReport {
        templates_dir: project.templates_dir().to_path_buf(),
        kinds,
    }
}
