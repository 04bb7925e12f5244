//! Conversion of SCOs into course-module drafts for a host's course catalog.

use super::sco::Sco;
use serde::Serialize;

/// A course module to be created by the host from an imported SCO.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModuleDraft {
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    /// Position among the converted SCOs, contiguous from 0
    pub order_index: usize,
    pub scorm_sco_id: String,
    pub estimated_duration: Option<u32>,
    pub prerequisites: Option<Vec<String>>,
}

/// Turn SCOs into module drafts for `course_id`.
///
/// Unlike [`Sco::order_index`], the draft order is renumbered 0..n.
pub fn course_modules(scos: &[Sco], course_id: &str) -> Vec<CourseModuleDraft> {
    scos.iter()
        .enumerate()
        .map(|(index, sco)| CourseModuleDraft {
            course_id: course_id.to_string(),
            title: sco.title.clone(),
            description: format!("SCORM content: {}", sco.identifier),
            content: format!("SCORM SCO: {}", sco.launch_url),
            order_index: index,
            scorm_sco_id: sco.identifier.clone(),
            estimated_duration: None,
            prerequisites: None,
        })
        .collect()
}
