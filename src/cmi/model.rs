use serde::{Deserialize, Serialize};

/// `entry` value of a learner's first attempt.
pub const ENTRY_AB_INITIO: &str = "ab-initio";

/// SCORM 1.2 `lesson_status` before any attempt.
pub const LESSON_NOT_ATTEMPTED: &str = "not attempted";

/// Normalized runtime learner state.
///
/// Every field is optional; absent input fields stay absent. A record is
/// built fresh from each payload and never merged with earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CmiRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_location: Option<String>,
    /// SCORM 1.2 combined status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_from_lms: Option<String>,
    /// SCORM 2004 completion axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_status: Option<String>,
    /// SCORM 2004 success axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_status: Option<String>,
    /// Copied verbatim, elements are not inspected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactions: Option<Vec<serde_json::Value>>,
    /// Copied verbatim, elements are not inspected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objectives: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Score {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaled: Option<f64>,
}

/// Raw duration strings as reported by the content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Time {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
}

impl CmiRecord {
    /// The record stored when a learner launches a SCO for the first time.
    pub fn first_launch(student_id: impl Into<String>) -> Self {
        Self {
            student_id: Some(student_id.into()),
            entry: Some(ENTRY_AB_INITIO.to_string()),
            lesson_status: Some(LESSON_NOT_ATTEMPTED.to_string()),
            ..Default::default()
        }
    }
}
