use super::duration::parse_duration_to_seconds;
use super::model::CmiRecord;
use super::parse::parse_cmi;
use super::status::{
    CompletionStatus, SuccessStatus, extract_completion_status, extract_success_status,
};
use serde::Serialize;

/// Tracking fields a host persists for one learner and SCO.
///
/// Derived from a single [`CmiRecord`]; merging with earlier updates is the
/// host's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingUpdate {
    pub completion_status: Option<CompletionStatus>,
    pub success_status: Option<SuccessStatus>,
    /// Decimal rendering of `score.scaled`
    pub score_scaled: Option<String>,
    pub score_raw: Option<f64>,
    pub score_min: Option<f64>,
    pub score_max: Option<f64>,
    /// Seconds; `Some` whenever a session time string was reported
    pub session_time: Option<i64>,
    pub total_time: Option<i64>,
    pub location: Option<String>,
    pub suspend_data: Option<String>,
    pub cmi_data: CmiRecord,
}

impl TrackingUpdate {
    pub fn from_cmi(cmi: CmiRecord) -> Self {
        let score = cmi.score.unwrap_or_default();
        let time = cmi.time.clone().unwrap_or_default();

        Self {
            completion_status: extract_completion_status(&cmi),
            success_status: extract_success_status(&cmi),
            score_scaled: score.scaled.map(|scaled| scaled.to_string()),
            score_raw: score.raw,
            score_min: score.min,
            score_max: score.max,
            session_time: time.session_time.as_deref().map(parse_duration_to_seconds),
            total_time: time.total_time.as_deref().map(parse_duration_to_seconds),
            location: cmi.lesson_location.clone(),
            suspend_data: cmi.suspend_data.clone(),
            cmi_data: cmi,
        }
    }

    /// Parse a runtime payload and derive its update.
    #[inline]
    pub fn from_payload(raw: &serde_json::Value) -> Self {
        Self::from_cmi(parse_cmi(raw))
    }

    /// Update stored on a learner's first launch of a SCO.
    #[inline]
    pub fn first_launch(student_id: impl Into<String>) -> Self {
        Self::from_cmi(CmiRecord::first_launch(student_id))
    }
}
