//! Unified completion and success status.
//!
//! SCORM 2004 reports two independent axes (`completion_status` and
//! `success_status`); SCORM 1.2 folds both into `lesson_status`. The
//! extractors below prefer the 2004 fields and derive from the 1.2 vocabulary
//! otherwise.

use super::model::CmiRecord;
use serde::{Serialize, Serializer};
use std::fmt;

/// Completion axis of a learner's progress.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompletionStatus {
    Completed,
    Incomplete,
    NotAttempted,
    Unknown,
    /// A value outside the SCORM vocabulary, kept as sent
    Other(String),
}

/// Success axis of a learner's progress.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SuccessStatus {
    Passed,
    Failed,
    Unknown,
    /// A value outside the SCORM vocabulary, kept as sent
    Other(String),
}

impl CompletionStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "completed" => Self::Completed,
            "incomplete" => Self::Incomplete,
            "not attempted" => Self::NotAttempted,
            "unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => "completed",
            Self::Incomplete => "incomplete",
            Self::NotAttempted => "not attempted",
            Self::Unknown => "unknown",
            Self::Other(value) => value,
        }
    }
}

impl SuccessStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "passed" => Self::Passed,
            "failed" => Self::Failed,
            "unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SuccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CompletionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for SuccessStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Derive the completion status of a record.
///
/// `failed` carries no completion signal and maps to `None`.
pub fn extract_completion_status(cmi: &CmiRecord) -> Option<CompletionStatus> {
    if let Some(status) = cmi.completion_status.as_deref() {
        return Some(CompletionStatus::parse(status));
    }

    match cmi.lesson_status.as_deref()? {
        "passed" | "completed" => Some(CompletionStatus::Completed),
        "incomplete" | "browsed" => Some(CompletionStatus::Incomplete),
        "not attempted" => Some(CompletionStatus::NotAttempted),
        _ => None,
    }
}

/// Derive the success status of a record.
pub fn extract_success_status(cmi: &CmiRecord) -> Option<SuccessStatus> {
    if let Some(status) = cmi.success_status.as_deref() {
        return Some(SuccessStatus::parse(status));
    }

    match cmi.lesson_status.as_deref()? {
        "passed" => Some(SuccessStatus::Passed),
        "failed" => Some(SuccessStatus::Failed),
        _ => None,
    }
}
