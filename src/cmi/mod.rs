//! CMI runtime data translation.
//!
//! Content running in a SCORM player reports learner state as loosely
//! shaped CMI payloads. This module turns one payload into a [`CmiRecord`],
//! derives the unified completion and success status, and projects the
//! fields a host stores per learner and SCO into a [`TrackingUpdate`].
//!
//! ```rust
//! use scorm_core::cmi::{CompletionStatus, TrackingUpdate};
//!
//! let payload = serde_json::json!({
//!     "lesson_status": "browsed",
//!     "time": { "session_time": "00:05:00" }
//! });
//! let update = TrackingUpdate::from_payload(&payload);
//!
//! assert_eq!(update.completion_status, Some(CompletionStatus::Incomplete));
//! assert_eq!(update.success_status, None);
//! assert_eq!(update.session_time, Some(300));
//! ```

mod duration;
mod model;
mod parse;
mod status;
mod tracking;

pub use duration::parse_duration_to_seconds;
pub use model::{CmiRecord, ENTRY_AB_INITIO, LESSON_NOT_ATTEMPTED, Score, Time};
pub use parse::parse_cmi;
pub use status::{
    CompletionStatus, SuccessStatus, extract_completion_status, extract_success_status,
};
pub use tracking::TrackingUpdate;
