//! Runtime payload translation.
//!
//! Payloads come straight from content running in a browser and follow no
//! fixed schema. Unrecognized or oddly-shaped fields are dropped; parsing
//! never fails.

use super::model::{CmiRecord, Score, Time};
use serde_json::{Map, Value};

/// Translate a runtime payload into a [`CmiRecord`].
///
/// Text fields are kept when they are non-empty strings or numbers. Score
/// values accept JSON numbers and numeric strings. For `score` and `time`
/// the nested object wins field by field over the flat `score_raw`,
/// `session_time`, ... spellings.
pub fn parse_cmi(raw: &Value) -> CmiRecord {
    let Some(data) = raw.as_object() else {
        tracing::debug!("CMI payload is not an object, ignoring");
        return CmiRecord::default();
    };

    let text = |key: &str| data.get(key).and_then(text_value);

    CmiRecord {
        student_id: text("student_id"),
        student_name: text("student_name"),
        lesson_location: text("lesson_location"),
        lesson_status: text("lesson_status"),
        score: parse_score(data),
        time: parse_time(data),
        entry: text("entry"),
        exit: text("exit"),
        suspend_data: text("suspend_data"),
        launch_data: text("launch_data"),
        comments: text("comments"),
        comments_from_lms: text("comments_from_lms"),
        completion_status: text("completion_status"),
        success_status: text("success_status"),
        interactions: array_value(data.get("interactions")),
        objectives: array_value(data.get("objectives")),
    }
}

fn parse_score(data: &Map<String, Value>) -> Option<Score> {
    let nested = data.get("score").and_then(Value::as_object);
    let has_flat = ["score_raw", "score_min", "score_max", "score_scaled"]
        .iter()
        .any(|key| data.contains_key(*key));
    if nested.is_none() && !has_flat {
        return None;
    }

    let field = |name: &str, flat: &str| {
        nested
            .and_then(|score| score.get(name))
            .and_then(number_value)
            .or_else(|| data.get(flat).and_then(number_value))
    };

    Some(Score {
        raw: field("raw", "score_raw"),
        min: field("min", "score_min"),
        max: field("max", "score_max"),
        scaled: field("scaled", "score_scaled"),
    })
}

fn parse_time(data: &Map<String, Value>) -> Option<Time> {
    let nested = data.get("time").and_then(Value::as_object);
    let has_flat = data.contains_key("session_time") || data.contains_key("total_time");
    if nested.is_none() && !has_flat {
        return None;
    }

    let field = |name: &str| {
        nested
            .and_then(|time| time.get(name))
            .and_then(text_value)
            .or_else(|| data.get(name).and_then(text_value))
    };

    Some(Time {
        session_time: field("session_time"),
        total_time: field("total_time"),
    })
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn array_value(value: Option<&Value>) -> Option<Vec<Value>> {
    value.and_then(Value::as_array).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_fields_copied_when_present() {
        let record = parse_cmi(&json!({
            "student_id": "u-1",
            "lesson_location": "slide-4",
            "lesson_status": "incomplete",
            "suspend_data": "",
            "exit": null,
            "comments": 42,
            "unknown_field": "ignored"
        }));

        assert_eq!(record.student_id.as_deref(), Some("u-1"));
        assert_eq!(record.lesson_location.as_deref(), Some("slide-4"));
        assert_eq!(record.lesson_status.as_deref(), Some("incomplete"));
        assert_eq!(record.comments.as_deref(), Some("42"));
        assert!(record.suspend_data.is_none());
        assert!(record.exit.is_none());
        assert!(record.student_name.is_none());
        assert!(record.score.is_none());
        assert!(record.time.is_none());
    }

    #[test]
    fn test_nested_score_preferred_over_flat() {
        let record = parse_cmi(&json!({
            "score": {"raw": 85, "max": "100"},
            "score_raw": 10,
            "score_min": 0,
            "score_scaled": "0.85"
        }));
        let score = record.score.unwrap();
        assert_eq!(score.raw, Some(85.0));
        assert_eq!(score.min, Some(0.0));
        assert_eq!(score.max, Some(100.0));
        assert_eq!(score.scaled, Some(0.85));
    }

    #[test]
    fn test_flat_score_without_nested_object() {
        let record = parse_cmi(&json!({"score_raw": "72.5", "score_max": "not a number"}));
        let score = record.score.unwrap();
        assert_eq!(score.raw, Some(72.5));
        assert!(score.max.is_none());
        assert!(score.min.is_none());
    }

    #[test]
    fn test_time_nested_and_flat() {
        let record = parse_cmi(&json!({
            "time": {"session_time": "00:10:00"},
            "total_time": "01:00:00"
        }));
        let time = record.time.unwrap();
        assert_eq!(time.session_time.as_deref(), Some("00:10:00"));
        assert_eq!(time.total_time.as_deref(), Some("01:00:00"));
    }

    #[test]
    fn test_sequences_copied_verbatim() {
        let record = parse_cmi(&json!({
            "interactions": [{"id": "q1", "result": "correct"}, "odd"],
            "objectives": {"id": "not-a-list"}
        }));
        let interactions = record.interactions.unwrap();
        assert_eq!(interactions.len(), 2);
        assert_eq!(interactions[0]["id"], "q1");
        assert_eq!(interactions[1], "odd");
        assert!(record.objectives.is_none());
    }

    #[test]
    fn test_non_object_payload_yields_empty_record() {
        assert_eq!(parse_cmi(&json!("cmi")), CmiRecord::default());
        assert_eq!(parse_cmi(&json!([1, 2])), CmiRecord::default());
        assert_eq!(parse_cmi(&Value::Null), CmiRecord::default());
    }
}
