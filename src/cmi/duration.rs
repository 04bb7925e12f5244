//! `HH:MM:SS[.frac]` duration parsing.
//!
//! Each field is read as a numeric prefix (`"5min"` reads as 5) and an
//! unreadable field counts as 0. SCORM 2004 ISO-8601 durations
//! (`PT1H2M3S`) are not understood and yield 0.

/// Convert a colon-separated duration to whole seconds.
///
/// Anything other than exactly three fields yields 0. The sum is floored.
///
/// ```rust
/// use scorm_core::cmi::parse_duration_to_seconds;
///
/// assert_eq!(parse_duration_to_seconds("01:02:03.50"), 3723);
/// assert_eq!(parse_duration_to_seconds("aa:02:03"), 123);
/// assert_eq!(parse_duration_to_seconds("bad"), 0);
/// ```
pub fn parse_duration_to_seconds(text: &str) -> i64 {
    let mut fields = text.split(':');
    let (Some(hours), Some(minutes), Some(seconds), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return 0;
    };

    let hours = leading_integer(hours).unwrap_or(0.0);
    let minutes = leading_integer(minutes).unwrap_or(0.0);
    let seconds = leading_decimal(seconds).unwrap_or(0.0);

    let total = (hours * 3600.0 + minutes * 60.0 + seconds).floor();
    if total.is_finite() { total as i64 } else { 0 }
}

/// Length of an optional sign followed by at least one digit.
fn signed_digits(bytes: &[u8]) -> usize {
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    sign + bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count()
}

fn leading_integer(field: &str) -> Option<f64> {
    let field = field.trim_start();
    let end = signed_digits(field.as_bytes());
    field[..end].parse::<f64>().ok()
}

fn leading_decimal(field: &str) -> Option<f64> {
    let field = field.trim_start();
    let bytes = field.as_bytes();

    let mut end = signed_digits(bytes);
    if bytes.get(end) == Some(&b'.') {
        end += 1 + bytes[end + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exponent = signed_digits(&bytes[end + 1..]);
        if bytes[end + 1..end + 1 + exponent].iter().any(u8::is_ascii_digit) {
            end += 1 + exponent;
        }
    }
    field[..end].parse::<f64>().ok()
}
