//! Slack timestamp handling.
//!
//! Slack encodes timestamps as decimal strings of Unix seconds with a
//! microsecond fraction (`"1465244570.336841"`). Message `ts` values double
//! as message identifiers, so shapes keep them as strings and convert only
//! on request.

use chrono::{DateTime, Utc};

const NANOS_DIGITS: usize = 9;

/// Parses a Slack timestamp string into a UTC instant.
///
/// Returns `None` for empty or non-numeric input. Fractions longer than
/// nanosecond precision are truncated.
///
/// ```
/// use slackline_core::parse_slack_ts;
///
/// let ts = parse_slack_ts("1465244570.336841").unwrap();
/// assert_eq!(ts.timestamp(), 1_465_244_570);
/// assert_eq!(ts.timestamp_subsec_micros(), 336_841);
/// ```
pub fn parse_slack_ts(ts: &str) -> Option<DateTime<Utc>> {
    let (secs, fraction) = ts.split_once('.').unwrap_or((ts, ""));
    if secs.is_empty() || !is_digits(secs) || !is_digits(fraction) {
        return None;
    }

    let secs: i64 = secs.parse().ok()?;
    let nanos = if fraction.is_empty() {
        0
    } else {
        let digits = &fraction[..fraction.len().min(NANOS_DIGITS)];
        let scale = 10u32.pow((NANOS_DIGITS - digits.len()) as u32);
        digits.parse::<u32>().ok()? * scale
    };

    DateTime::from_timestamp(secs, nanos)
}

/// Formats an instant the way Slack does, with microsecond precision.
pub fn format_slack_ts(at: DateTime<Utc>) -> String {
    format!("{}.{:06}", at.timestamp(), at.timestamp_subsec_micros())
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
