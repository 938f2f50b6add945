use chrono::{DateTime, NaiveDateTime, Utc};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const RFC1123_NO_ZONE: &str = "%d %b %Y %H:%M:%S";

/// Parses an RFC-1123 timestamp such as `Mon, 02 Jan 2006 15:04:05 MST`.
///
/// The weekday must be a valid abbreviation but need not agree with the
/// date. Numeric offsets and the RFC-822 zone names are honoured. Any other
/// zone abbreviation is read as UTC.
pub fn parse_rfc1123(value: &str) -> Option<DateTime<Utc>> {
    let (weekday, rest) = value.trim().split_once(", ")?;
    if !WEEKDAYS.contains(&weekday) {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(rest) {
        return Some(parsed.with_timezone(&Utc));
    }

    let (stamp, zone) = rest.rsplit_once(' ')?;
    if zone.is_empty() || !zone.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    NaiveDateTime::parse_from_str(stamp, RFC1123_NO_ZONE)
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%a, %d %b %Y %H:%M:%S UTC").to_string()
}

pub fn short_date(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}
