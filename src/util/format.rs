//! Display formatting for dates and excerpts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const MINUTE_MS: f64 = 60_000.0;
const HOUR_MS: f64 = 3_600_000.0;
const DAY_MS: f64 = 86_400_000.0;
const WEEK_MS: f64 = 7.0 * DAY_MS;

/// Milliseconds since the Unix epoch from the browser clock.
#[allow(clippy::cast_precision_loss)]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        OffsetDateTime::now_utc().unix_timestamp_nanos() as f64 / 1_000_000.0
    }
}

/// Relative age of an RFC 3339 timestamp, falling back to `YYYY-MM-DD` after a week.
///
/// Unparsable input is returned unchanged.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn format_relative(created_at: &str, now_ms: f64) -> String {
    let Ok(at) = OffsetDateTime::parse(created_at, &Rfc3339) else {
        return created_at.to_owned();
    };
    let at_ms = at.unix_timestamp_nanos() as f64 / 1_000_000.0;
    let diff = now_ms - at_ms;

    if diff < MINUTE_MS {
        "just now".to_owned()
    } else if diff < HOUR_MS {
        ago((diff / MINUTE_MS) as u64, "minute")
    } else if diff < DAY_MS {
        ago((diff / HOUR_MS) as u64, "hour")
    } else if diff < WEEK_MS {
        ago((diff / DAY_MS) as u64, "day")
    } else {
        format!("{:04}-{:02}-{:02}", at.year(), u8::from(at.month()), at.day())
    }
}

fn ago(n: u64, unit: &str) -> String {
    if n == 1 { format!("1 {unit} ago") } else { format!("{n} {unit}s ago") }
}

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}
