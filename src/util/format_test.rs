use super::*;

const STAMP: &str = "2026-03-02T10:30:00Z";
// 2026-03-02T10:30:00Z in epoch milliseconds.
const STAMP_MS: f64 = 1_772_447_400_000.0;

// =============================================================
// format_relative
// =============================================================

#[test]
fn under_a_minute_is_just_now() {
    assert_eq!(format_relative(STAMP, STAMP_MS + 59_000.0), "just now");
}

#[test]
fn future_timestamps_are_just_now() {
    assert_eq!(format_relative(STAMP, STAMP_MS - 5_000.0), "just now");
}

#[test]
fn minutes_hours_and_days() {
    assert_eq!(format_relative(STAMP, STAMP_MS + 60_000.0), "1 minute ago");
    assert_eq!(format_relative(STAMP, STAMP_MS + 5.0 * 60_000.0), "5 minutes ago");
    assert_eq!(format_relative(STAMP, STAMP_MS + 2.0 * 3_600_000.0), "2 hours ago");
    assert_eq!(format_relative(STAMP, STAMP_MS + 3.0 * 86_400_000.0), "3 days ago");
}

#[test]
fn a_week_or_more_shows_the_date() {
    assert_eq!(format_relative(STAMP, STAMP_MS + 7.0 * 86_400_000.0), "2026-03-02");
}

#[test]
fn unparsable_input_is_returned_as_is() {
    assert_eq!(format_relative("yesterday", STAMP_MS), "yesterday");
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000.0);
}

// =============================================================
// truncate
// =============================================================

#[test]
fn short_text_is_untouched() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn long_text_gets_ellipsis() {
    assert_eq!(truncate("hello world", 5), "hello...");
}

#[test]
fn truncate_counts_characters_not_bytes() {
    assert_eq!(truncate("héllo wörld", 7), "héllo w...");
}
