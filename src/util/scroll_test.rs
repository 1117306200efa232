use super::*;

#[test]
fn reveal_threshold_is_strict() {
    assert!(should_reveal(0.0, 1000.0));
    assert!(should_reveal(879.0, 1000.0));
    assert!(!should_reveal(880.0, 1000.0));
    assert!(!should_reveal(1200.0, 1000.0));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_helpers_are_noops() {
    assert_eq!(scroll_y(), 0.0);
    assert!(heading_offsets(3).is_empty());
    scroll_to_top();
    scroll_into_view("heading-0");
    reveal_visible();
    schedule_reveal();
    lock_body_scroll(true);
}
