#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn show_toast_queues_message() {
    let toasts = RwSignal::new(ToastState::default());
    show_toast(toasts, ToastKind::Success, "Link copied");
    toasts.with_untracked(|t| {
        assert_eq!(t.toasts.len(), 1);
        assert_eq!(t.toasts[0].message, "Link copied");
        assert!(!t.toasts[0].hiding);
    });
}

#[test]
fn dismiss_removes_toast_without_timers() {
    let toasts = RwSignal::new(ToastState::default());
    show_toast(toasts, ToastKind::Info, "one");
    show_toast(toasts, ToastKind::Info, "two");
    let first = toasts.with_untracked(|t| t.toasts[0].id);
    dismiss_toast(toasts, first);
    toasts.with_untracked(|t| {
        assert_eq!(t.toasts.len(), 1);
        assert_eq!(t.toasts[0].message, "two");
    });
}

#[test]
fn dismiss_unknown_id_is_ignored() {
    let toasts = RwSignal::new(ToastState::default());
    dismiss_toast(toasts, 99);
    assert!(toasts.with_untracked(|t| t.toasts.is_empty()));
}
