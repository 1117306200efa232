use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "one");
    let second = state.push(ToastKind::Success, "two");
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].message, "two");
}

#[test]
fn begin_hide_happens_once() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Warning, "careful");
    assert!(state.begin_hide(id));
    assert!(state.toasts[0].hiding);
    assert!(!state.begin_hide(id));
}

#[test]
fn begin_hide_unknown_id_is_false() {
    let mut state = ToastState::default();
    assert!(!state.begin_hide(42));
}

#[test]
fn remove_drops_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Error, "a");
    let b = state.push(ToastKind::Error, "b");
    state.remove(a);
    assert_eq!(state.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    state.remove(a);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn every_kind_has_icon_and_class() {
    for kind in [ToastKind::Success, ToastKind::Error, ToastKind::Warning, ToastKind::Info] {
        assert!(!kind.icon().is_empty());
        assert!(kind.class().starts_with("toast-"));
    }
}
