#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn store_is_empty_outside_browser() {
    let store = LocalPreferenceStore;
    store.save("ocean");
    assert_eq!(store.load(), None);
    store.clear();
}

#[test]
fn system_scheme_defaults_to_light() {
    assert!(!MediaColorScheme.prefers_dark());
}

#[test]
fn browser_controller_loads_light_natively() {
    let mut controller = browser_controller();
    assert_eq!(controller.load_theme(), ThemeId::Light);
    assert_eq!(controller.apply_theme("dark", true), Some(ThemeId::Dark));
}

#[test]
fn watch_system_scheme_is_noop_but_callable() {
    watch_system_scheme(|_| {});
}
