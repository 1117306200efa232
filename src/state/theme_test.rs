use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

#[derive(Clone, Default)]
struct MemoryStore(Rc<RefCell<Option<String>>>);

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, identifier: &str) {
        *self.0.borrow_mut() = Some(identifier.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

#[derive(Clone, Default)]
struct FixedScheme(Rc<Cell<bool>>);

impl ColorScheme for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Default)]
struct RecordingSurface {
    projected: Rc<RefCell<Vec<(ThemeId, Transition)>>>,
    announced: Rc<RefCell<Vec<ThemeId>>>,
}

impl RecordingSurface {
    fn attribute(&self) -> Option<ThemeId> {
        self.projected.borrow().last().map(|(t, _)| *t)
    }
}

impl ThemeSurface for RecordingSurface {
    fn project(&self, theme: ThemeId, transition: Transition) {
        self.projected.borrow_mut().push((theme, transition));
    }

    fn announce(&self, theme: ThemeId) {
        self.announced.borrow_mut().push(theme);
    }
}

type TestController = ThemeController<MemoryStore, FixedScheme, RecordingSurface>;

fn controller(stored: Option<&str>, prefers_dark: bool) -> (TestController, MemoryStore, RecordingSurface) {
    let store = MemoryStore::default();
    if let Some(raw) = stored {
        store.save(raw);
    }
    let scheme = FixedScheme(Rc::new(Cell::new(prefers_dark)));
    let surface = RecordingSurface::default();
    (ThemeController::new(store.clone(), scheme, surface.clone()), store, surface)
}

// =============================================================
// Registry
// =============================================================

#[test]
fn identifiers_round_trip() {
    for theme in ThemeId::ALL {
        assert_eq!(theme.as_str().parse::<ThemeId>(), Ok(theme));
    }
}

#[test]
fn unknown_identifier_does_not_parse() {
    assert_eq!("neon".parse::<ThemeId>(), Err(UnknownTheme("neon".to_owned())));
    assert!("Dark".parse::<ThemeId>().is_err());
}

#[test]
fn system_preference_maps_to_dark_or_light() {
    assert_eq!(ThemeId::for_system(true), ThemeId::Dark);
    assert_eq!(ThemeId::for_system(false), ThemeId::Light);
}

#[test]
fn every_theme_has_display_info() {
    for theme in ThemeId::ALL {
        let info = theme.info();
        assert!(!info.name.is_empty());
        assert!(info.preview.ends_with(theme.as_str()));
    }
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_adopts_stored_theme() {
    let (mut ctl, _, surface) = controller(Some("ocean"), true);
    assert_eq!(ctl.load_theme(), ThemeId::Ocean);
    assert_eq!(ctl.current(), Some(ThemeId::Ocean));
    assert_eq!(surface.projected.borrow().as_slice(), &[(ThemeId::Ocean, Transition::Instant)]);
}

#[test]
fn load_without_record_follows_system_and_does_not_persist() {
    let (mut ctl, store, _) = controller(None, true);
    assert_eq!(ctl.load_theme(), ThemeId::Dark);
    assert_eq!(store.load(), None);
}

#[test]
fn load_treats_unknown_record_as_absent() {
    let (mut ctl, _, _) = controller(Some("neon"), false);
    assert_eq!(ctl.load_theme(), ThemeId::Light);
}

#[test]
fn controller_starts_unset() {
    let (ctl, _, _) = controller(None, false);
    assert_eq!(ctl.current(), None);
    assert!(!ctl.menu_open());
}

// =============================================================
// Applying
// =============================================================

#[test]
fn apply_without_animation_updates_everything() {
    let (mut ctl, store, surface) = controller(None, false);
    assert_eq!(ctl.apply_theme("vibrant", false), Some(ThemeId::Vibrant));
    assert_eq!(ctl.current(), Some(ThemeId::Vibrant));
    assert_eq!(store.load().as_deref(), Some("vibrant"));
    assert_eq!(surface.attribute(), Some(ThemeId::Vibrant));
    assert_eq!(surface.announced.borrow().as_slice(), &[ThemeId::Vibrant]);
}

#[test]
fn apply_with_animation_requests_crossfade() {
    let (mut ctl, store, surface) = controller(None, false);
    ctl.apply_theme("elegant", true);
    assert_eq!(store.load().as_deref(), Some("elegant"));
    assert_eq!(surface.projected.borrow().last(), Some(&(ThemeId::Elegant, Transition::Crossfade)));
}

#[test]
fn apply_unknown_identifier_changes_nothing() {
    let (mut ctl, store, surface) = controller(Some("ocean"), false);
    ctl.load_theme();
    let projected_before = surface.projected.borrow().len();

    assert_eq!(ctl.apply_theme("neon", false), None);
    assert_eq!(ctl.current(), Some(ThemeId::Ocean));
    assert_eq!(store.load().as_deref(), Some("ocean"));
    assert_eq!(surface.projected.borrow().len(), projected_before);
}

// =============================================================
// Reset and system changes
// =============================================================

#[test]
fn reset_clears_record_and_uses_system_theme() {
    let (mut ctl, store, surface) = controller(Some("ocean"), true);
    ctl.load_theme();
    assert_eq!(ctl.reset_theme(), ThemeId::Dark);
    assert_eq!(store.load(), None);
    assert_eq!(ctl.current(), Some(ThemeId::Dark));
    assert_eq!(surface.projected.borrow().last(), Some(&(ThemeId::Dark, Transition::Crossfade)));
}

#[test]
fn system_change_applies_only_without_record() {
    let (mut ctl, _, _) = controller(None, false);
    ctl.load_theme();
    assert_eq!(ctl.system_scheme_changed(true), Some(ThemeId::Dark));
    assert_eq!(ctl.current(), Some(ThemeId::Dark));

    ctl.apply_theme("ocean", false);
    assert_eq!(ctl.system_scheme_changed(false), None);
    assert_eq!(ctl.current(), Some(ThemeId::Ocean));
}

#[test]
fn system_change_after_reset_is_followed() {
    let (mut ctl, _, _) = controller(Some("vibrant"), false);
    ctl.reset_theme();
    assert_eq!(ctl.system_scheme_changed(true), Some(ThemeId::Dark));
}

// =============================================================
// Menu
// =============================================================

#[test]
fn menu_open_and_close_are_idempotent() {
    let (mut ctl, _, _) = controller(None, false);
    assert!(ctl.open_menu());
    assert!(!ctl.open_menu());
    assert!(ctl.menu_open());
    assert!(ctl.close_menu());
    assert!(!ctl.close_menu());
    assert!(!ctl.menu_open());
}

#[test]
fn toggle_menu_flips_state() {
    let (mut ctl, _, _) = controller(None, false);
    assert!(ctl.toggle_menu());
    assert!(ctl.menu_open());
    assert!(ctl.toggle_menu());
    assert!(!ctl.menu_open());
}
