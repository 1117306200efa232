//! Browser bindings for the theme controller seams.
//!
//! Preference lives in `localStorage`, the system scheme comes from
//! `matchMedia`, and themes are projected as a `data-theme` attribute on the
//! `<html>` element. Without the `csr` feature every binding is a no-op, so
//! the controller runs natively with "nothing stored, light system scheme".

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

use crate::state::theme::{ColorScheme, PreferenceStore, ThemeController, ThemeId, ThemeSurface, Transition};
#[cfg(feature = "csr")]
use crate::state::theme::{CROSSFADE_DELAY_MS, CROSSFADE_OPACITY, STORAGE_KEY};

#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub type BrowserThemeController = ThemeController<LocalPreferenceStore, MediaColorScheme, DomThemeSurface>;

#[must_use]
pub fn browser_controller() -> BrowserThemeController {
    ThemeController::new(LocalPreferenceStore, MediaColorScheme, DomThemeSurface)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, identifier: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(STORAGE_KEY, identifier);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = identifier;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MediaColorScheme;

impl ColorScheme for MediaColorScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
                .is_some_and(|mq| mq.matches())
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DomThemeSurface;

impl ThemeSurface for DomThemeSurface {
    fn project(&self, theme: ThemeId, transition: Transition) {
        #[cfg(feature = "csr")]
        {
            match transition {
                Transition::Instant => set_theme_attribute(theme),
                Transition::Crossfade => {
                    set_body_opacity(Some(CROSSFADE_OPACITY));
                    gloo_timers::callback::Timeout::new(CROSSFADE_DELAY_MS, move || {
                        set_theme_attribute(theme);
                        set_body_opacity(None);
                    })
                    .forget();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (theme, transition);
        }
    }

    fn announce(&self, theme: ThemeId) {
        #[cfg(feature = "csr")]
        {
            let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let detail = js_sys::Object::new();
            let _ = js_sys::Reflect::set(&detail, &"theme".into(), &theme.as_str().into());
            let init = web_sys::CustomEventInit::new();
            init.set_detail(&detail);
            if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict("themeChanged", &init) {
                let _ = doc.dispatch_event(&event);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }
}

/// Subscribe to live changes of the system color scheme.
///
/// The listener lives for the rest of the page.
pub fn watch_system_scheme(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(mq) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten()) else {
            return;
        };
        let closure = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
            on_change(ev.matches());
        });
        if mq.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref()).is_ok() {
            closure.forget();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
    }
}

#[cfg(feature = "csr")]
fn set_theme_attribute(theme: ThemeId) {
    if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
        let _ = el.set_attribute("data-theme", theme.as_str());
    }
}

#[cfg(feature = "csr")]
fn set_body_opacity(value: Option<&str>) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let _ = match value {
        Some(v) => style.set_property("opacity", v),
        None => style.remove_property("opacity").map(|_| ()),
    };
}
