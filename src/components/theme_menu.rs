//! Floating settings button and the theme selection panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeContext` wraps the browser theme controller in a `StoredValue` and
//! mirrors its state into signals, so the active option and the open panel
//! re-render when the controller changes.

#[cfg(test)]
#[path = "theme_menu_test.rs"]
mod theme_menu_test;

use leptos::prelude::*;

use crate::state::theme::ThemeId;
use crate::util::scroll::lock_body_scroll;
use crate::util::theme_dom::{BrowserThemeController, browser_controller};

#[cfg(feature = "csr")]
const FOCUS_DELAY_MS: u32 = 100;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    controller: StoredValue<BrowserThemeController>,
    pub current: RwSignal<Option<ThemeId>>,
    pub menu_open: RwSignal<bool>,
}

impl ThemeContext {
    pub fn new() -> Self {
        Self {
            controller: StoredValue::new(browser_controller()),
            current: RwSignal::new(None),
            menu_open: RwSignal::new(false),
        }
    }

    pub fn load(&self) -> Option<ThemeId> {
        self.run(|c| Some(c.load_theme()))
    }

    pub fn apply(&self, identifier: &str, animate: bool) -> Option<ThemeId> {
        self.run(|c| c.apply_theme(identifier, animate))
    }

    pub fn reset(&self) -> Option<ThemeId> {
        self.run(|c| Some(c.reset_theme()))
    }

    pub fn system_changed(&self, prefers_dark: bool) -> Option<ThemeId> {
        self.run(|c| c.system_scheme_changed(prefers_dark))
    }

    pub fn open_menu(&self) -> bool {
        self.run(|c| Some(c.open_menu())).unwrap_or(false)
    }

    pub fn close_menu(&self) -> bool {
        self.run(|c| Some(c.close_menu())).unwrap_or(false)
    }

    pub fn toggle_menu(&self) -> bool {
        self.run(|c| Some(c.toggle_menu())).unwrap_or(false)
    }

    fn run<T>(&self, f: impl FnOnce(&mut BrowserThemeController) -> Option<T>) -> Option<T> {
        let (result, current, open) = self.controller.try_update_value(|c| {
            let result = f(c);
            (result, c.current(), c.menu_open())
        })?;
        self.current.set(current);
        self.menu_open.set(open);
        result
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ThemeMenu() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let trigger_ref = NodeRef::<leptos::html::Button>::new();
    let close_ref = NodeRef::<leptos::html::Button>::new();

    // Move focus into the panel when it opens and back to the trigger when it closes.
    let after_change = move |changed: bool| {
        if !changed {
            return;
        }
        let open = theme.menu_open.get_untracked();
        lock_body_scroll(open);
        #[cfg(feature = "csr")]
        {
            if open {
                gloo_timers::callback::Timeout::new(FOCUS_DELAY_MS, move || {
                    if let Some(el) = close_ref.get_untracked() {
                        let _ = el.focus();
                    }
                })
                .forget();
            } else if let Some(el) = trigger_ref.get_untracked() {
                let _ = el.focus();
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (trigger_ref, close_ref);
        }
    };

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && theme.menu_open.get_untracked() {
            after_change(theme.close_menu());
        }
    });
    on_cleanup(move || handle.remove());

    let active_class = move |base: &'static str| {
        move || if theme.menu_open.get() { format!("{base} active") } else { base.to_owned() }
    };

    view! {
        <button
            class=active_class("settings-btn")
            aria-label="Theme settings"
            node_ref=trigger_ref
            on:click=move |_| after_change(theme.toggle_menu())
        >
            "\u{2699}"
        </button>
        <div class=active_class("theme-menu-overlay") on:click=move |_| after_change(theme.close_menu())></div>
        <div class=active_class("theme-menu") role="dialog" aria-labelledby="theme-menu-title">
            <div class="theme-menu-header">
                <h2 class="theme-menu-title" id="theme-menu-title">"Theme settings"</h2>
                <button
                    class="theme-menu-close"
                    aria-label="Close menu"
                    node_ref=close_ref
                    on:click=move |_| after_change(theme.close_menu())
                >
                    "\u{00D7}"
                </button>
            </div>
            <div class="theme-menu-content">
                <div class="theme-section">
                    <h3 class="theme-section-title">"Choose a theme"</h3>
                    <div class="theme-options">
                        {ThemeId::ALL.into_iter().map(|id| view! { <ThemeOption id=id/> }).collect_view()}
                    </div>
                </div>
                <div class="theme-section">
                    <h3 class="theme-section-title">"Other settings"</h3>
                    <button class="reset-theme-btn" id="reset-theme" on:click=move |_| {
                        theme.reset();
                    }>
                        <div class="icon">"\u{21BA}"</div>
                        <div class="theme-info">
                            <div class="theme-name">"Restore default"</div>
                            <div class="theme-desc">"Follow the system color scheme"</div>
                        </div>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ThemeOption(id: ThemeId) -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let info = id.info();
    let is_active = move || theme.current.get() == Some(id);

    view! {
        <div
            class="theme-option"
            class:active=is_active
            data-theme=id.as_str()
            role="button"
            tabindex="0"
            aria-pressed=move || if is_active() { "true" } else { "false" }
            on:click=move |_| {
                theme.apply(id.as_str(), true);
            }
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                let key = ev.key();
                if key == "Enter" || key == " " {
                    ev.prevent_default();
                    theme.apply(id.as_str(), true);
                }
            }
        >
            <div class=format!("theme-preview {}", info.preview)></div>
            <div class="theme-info">
                <div class="theme-name">{info.name}</div>
                <div class="theme-desc">{info.description}</div>
            </div>
            <div class="theme-check">"\u{2713}"</div>
        </div>
    }
}
