//! Theme registry and the controller that applies, persists and resets themes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller owns the current theme and the settings-menu open state.
//! Storage, the system color scheme and the document are reached through
//! three seams (`PreferenceStore`, `ColorScheme`, `ThemeSurface`) so the
//! browser bindings in `util::theme_dom` can be swapped for fakes in tests.
//!
//! DESIGN
//! ======
//! Only an explicit `apply_theme` writes the preference record. Themes derived
//! from the system scheme (first load without a record, reset, live scheme
//! change) are applied without persisting, so "no record" keeps meaning
//! "follow the system".

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

/// Browser storage key holding the chosen theme identifier.
pub const STORAGE_KEY: &str = "team-blog-theme";
/// Delay before the attribute swap during a crossfade.
pub const CROSSFADE_DELAY_MS: u32 = 100;
/// Body opacity held during a crossfade.
pub const CROSSFADE_OPACITY: &str = "0.85";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeId {
    Dark,
    Ocean,
    Light,
    Vibrant,
    Elegant,
}

/// Display metadata for a registered theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// CSS class of the preview swatch.
    pub preview: &'static str,
}

impl ThemeId {
    /// Registry in menu order.
    pub const ALL: [Self; 5] = [Self::Dark, Self::Ocean, Self::Light, Self::Vibrant, Self::Elegant];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Ocean => "ocean",
            Self::Light => "light",
            Self::Vibrant => "vibrant",
            Self::Elegant => "elegant",
        }
    }

    #[must_use]
    pub fn info(self) -> ThemeInfo {
        match self {
            Self::Dark => ThemeInfo {
                name: "Dark",
                description: "Deep background with soft contrast",
                preview: "theme-preview-dark",
            },
            Self::Ocean => ThemeInfo {
                name: "Ocean",
                description: "Cool blues and teal accents",
                preview: "theme-preview-ocean",
            },
            Self::Light => ThemeInfo {
                name: "Light",
                description: "Bright, clean and airy",
                preview: "theme-preview-light",
            },
            Self::Vibrant => ThemeInfo {
                name: "Vibrant",
                description: "Saturated colors with bold accents",
                preview: "theme-preview-vibrant",
            },
            Self::Elegant => ThemeInfo {
                name: "Elegant",
                description: "Muted tones and serif headings",
                preview: "theme-preview-elegant",
            },
        }
    }

    /// Theme that follows the operating-system color scheme.
    #[must_use]
    pub fn for_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_owned()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Instant,
    /// Dip the body opacity and swap the attribute after [`CROSSFADE_DELAY_MS`].
    Crossfade,
}

/// Persisted theme preference.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, identifier: &str);
    fn clear(&self);
}

/// Operating-system color scheme.
pub trait ColorScheme {
    fn prefers_dark(&self) -> bool;
}

/// Where a theme becomes visible.
pub trait ThemeSurface {
    /// Write the theme onto the document.
    fn project(&self, theme: ThemeId, transition: Transition);
    /// Tell other listeners the theme changed.
    fn announce(&self, theme: ThemeId);
}

pub struct ThemeController<P, C, S> {
    store: P,
    scheme: C,
    surface: S,
    current: Option<ThemeId>,
    menu_open: bool,
}

impl<P: PreferenceStore, C: ColorScheme, S: ThemeSurface> ThemeController<P, C, S> {
    pub fn new(store: P, scheme: C, surface: S) -> Self {
        Self { store, scheme, surface, current: None, menu_open: false }
    }

    pub fn current(&self) -> Option<ThemeId> {
        self.current
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Adopt the stored theme, or the system one when nothing valid is stored.
    pub fn load_theme(&mut self) -> ThemeId {
        let theme = self.stored_theme().unwrap_or_else(|| self.system_theme());
        self.adopt(theme, Transition::Instant);
        theme
    }

    /// Apply and persist a registered theme. Unknown identifiers change nothing.
    pub fn apply_theme(&mut self, identifier: &str, animate: bool) -> Option<ThemeId> {
        let Ok(theme) = identifier.parse::<ThemeId>() else {
            log::debug!("theme: ignoring unknown identifier {identifier:?}");
            return None;
        };
        self.store.save(theme.as_str());
        self.adopt(theme, if animate { Transition::Crossfade } else { Transition::Instant });
        Some(theme)
    }

    /// Forget the stored preference and follow the system scheme again.
    pub fn reset_theme(&mut self) -> ThemeId {
        self.store.clear();
        let theme = self.system_theme();
        self.adopt(theme, Transition::Crossfade);
        theme
    }

    /// React to a live system scheme change. Ignored while a preference is stored.
    pub fn system_scheme_changed(&mut self, prefers_dark: bool) -> Option<ThemeId> {
        if self.stored_theme().is_some() {
            return None;
        }
        let theme = ThemeId::for_system(prefers_dark);
        self.adopt(theme, Transition::Instant);
        Some(theme)
    }

    /// Returns `true` when the menu was closed before.
    pub fn open_menu(&mut self) -> bool {
        !std::mem::replace(&mut self.menu_open, true)
    }

    /// Returns `true` when the menu was open before.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    pub fn toggle_menu(&mut self) -> bool {
        if self.menu_open { self.close_menu() } else { self.open_menu() }
    }

    fn stored_theme(&self) -> Option<ThemeId> {
        self.store.load().and_then(|raw| raw.parse().ok())
    }

    fn system_theme(&self) -> ThemeId {
        ThemeId::for_system(self.scheme.prefers_dark())
    }

    fn adopt(&mut self, theme: ThemeId, transition: Transition) {
        log::debug!("theme: {theme} ({transition:?})");
        self.current = Some(theme);
        self.surface.project(theme, transition);
        self.surface.announce(theme);
    }
}
