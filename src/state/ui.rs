//! Page chrome state: header scroll effects, mobile nav, search overlay.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Header gains the `scrolled` class past this offset.
pub const SCROLLED_AFTER: f64 = 10.0;
/// Header may hide once scrolled down past this offset.
pub const HIDE_HEADER_AFTER: f64 = 100.0;
/// Back-to-top button shows past this offset.
pub const BACK_TO_TOP_AFTER: f64 = 300.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub mobile_nav_open: bool,
    pub search_open: bool,
    pub scrolled: bool,
    pub header_hidden: bool,
    pub back_to_top_visible: bool,
    pub last_scroll_y: f64,
}

impl UiState {
    /// Recompute scroll-driven flags for a new vertical offset.
    pub fn on_scroll(&mut self, y: f64) {
        let y = y.max(0.0);
        self.scrolled = y > SCROLLED_AFTER;
        self.header_hidden = y > self.last_scroll_y && y > HIDE_HEADER_AFTER;
        self.back_to_top_visible = y > BACK_TO_TOP_AFTER;
        self.last_scroll_y = y;
    }

    pub fn toggle_mobile_nav(&mut self) {
        self.mobile_nav_open = !self.mobile_nav_open;
    }

    /// A click outside the menu and its toggle dismisses it.
    pub fn close_mobile_nav(&mut self) {
        self.mobile_nav_open = false;
    }

    /// Route changes close the mobile menu and the search overlay.
    pub fn on_navigate(&mut self) {
        self.mobile_nav_open = false;
        self.search_open = false;
    }

    pub fn open_search(&mut self) {
        self.search_open = true;
        self.mobile_nav_open = false;
    }

    pub fn close_search(&mut self) {
        self.search_open = false;
    }
}
