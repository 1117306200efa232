//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page chrome (header, footer, overlays, toasts) and the cards shared by the
//! pages. Components read shared state and the `ContentApi` from Leptos
//! context.

pub mod back_to_top;
pub mod footer;
pub mod header;
pub mod member_card;
pub mod pagination;
pub mod post_card;
pub mod search_overlay;
pub mod theme_menu;
pub mod toast_stack;
