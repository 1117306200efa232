//! Client-side state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs with pure transitions; the app wraps them in `RwSignal`s so
//! components react to changes while the logic stays testable natively.

pub mod article;
pub mod theme;
pub mod toast;
pub mod ui;
