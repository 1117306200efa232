//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page re-derives what it shows from the current URL query and loads
//! its data through the shared `ContentApi`. Sections load independently, so
//! one failed request never blanks the whole page.

pub mod article;
pub mod blog;
pub mod home;
pub mod team;
