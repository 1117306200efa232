//! Helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser glue (`scroll`, `theme_dom`) is isolated here behind the `csr`
//! feature; the remaining modules are pure and tested natively.

pub mod format;
pub mod links;
pub mod pagination;
pub mod scroll;
pub mod search;
pub mod theme_dom;
pub mod toc;
