//! # teamblog
//!
//! Leptos + WASM client for the team blog: navigation chrome, theme
//! switching, and the home / blog / article / team pages. Content comes from
//! the `content` crate, either answered in-process from fixtures (mock mode)
//! or fetched from the documented `/api/*` endpoints.
//!
//! Browser-only code sits behind the `csr` feature; without it every module
//! still compiles natively so state and formatting logic can be unit tested.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
