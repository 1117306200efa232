//! Networking for the content API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` answers every content call, either from the in-process
//! `content::ContentService` or over HTTP, and always resolves to an
//! `Envelope`.

pub mod api;
