//! Uniform `{ success, data, message }` result envelope.
//!
//! ERROR HANDLING
//! ==============
//! Every content call resolves to an envelope. Failures set `success` to
//! `false` and leave `data` empty; callers branch on `success` instead of
//! handling a rejected future. A successful envelope may still carry no data
//! (single-record lookup that found nothing).

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: String,
}

impl<T> Envelope<T> {
    /// Successful result carrying `data`.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), message: String::new() }
    }

    /// Successful result with nothing to return.
    #[must_use]
    pub fn empty() -> Self {
        Self { success: true, data: None, message: String::new() }
    }

    /// Failed result with a human-readable reason.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, data: None, message: message.into() }
    }

    /// Transform the payload while keeping status and message.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope { success: self.success, data: self.data.map(f), message: self.message }
    }

    /// The payload of a successful envelope, if any.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}
