//! Search overlay logic: keyword normalization, result states and stale
//! response detection.
//!
//! DESIGN
//! ======
//! Every search issued by the overlay takes a token from a
//! [`RequestSequence`]. Typing, clearing, or closing the overlay moves the
//! sequence forward, so a response that arrives for an older token is dropped
//! instead of overwriting newer results.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use content::{Envelope, Post, PostPage};

pub const SEARCH_DEBOUNCE_MS: u32 = 300;
pub const SEARCH_MIN_CHARS: usize = 2;
pub const SEARCH_RESULT_LIMIT: u32 = 5;

/// Trimmed keyword, or `None` when it is too short to search.
pub fn normalize_keyword(raw: &str) -> Option<String> {
    let keyword = raw.trim();
    (keyword.chars().count() >= SEARCH_MIN_CHARS).then(|| keyword.to_owned())
}

/// Monotonic token source for in-flight requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSequence {
    current: u64,
}

impl RequestSequence {
    /// Start a new request; any earlier token becomes stale.
    pub fn issue(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        token == self.current
    }

    /// Make every outstanding token stale without starting a request.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Results { keyword: String, posts: Vec<Post> },
    Empty,
    Failed(String),
}

impl SearchStatus {
    #[must_use]
    pub fn from_envelope(keyword: &str, envelope: Envelope<PostPage>) -> Self {
        if !envelope.success {
            return Self::Failed(envelope.message);
        }
        match envelope.data {
            Some(page) if !page.data.is_empty() => Self::Results { keyword: keyword.to_owned(), posts: page.data },
            _ => Self::Empty,
        }
    }
}
