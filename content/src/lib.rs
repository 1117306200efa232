//! Shared content model and mock content service for the team blog.
//!
//! This crate owns the record shapes (posts, categories, tags, members, site
//! info), the `{ success, data, message }` result envelope, and an in-memory
//! service that answers the documented `/api/*` surface from fixture data.
//! It has no browser dependencies so the query rules can be tested natively.

pub mod envelope;
pub mod fixtures;
pub mod query;
pub mod service;
pub mod types;

pub use envelope::Envelope;
pub use fixtures::Fixtures;
pub use query::{DEFAULT_PAGE, DEFAULT_PER_PAGE, PostQuery};
pub use service::{ContentError, ContentService, Payload, Resource};
pub use types::{Author, Category, Member, Pagination, Post, PostCategory, PostPage, SiteInfo, SocialLinks, Tag};
