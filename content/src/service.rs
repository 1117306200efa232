//! In-memory content service answering the `/api/*` surface from fixtures.
//!
//! DESIGN
//! ======
//! Routing is by the first path segment of the endpoint (`posts`,
//! `categories`, `tags`, `members`, `site`). A numeric second segment on
//! `posts` turns the call into a single-record lookup. Every answer is an
//! [`Envelope`]; unknown resources produce a failed envelope instead of an
//! error value so callers have a single shape to branch on.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::str::FromStr;

use serde::Serialize;

use crate::envelope::Envelope;
use crate::fixtures::Fixtures;
use crate::query::PostQuery;
use crate::types::{Category, Member, Post, PostPage, SiteInfo, Tag};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("endpoint does not exist: {0}")]
    UnknownResource(String),
}

/// Top-level collections exposed by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Posts,
    Categories,
    Tags,
    Members,
    Site,
}

impl Resource {
    pub const ALL: [Self; 5] = [Self::Posts, Self::Categories, Self::Tags, Self::Members, Self::Site];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Categories => "categories",
            Self::Tags => "tags",
            Self::Members => "members",
            Self::Site => "site",
        }
    }

    /// Split an endpoint like `/posts/3` into its resource and numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::UnknownResource`] when the first segment does
    /// not name a known collection.
    pub fn parse_endpoint(endpoint: &str) -> Result<(Self, Option<u32>), ContentError> {
        let mut parts = endpoint.split('/').filter(|p| !p.is_empty());
        let head = parts.next().unwrap_or_default();
        let resource = head.parse::<Self>()?;
        let id = parts.next().and_then(|raw| raw.parse::<u32>().ok()).filter(|id| *id > 0);
        Ok((resource, id))
    }
}

impl FromStr for Resource {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ContentError::UnknownResource(s.to_owned()))
    }
}

/// Payload of a generic [`ContentService::request`] call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Posts(PostPage),
    Post(Post),
    Categories(Vec<Category>),
    Tags(Vec<Tag>),
    Members(Vec<Member>),
    Site(SiteInfo),
}

#[derive(Clone, Debug)]
pub struct ContentService {
    fixtures: Fixtures,
}

impl Default for ContentService {
    fn default() -> Self {
        Self::new(Fixtures::sample())
    }
}

impl ContentService {
    #[must_use]
    pub fn new(fixtures: Fixtures) -> Self {
        Self { fixtures }
    }

    /// Route `endpoint` to a collection and answer with a uniform envelope.
    #[must_use]
    pub fn request(&self, endpoint: &str, query: &PostQuery) -> Envelope<Payload> {
        let (resource, path_id) = match Resource::parse_endpoint(endpoint) {
            Ok(parsed) => parsed,
            Err(e) => return Envelope::failure(e.to_string()),
        };

        match resource {
            Resource::Posts => {
                let mut query = query.clone();
                if path_id.is_some() {
                    query.id = path_id;
                }
                if query.id.is_some() {
                    self.post(&query).map(Payload::Post)
                } else {
                    self.posts(&query).map(Payload::Posts)
                }
            }
            Resource::Categories => self.categories().map(Payload::Categories),
            Resource::Tags => self.tags().map(Payload::Tags),
            Resource::Members => self.members().map(Payload::Members),
            Resource::Site => self.site().map(Payload::Site),
        }
    }

    /// One filtered page of posts.
    #[must_use]
    pub fn posts(&self, query: &PostQuery) -> Envelope<PostPage> {
        Envelope::ok(query.paginate(&self.fixtures.posts))
    }

    /// Single post by `query.id`. Absent records succeed with no data.
    #[must_use]
    pub fn post(&self, query: &PostQuery) -> Envelope<Post> {
        match query.id.and_then(|id| query.find(&self.fixtures.posts, id)) {
            Some(post) => Envelope::ok(post),
            None => Envelope::empty(),
        }
    }

    #[must_use]
    pub fn categories(&self) -> Envelope<Vec<Category>> {
        Envelope::ok(self.fixtures.categories.clone())
    }

    #[must_use]
    pub fn tags(&self) -> Envelope<Vec<Tag>> {
        Envelope::ok(self.fixtures.tags.clone())
    }

    #[must_use]
    pub fn members(&self) -> Envelope<Vec<Member>> {
        Envelope::ok(self.fixtures.members.clone())
    }

    #[must_use]
    pub fn site(&self) -> Envelope<SiteInfo> {
        Envelope::ok(self.fixtures.site.clone())
    }
}
