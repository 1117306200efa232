//! Record shapes exchanged between the content service and the pages.
//!
//! Field names follow the JSON wire format of the `/api/*` endpoints.

use serde::{Deserialize, Serialize};

/// Author summary embedded in every post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: u32,
    pub name: String,
    pub avatar: String,
}

/// Category reference embedded in a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCategory {
    pub id: u32,
    pub name: String,
    pub slug: String,
}

/// A published article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    /// Trusted HTML body.
    pub content: String,
    pub author: Author,
    pub category: PostCategory,
    pub tags: Vec<String>,
    pub cover: String,
    pub views: u32,
    pub likes: u32,
    pub comments: u32,
    /// RFC 3339 timestamp.
    pub created_at: String,
    pub updated_at: String,
}

/// A category with its post count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
    pub slug: String,
}

/// Optional social profile links. Absent links are omitted on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weibo: Option<String>,
}

/// A team member shown on the home and team pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub avatar: String,
    pub email: String,
    pub social: SocialLinks,
}

/// Site-wide metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub description: String,
    pub logo: String,
    pub favicon: String,
    pub social: SocialLinks,
}

/// Pagination metadata for list responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
}

/// One page of posts: `{ data: [...], pagination: {...} }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    pub data: Vec<Post>,
    pub pagination: Pagination,
}
