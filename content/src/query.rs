//! Post list query: filters, single-record lookup, and pagination.
//!
//! Parameters mirror `GET /api/posts?page=&per_page=&category=&tag=&search=`.
//! Parsing is lenient: unparsable or zero page numbers fall back to the
//! defaults and empty strings count as "no filter".

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::types::{Pagination, Post, PostPage};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostQuery {
    /// Single-record lookup; bypasses pagination.
    pub id: Option<u32>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Exact category slug.
    pub category: Option<String>,
    /// Exact tag membership.
    pub tag: Option<String>,
    /// Case-insensitive substring of title or excerpt.
    pub search: Option<String>,
}

impl PostQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    #[must_use]
    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.category = non_empty(slug.into());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = non_empty(tag.into());
        self
    }

    #[must_use]
    pub fn with_search(mut self, keyword: impl Into<String>) -> Self {
        self.search = non_empty(keyword.into());
        self
    }

    /// Build a query from URL query-string pairs. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "id" => query.id = parse_positive(value),
                "page" => query.page = parse_positive(value),
                "per_page" => query.per_page = parse_positive(value),
                "category" => query.category = non_empty(value.to_owned()),
                "tag" => query.tag = non_empty(value.to_owned()),
                "search" => query.search = non_empty(value.to_owned()),
                _ => {}
            }
        }
        query
    }

    /// Query-string pairs for the list endpoint. The id travels in the path.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }

    /// Effective page number (1-based).
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE)
    }

    /// Effective page size.
    #[must_use]
    pub fn per_page(&self) -> u32 {
        self.per_page.filter(|p| *p > 0).unwrap_or(DEFAULT_PER_PAGE)
    }

    /// Whether `post` passes the search, category, and tag filters.
    #[must_use]
    pub fn matches(&self, post: &Post) -> bool {
        if let Some(keyword) = &self.search {
            let keyword = keyword.to_lowercase();
            if !post.title.to_lowercase().contains(&keyword) && !post.excerpt.to_lowercase().contains(&keyword) {
                return false;
            }
        }
        if let Some(slug) = &self.category {
            if post.category.slug != *slug {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !post.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        true
    }

    /// Look up `id` among the posts that pass the filters.
    #[must_use]
    pub fn find(&self, posts: &[Post], id: u32) -> Option<Post> {
        posts.iter().find(|p| p.id == id && self.matches(p)).cloned()
    }

    /// Filter and cut one page. Pages past the end are empty.
    #[must_use]
    pub fn paginate(&self, posts: &[Post]) -> PostPage {
        let matching: Vec<&Post> = posts.iter().filter(|p| self.matches(p)).collect();
        let page = self.page();
        let per_page = self.per_page();
        let total = u32::try_from(matching.len()).unwrap_or(u32::MAX);

        let start = (page as usize - 1).saturating_mul(per_page as usize);
        let data = matching
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();

        PostPage { data, pagination: Pagination { page, per_page, total, total_pages: total.div_ceil(per_page) } }
    }
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
