//! In-app hrefs.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use content::PostQuery;

#[must_use]
pub fn article_href(id: u32) -> String {
    format!("/article?id={id}")
}

/// `/blog` with the list filters of `query` as its query string.
#[must_use]
pub fn blog_href(query: &PostQuery) -> String {
    let pairs = query.to_pairs();
    if pairs.is_empty() {
        return "/blog".to_owned();
    }
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())))
        .finish();
    format!("/blog?{encoded}")
}

/// Link to `page` of the listing filtered like `query`.
///
/// The page size is fixed by the blog page, so it stays out of the URL.
#[must_use]
pub fn blog_page_href(query: &PostQuery, page: u32) -> String {
    let mut query = query.clone().with_page(page);
    query.per_page = None;
    query.id = None;
    blog_href(&query)
}

#[must_use]
pub fn category_href(slug: &str) -> String {
    blog_href(&PostQuery::new().with_category(slug))
}

#[must_use]
pub fn tag_href(tag: &str) -> String {
    blog_href(&PostQuery::new().with_tag(tag))
}

#[must_use]
pub fn search_href(keyword: &str) -> String {
    blog_href(&PostQuery::new().with_search(keyword))
}
