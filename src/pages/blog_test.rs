use super::*;

#[test]
fn query_reads_filters_and_forces_page_size() {
    let query = blog_query_from([("category", "design"), ("page", "2"), ("per_page", "50")]);
    assert_eq!(query.category.as_deref(), Some("design"));
    assert_eq!(query.page(), 2);
    assert_eq!(query.per_page(), BLOG_PER_PAGE);
}

#[test]
fn query_ignores_id_and_bad_page() {
    let query = blog_query_from([("id", "3"), ("page", "abc"), ("search", "")]);
    assert_eq!(query.id, None);
    assert_eq!(query.page(), 1);
    assert_eq!(query.search, None);
}

#[test]
fn listing_title_prefers_search_then_category_then_tag() {
    assert_eq!(listing_title(&PostQuery::new()), "All posts");
    assert_eq!(listing_title(&PostQuery::new().with_tag("tag1")), "Tag: tag1");
    assert_eq!(listing_title(&PostQuery::new().with_tag("tag1").with_category("tech")), "Category: tech");
    assert_eq!(listing_title(&PostQuery::new().with_category("tech").with_search("rust")), "Search: rust");
}

#[test]
fn pagination_href_from_listing_query_has_no_page_size() {
    let query = blog_query_from([("category", "design"), ("page", "1")]);
    let href = crate::util::links::blog_page_href(&query, 2);
    assert_eq!(href, "/blog?page=2&category=design");
    assert!(!href.contains("per_page"));
}
