use super::*;
use crate::fixtures::Fixtures;

fn posts() -> Vec<Post> {
    Fixtures::sample().posts
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn from_pairs_reads_known_keys() {
    let q = PostQuery::from_pairs([("page", "2"), ("per_page", "9"), ("category", "tech"), ("tag", "tag2"), ("search", "rust")]);
    assert_eq!(q.page, Some(2));
    assert_eq!(q.per_page, Some(9));
    assert_eq!(q.category.as_deref(), Some("tech"));
    assert_eq!(q.tag.as_deref(), Some("tag2"));
    assert_eq!(q.search.as_deref(), Some("rust"));
    assert_eq!(q.id, None);
}

#[test]
fn from_pairs_is_lenient_about_bad_numbers() {
    let q = PostQuery::from_pairs([("page", "abc"), ("per_page", "0"), ("id", "-3")]);
    assert_eq!(q.page(), DEFAULT_PAGE);
    assert_eq!(q.per_page(), DEFAULT_PER_PAGE);
    assert_eq!(q.id, None);
}

#[test]
fn from_pairs_treats_empty_filters_as_absent() {
    let q = PostQuery::from_pairs([("category", ""), ("search", ""), ("unknown", "x")]);
    assert_eq!(q, PostQuery::default());
}

#[test]
fn to_pairs_skips_id_and_unset_fields() {
    let q = PostQuery::new().with_id(4).with_per_page(5).with_search("calm");
    assert_eq!(q.to_pairs(), vec![("per_page", "5".to_owned()), ("search", "calm".to_owned())]);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn search_matches_title_or_excerpt_case_insensitively() {
    let page = PostQuery::new().with_search("RUST").paginate(&posts());
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, 2);

    let page = PostQuery::new().with_search("feedback").paginate(&posts());
    assert_eq!(page.data.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
}

#[test]
fn search_results_all_contain_keyword() {
    let keyword = "e";
    let page = PostQuery::new().with_search(keyword).paginate(&posts());
    assert!(!page.data.is_empty());
    for post in &page.data {
        let hay = format!("{} {}", post.title.to_lowercase(), post.excerpt.to_lowercase());
        assert!(hay.contains(keyword));
    }
}

#[test]
fn category_filter_is_exact_slug_match() {
    let page = PostQuery::new().with_category("design").paginate(&posts());
    assert_eq!(page.pagination.total, 2);
    assert!(page.data.iter().all(|p| p.category.slug == "design"));

    let page = PostQuery::new().with_category("Design").paginate(&posts());
    assert_eq!(page.pagination.total, 0);
}

#[test]
fn tag_filter_requires_membership() {
    let page = PostQuery::new().with_tag("tag3").paginate(&posts());
    assert_eq!(page.data.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 4]);
}

#[test]
fn filters_combine() {
    let page = PostQuery::new().with_category("design").with_tag("tag5").paginate(&posts());
    assert_eq!(page.data.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_returns_matching_post() {
    let post = PostQuery::new().find(&posts(), 3).expect("post 3");
    assert_eq!(post.id, 3);
}

#[test]
fn find_returns_none_for_missing_id() {
    assert!(PostQuery::new().find(&posts(), 999).is_none());
}

#[test]
fn find_still_applies_filters() {
    assert!(PostQuery::new().with_category("tech").find(&posts(), 3).is_none());
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn first_page_of_two_has_three_total_pages() {
    let page = PostQuery::new().with_per_page(2).paginate(&posts());
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.pagination, Pagination { page: 1, per_page: 2, total: 5, total_pages: 3 });
}

#[test]
fn last_partial_page_has_remainder() {
    let page = PostQuery::new().with_per_page(2).with_page(3).paginate(&posts());
    assert_eq!(page.data.iter().map(|p| p.id).collect::<Vec<_>>(), vec![5]);
}

#[test]
fn out_of_range_page_is_empty_not_error() {
    let page = PostQuery::new().with_per_page(2).with_page(4).paginate(&posts());
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.page, 4);
    assert_eq!(page.pagination.total_pages, 3);
}

#[test]
fn defaults_to_page_one_of_ten() {
    let page = PostQuery::new().paginate(&posts());
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.per_page, 10);
    assert_eq!(page.pagination.total_pages, 1);
    assert_eq!(page.data.len(), 5);
}

#[test]
fn no_matches_means_zero_pages() {
    let page = PostQuery::new().with_search("zzz-nothing").paginate(&posts());
    assert_eq!(page.pagination.total, 0);
    assert_eq!(page.pagination.total_pages, 0);
}
