use super::*;
use content::{ContentService, Pagination, PostQuery};

fn page_with(query: &PostQuery) -> Envelope<PostPage> {
    ContentService::default().posts(query)
}

// =============================================================
// Keyword normalization
// =============================================================

#[test]
fn short_keywords_are_rejected() {
    assert_eq!(normalize_keyword(""), None);
    assert_eq!(normalize_keyword("  r  "), None);
}

#[test]
fn keywords_are_trimmed() {
    assert_eq!(normalize_keyword("  rust "), Some("rust".to_owned()));
    assert_eq!(normalize_keyword("设计"), Some("设计".to_owned()));
}

// =============================================================
// Request sequence
// =============================================================

#[test]
fn newer_token_makes_older_stale() {
    let mut seq = RequestSequence::default();
    let first = seq.issue();
    let second = seq.issue();
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));
}

#[test]
fn invalidate_drops_outstanding_token() {
    let mut seq = RequestSequence::default();
    let token = seq.issue();
    seq.invalidate();
    assert!(!seq.is_current(token));
}

// =============================================================
// Status mapping
// =============================================================

#[test]
fn matching_posts_become_results() {
    let status = SearchStatus::from_envelope("design", page_with(&PostQuery::new().with_search("design")));
    match status {
        SearchStatus::Results { keyword, posts } => {
            assert_eq!(keyword, "design");
            assert!(!posts.is_empty());
        }
        other => panic!("expected results, got {other:?}"),
    }
}

#[test]
fn no_matches_is_empty() {
    let status = SearchStatus::from_envelope("zzz", page_with(&PostQuery::new().with_search("zzz")));
    assert_eq!(status, SearchStatus::Empty);
}

#[test]
fn missing_page_is_empty() {
    let envelope: Envelope<PostPage> = Envelope::empty();
    assert_eq!(SearchStatus::from_envelope("rust", envelope), SearchStatus::Empty);
}

#[test]
fn failure_carries_message() {
    let envelope: Envelope<PostPage> = Envelope::failure("offline");
    assert_eq!(SearchStatus::from_envelope("rust", envelope), SearchStatus::Failed("offline".to_owned()));
}

#[test]
fn empty_page_data_is_empty() {
    let page = PostPage { data: Vec::new(), pagination: Pagination { page: 1, per_page: 5, total: 0, total_pages: 0 } };
    assert_eq!(SearchStatus::from_envelope("rust", Envelope::ok(page)), SearchStatus::Empty);
}
