use super::*;

fn service() -> ContentService {
    ContentService::default()
}

// =============================================================
// Endpoint parsing
// =============================================================

#[test]
fn parse_endpoint_accepts_leading_slash_and_id() {
    assert_eq!(Resource::parse_endpoint("/posts/3"), Ok((Resource::Posts, Some(3))));
    assert_eq!(Resource::parse_endpoint("categories"), Ok((Resource::Categories, None)));
}

#[test]
fn parse_endpoint_ignores_non_numeric_id() {
    assert_eq!(Resource::parse_endpoint("posts/latest"), Ok((Resource::Posts, None)));
}

#[test]
fn parse_endpoint_rejects_unknown_resource() {
    assert_eq!(
        Resource::parse_endpoint("unknown-resource"),
        Err(ContentError::UnknownResource("unknown-resource".to_owned()))
    );
    assert!(Resource::parse_endpoint("").is_err());
}

#[test]
fn resource_names_round_trip() {
    for resource in Resource::ALL {
        assert_eq!(resource.as_str().parse::<Resource>(), Ok(resource));
    }
}

// =============================================================
// Generic request
// =============================================================

#[test]
fn unknown_resource_fails_with_null_data() {
    let env = service().request("unknown-resource", &PostQuery::default());
    assert!(!env.success);
    assert!(env.data.is_none());
    assert!(env.message.contains("unknown-resource"));
}

#[test]
fn missing_post_is_success_with_null_data() {
    let env = service().request("posts", &PostQuery::new().with_id(999));
    assert!(env.success);
    assert!(env.data.is_none());
}

#[test]
fn path_id_selects_single_post() {
    let env = service().request("posts/2", &PostQuery::default());
    match env.data {
        Some(Payload::Post(post)) => assert_eq!(post.id, 2),
        other => panic!("expected single post, got {other:?}"),
    }
}

#[test]
fn posts_request_returns_paginated_list() {
    let env = service().request("posts", &PostQuery::new().with_per_page(2));
    match env.data {
        Some(Payload::Posts(page)) => {
            assert_eq!(page.data.len(), 2);
            assert_eq!(page.pagination.total_pages, 3);
        }
        other => panic!("expected post page, got {other:?}"),
    }
}

#[test]
fn search_request_filters_by_keyword() {
    let env = service().request("posts", &PostQuery::new().with_search("k"));
    let Some(Payload::Posts(page)) = env.data else {
        panic!("expected post page");
    };
    assert!(!page.data.is_empty());
    for post in page.data {
        let title = post.title.to_lowercase();
        let excerpt = post.excerpt.to_lowercase();
        assert!(title.contains('k') || excerpt.contains('k'));
    }
}

#[test]
fn collection_requests_succeed() {
    let svc = service();
    for endpoint in ["categories", "tags", "members", "site"] {
        let env = svc.request(endpoint, &PostQuery::default());
        assert!(env.success, "{endpoint} should succeed");
        assert!(env.data.is_some(), "{endpoint} should carry data");
    }
}

#[test]
fn list_payload_serializes_in_wire_shape() {
    let env = service().request("posts", &PostQuery::new().with_per_page(1));
    let json = serde_json::to_value(env).expect("serialize");
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["pagination"]["per_page"], 1);
    assert_eq!(json["data"]["pagination"]["total"], 5);
    assert_eq!(json["data"]["data"].as_array().map(Vec::len), Some(1));
}

// =============================================================
// Typed calls
// =============================================================

#[test]
fn typed_post_lookup_matches_generic_request() {
    let svc = service();
    let typed = svc.post(&PostQuery::new().with_id(4));
    assert_eq!(typed.data.map(|p| p.id), Some(4));
}

#[test]
fn typed_post_without_id_is_empty() {
    let env = service().post(&PostQuery::default());
    assert!(env.success);
    assert!(env.data.is_none());
}

#[test]
fn members_and_site_come_from_fixtures() {
    let svc = service();
    assert_eq!(svc.members().data.map(|m| m.len()), Some(Fixtures::sample().members.len()));
    assert_eq!(svc.site().data.map(|s| s.name), Some("Team Blog".to_owned()));
}
