use super::*;

#[test]
fn defaults_use_mock_service() {
    let config = ApiConfig::default();
    assert!(config.use_mock);
    assert_eq!(config.base_url, "/api");
    assert_eq!(config.timeout_ms, 10_000);
    assert_eq!(config.retry_count, 3);
    assert_eq!(config.latency_ms, 20);
}

#[test]
fn from_values_without_overrides_is_default() {
    assert_eq!(ApiConfig::from_values(None, None, None, None), ApiConfig::DEFAULT);
}

#[test]
fn from_values_applies_overrides() {
    let config = ApiConfig::from_values(Some("https://blog.example.com/api/"), Some("false"), Some("2500"), Some("0"));
    assert_eq!(config.base_url, "https://blog.example.com/api/");
    assert!(!config.use_mock);
    assert_eq!(config.timeout_ms, 2500);
    assert_eq!(config.retry_count, 0);
}

#[test]
fn from_values_ignores_garbage() {
    let config = ApiConfig::from_values(Some("  "), Some("maybe"), Some("soon"), Some("-1"));
    assert_eq!(config, ApiConfig::DEFAULT);
}

#[test]
fn zero_timeout_falls_back_to_default() {
    let config = ApiConfig::from_values(None, None, Some("0"), None);
    assert_eq!(config.timeout_ms, ApiConfig::DEFAULT.timeout_ms);
}

#[test]
fn parse_bool_accepts_common_spellings() {
    assert_eq!(parse_bool(Some("YES")), Some(true));
    assert_eq!(parse_bool(Some(" off ")), Some(false));
    assert_eq!(parse_bool(Some("1")), Some(true));
    assert_eq!(parse_bool(None), None);
}

#[test]
fn endpoint_url_joins_with_single_slash() {
    let config = ApiConfig { base_url: "https://x.test/api/", ..ApiConfig::DEFAULT };
    assert_eq!(config.endpoint_url("/posts/3"), "https://x.test/api/posts/3");
    assert_eq!(ApiConfig::DEFAULT.endpoint_url("tags"), "/api/tags");
}
