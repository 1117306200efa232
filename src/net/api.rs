//! Content API client shared by every page.
//!
//! Mock mode answers from the in-process `ContentService` after a short
//! simulated latency. Network mode issues `GET {base}/{resource}[/{id}]` via
//! `gloo-net` (browser only).
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns `Err` to callers. Transport failures, timeouts and
//! undecodable bodies are folded into a failed `Envelope` whose `message`
//! carries the reason, so each page can branch on `success` and degrade on
//! its own.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use content::{Category, ContentService, Envelope, Member, Post, PostPage, PostQuery, SiteInfo, Tag};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Injected through Leptos context; cheap to clone.
#[derive(Clone, Debug)]
pub struct ContentApi {
    config: ApiConfig,
    service: Arc<ContentService>,
}

impl Default for ContentApi {
    fn default() -> Self {
        Self::new(ApiConfig::from_build_env(), ContentService::default())
    }
}

impl ContentApi {
    #[must_use]
    pub fn new(config: ApiConfig, service: ContentService) -> Self {
        Self { config, service: Arc::new(service) }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Generic call returning the raw JSON payload.
    pub async fn request(&self, endpoint: &str, query: &PostQuery) -> Envelope<Value> {
        if self.config.use_mock {
            self.simulate_latency().await;
            let envelope = self.service.request(endpoint, query);
            return match envelope.data {
                Some(payload) => match serde_json::to_value(payload) {
                    Ok(value) => Envelope { success: envelope.success, data: Some(value), message: envelope.message },
                    Err(e) => Envelope::failure(ApiError::Decode(e.to_string()).to_string()),
                },
                None => Envelope { success: envelope.success, data: None, message: envelope.message },
            };
        }
        self.fetch(&resolve_endpoint(endpoint, query), &query.to_pairs()).await
    }

    /// One page of posts matching `query`.
    pub async fn get_posts(&self, query: &PostQuery) -> Envelope<PostPage> {
        if self.config.use_mock {
            self.simulate_latency().await;
            return self.service.posts(query);
        }
        self.fetch("posts", &query.to_pairs()).await
    }

    /// Single post; a missing record succeeds with no data.
    pub async fn get_post(&self, id: u32) -> Envelope<Post> {
        if self.config.use_mock {
            self.simulate_latency().await;
            return self.service.post(&PostQuery::new().with_id(id));
        }
        self.fetch(&post_endpoint(id), &[]).await
    }

    /// `get_posts` with the keyword folded into `query`.
    pub async fn search_posts(&self, keyword: &str, query: &PostQuery) -> Envelope<PostPage> {
        let query = query.clone().with_search(keyword);
        self.get_posts(&query).await
    }

    pub async fn get_categories(&self) -> Envelope<Vec<Category>> {
        if self.config.use_mock {
            self.simulate_latency().await;
            return self.service.categories();
        }
        self.fetch("categories", &[]).await
    }

    pub async fn get_tags(&self) -> Envelope<Vec<Tag>> {
        if self.config.use_mock {
            self.simulate_latency().await;
            return self.service.tags();
        }
        self.fetch("tags", &[]).await
    }

    pub async fn get_members(&self) -> Envelope<Vec<Member>> {
        if self.config.use_mock {
            self.simulate_latency().await;
            return self.service.members();
        }
        self.fetch("members", &[]).await
    }

    pub async fn get_site_info(&self) -> Envelope<SiteInfo> {
        if self.config.use_mock {
            self.simulate_latency().await;
            return self.service.site();
        }
        self.fetch("site", &[]).await
    }

    async fn simulate_latency(&self) {
        #[cfg(feature = "csr")]
        {
            if self.config.latency_ms > 0 {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(self.config.latency_ms))).await;
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str, pairs: &[(&'static str, String)]) -> Envelope<T> {
        match self.fetch_json(endpoint, pairs).await {
            Ok((ok, body)) => envelope_from_body(ok, &body),
            Err(e) => {
                log::warn!("content api: {endpoint}: {e}");
                Envelope::failure(e.to_string())
            }
        }
    }

    async fn fetch_json(&self, endpoint: &str, pairs: &[(&'static str, String)]) -> Result<(bool, Value), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.endpoint_url(endpoint);
            let mut attempt = 0;
            loop {
                match fetch_once(&url, pairs, self.config.timeout_ms).await {
                    Err(e) if should_retry(&e, attempt, self.config.retry_count) => {
                        attempt += 1;
                        log::debug!("content api: retrying {url} ({attempt}/{}): {e}", self.config.retry_count);
                    }
                    other => return other,
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (endpoint, pairs);
            Err(ApiError::Transport("network requests are only available in the browser".to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
async fn fetch_once(url: &str, pairs: &[(&'static str, String)], timeout_ms: u32) -> Result<(bool, Value), ApiError> {
    use futures::future::{Either, select};

    let request = async {
        let resp = gloo_net::http::Request::get(url)
            .query(pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let ok = resp.ok();
        let body = resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok((ok, body))
    };
    let timeout = gloo_timers::future::TimeoutFuture::new(timeout_ms);

    match select(Box::pin(request), Box::pin(timeout)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout(timeout_ms)),
    }
}

fn post_endpoint(id: u32) -> String {
    format!("posts/{id}")
}

/// Path for the generic call: a `posts` request with an id in the query
/// targets the single-post resource.
fn resolve_endpoint(endpoint: &str, query: &PostQuery) -> String {
    let trimmed = endpoint.trim_matches('/');
    match query.id {
        Some(id) if trimmed == "posts" => post_endpoint(id),
        _ => trimmed.to_owned(),
    }
}

/// Transport failures are retried; timeouts and bad bodies are not.
#[cfg(any(test, feature = "csr"))]
fn should_retry(error: &ApiError, attempt: u32, retry_count: u32) -> bool {
    matches!(error, ApiError::Transport(_)) && attempt < retry_count
}

/// Fold an HTTP status and JSON body into an envelope.
fn envelope_from_body<T: DeserializeOwned>(ok: bool, body: &Value) -> Envelope<T> {
    let message = body.get("message").and_then(Value::as_str).unwrap_or_default().to_owned();
    if !ok {
        let message = if message.is_empty() { "request was rejected".to_owned() } else { message };
        return Envelope::failure(message);
    }
    let data = match body.get("data") {
        None | Some(Value::Null) => None,
        Some(raw) => match serde_json::from_value::<T>(raw.clone()) {
            Ok(data) => Some(data),
            Err(e) => return Envelope::failure(ApiError::Decode(e.to_string()).to_string()),
        },
    };
    Envelope { success: true, data, message }
}
