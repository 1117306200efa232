//! Content API configuration, fixed at compile time.
//!
//! Defaults point at the in-process fixture service. A build can switch to a
//! real backend by exporting these variables before compiling:
//! - `TEAMBLOG_API_BASE`: base URL of the `/api` surface (default `/api`)
//! - `TEAMBLOG_API_MOCK`: `true`/`false` (default `true`)
//! - `TEAMBLOG_API_TIMEOUT_MS`: per-request timeout (default 10000)
//! - `TEAMBLOG_API_RETRIES`: retries after a transport failure (default 3)
//!
//! Unparsable values fall back to the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: &'static str,
    pub use_mock: bool,
    pub timeout_ms: u32,
    pub retry_count: u32,
    /// Simulated round-trip applied to every mock call.
    pub latency_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ApiConfig {
    pub const DEFAULT: Self = Self {
        base_url: "/api",
        use_mock: true,
        timeout_ms: 10_000,
        retry_count: 3,
        latency_ms: 20,
    };

    /// Build the configuration from `TEAMBLOG_API_*` variables seen by the compiler.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TEAMBLOG_API_BASE"),
            option_env!("TEAMBLOG_API_MOCK"),
            option_env!("TEAMBLOG_API_TIMEOUT_MS"),
            option_env!("TEAMBLOG_API_RETRIES"),
        )
    }

    fn from_values(
        base_url: Option<&'static str>,
        use_mock: Option<&str>,
        timeout_ms: Option<&str>,
        retry_count: Option<&str>,
    ) -> Self {
        let defaults = Self::DEFAULT;
        Self {
            base_url: base_url.map(str::trim).filter(|b| !b.is_empty()).unwrap_or(defaults.base_url),
            use_mock: parse_bool(use_mock).unwrap_or(defaults.use_mock),
            timeout_ms: parse_u32(timeout_ms).filter(|t| *t > 0).unwrap_or(defaults.timeout_ms),
            retry_count: parse_u32(retry_count).unwrap_or(defaults.retry_count),
            latency_ms: defaults.latency_ms,
        }
    }

    /// Absolute URL for an endpoint such as `posts/3`.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.trim_start_matches('/'))
    }
}

fn parse_bool(raw: Option<&str>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_u32(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse().ok()
}
