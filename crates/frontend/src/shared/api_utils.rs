//! API utilities: where the inference server lives
//!
//! The base URL is resolved once at startup, first hit wins:
//! 1. `GET /api/config` on the origin that served the page (the backend host)
//! 2. `VERIFINEWS_API_BASE_URL` captured at build time
//! 3. [`DEFAULT_API_BASE_URL`]

use contracts::system::ClientConfig;
use gloo_net::http::Request;

/// Inference server address used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Runtime client configuration served by the backend host
const CLIENT_CONFIG_PATH: &str = "/api/config";

/// Trim a configured URL and drop the trailing `/`.
///
/// Returns `None` for blank values so they fall through to the next source.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Pick the base URL from the runtime and build-time candidates
pub fn pick_api_base(runtime: Option<&str>, build_time: Option<&str>) -> String {
    runtime
        .and_then(normalize_base_url)
        .or_else(|| build_time.and_then(normalize_base_url))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Base URL without the runtime lookup
pub fn build_time_api_base() -> String {
    pick_api_base(None, option_env!("VERIFINEWS_API_BASE_URL"))
}

/// Fetch the client configuration from the page origin
pub async fn fetch_client_config() -> Result<ClientConfig, String> {
    let response = Request::get(CLIENT_CONFIG_PATH)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<ClientConfig>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Resolve the inference server base URL
pub async fn resolve_api_base() -> String {
    let runtime = match fetch_client_config().await {
        Ok(config) => Some(config.api_base_url),
        Err(e) => {
            log::debug!("runtime client config unavailable ({}), using build-time value", e);
            None
        }
    };
    pick_api_base(runtime.as_deref(), option_env!("VERIFINEWS_API_BASE_URL"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url(" http://10.1.1.1:8000/ "),
            Some("http://10.1.1.1:8000".to_string())
        );
        assert_eq!(normalize_base_url("   "), None);
        assert_eq!(normalize_base_url("/"), None);
    }

    #[test]
    fn test_runtime_wins() {
        assert_eq!(
            pick_api_base(Some("http://runtime:9000"), Some("http://build:8000")),
            "http://runtime:9000"
        );
    }

    #[test]
    fn test_blank_runtime_falls_through() {
        assert_eq!(
            pick_api_base(Some(""), Some("http://build:8000/")),
            "http://build:8000"
        );
    }

    #[test]
    fn test_default_when_nothing_configured() {
        assert_eq!(pick_api_base(None, None), DEFAULT_API_BASE_URL);
        assert_eq!(pick_api_base(Some(" "), Some("")), DEFAULT_API_BASE_URL);
    }
}
