//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::ClientBuilder;

use crate::config::{ScrapeConfig, DEFAULT_REQUEST_HEADERS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used to fetch directory pages.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the scrape config
/// - Per-request timeout from the scrape config
/// - Browser-like Accept / Accept-Language headers
///
/// # Errors
///
/// Returns `InitializationError::InvalidHeader` if a default header cannot be
/// encoded, or `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &ScrapeConfig) -> Result<Arc<reqwest::Client>, InitializationError> {
    let mut headers = HeaderMap::new();
    for (name, value) in DEFAULT_REQUEST_HEADERS {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| InitializationError::InvalidHeader {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| InitializationError::InvalidHeader {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        headers.insert(header_name, header_value);
    }

    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .build()?;
    Ok(Arc::new(client))
}
