// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};

use crate::error::{AppError, Result};
use crate::models::FetcherConfig;

/// Create a configured asynchronous HTTP client.
///
/// Every request carries headers that ask intermediaries not to serve a
/// cached copy. The User-Agent is set per request, not here.
pub fn create_async_client(config: &FetcherConfig) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))
}

/// User-Agent value with the per-request numeric suffix appended.
pub fn user_agent(prefix: &str, suffix: u32) -> String {
    format!("{} {}", prefix.trim_end(), suffix)
}

/// Map a transport failure into the crate error type.
pub fn connection_error(url: &str, error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::connection(format!("request to {url} timed out"))
    } else {
        AppError::connection(format!("request to {url} failed: {error}"))
    }
}
