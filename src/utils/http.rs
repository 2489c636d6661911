// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::config::CrawlerConfig;
use crate::error::{AppError, Result};

/// Create a configured asynchronous HTTP client.
///
/// Redirects are never followed: a redirect response is returned as-is,
/// so its own (usually empty) body is what gets scanned for links and
/// the redirect target is never crawled. This is intentional.
pub fn create_async_client(config: &CrawlerConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;
    Ok(client)
}

/// Fetch a page body into memory, bounded by `max_bytes`.
///
/// One GET, no retry. Non-success statuses are not errors; whatever body
/// the server sends back is returned. Only transport failures (connect,
/// timeout, protocol) and an oversized body fail the fetch.
pub async fn fetch_body(
    client: &reqwest::Client,
    url: &str,
    max_bytes: usize,
) -> Result<String> {
    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::fetch(url, e))?;

    let mut buf: Vec<u8> = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| AppError::fetch(url, e))?
    {
        if buf.len() + chunk.len() > max_bytes {
            return Err(AppError::fetch(
                url,
                format!("response body exceeds {max_bytes} bytes"),
            ));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}
