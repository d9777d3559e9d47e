// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{AppError, Result};

/// Create a configured blocking HTTP client.
pub fn create_client(config: &ClientConfig) -> Result<reqwest::blocking::Client> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page and return its body text.
///
/// Transport-level failures carry the attempted URL. Non-2xx responses are not
/// an error here: the platform signals "no such user" with an error page body,
/// which the caller detects by content.
pub fn fetch_text(client: &reqwest::blocking::Client, url: &str) -> Result<String> {
    log::debug!("GET {url}");
    let response = client
        .get(url)
        .send()
        .map_err(|e| AppError::network(url, e))?;
    response.text().map_err(|e| AppError::network(url, e))
}
