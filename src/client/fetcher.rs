//! HTTP fetching of the league setup page
//!
//! This module handles:
//! - Building the HTTP client with user agent, timeouts and redirects disabled
//! - GET requests for the setup page markup

use crate::config::ClientConfig;
use crate::SetupError;
use reqwest::header::COOKIE;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// Redirects are never followed: a redirect is the success signal for
/// submissions and a login bounce for page fetches, and both must be seen.
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(Policy::none())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the raw setup page markup
///
/// Only `200 OK` counts as a page; anything else (a redirect to the login
/// page, most often) is reported as `UnexpectedStatus`.
pub async fn fetch_setup_page(client: &Client, url: &Url, cookie: &str) -> Result<String, SetupError> {
    tracing::info!("Fetching league setup page: {}", url);

    let response = client
        .get(url.clone())
        .header(COOKIE, cookie)
        .send()
        .await
        .map_err(|source| SetupError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(SetupError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| SetupError::Http {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!("Fetched {} bytes of setup markup", body.len());
    Ok(body)
}
