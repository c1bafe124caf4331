//! Submission of a serialized setup form
//!
//! The destination answers a successful save with a redirect. Every other
//! status, including `200` (which renders an HTML error page), is a failure.

use crate::form::FormPayload;
use crate::SetupError;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::Client;
use thiserror::Error;
use url::Url;

/// Maximum number of response body bytes kept for diagnostics
pub const DIAGNOSTIC_LIMIT: usize = 500;

/// A submission the destination did not accept
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("expected a redirect, got status {status}; body: {snippet}")]
    Rejected { status: u16, snippet: String },
}

/// POSTs the url-encoded payload once, without following redirects
///
/// No retries: a non-redirect answer is terminal for this call.
pub async fn submit_payload(
    client: &Client,
    url: &Url,
    cookie: &str,
    payload: &FormPayload,
) -> Result<(), SetupError> {
    let body = payload.encode();
    tracing::info!(
        "Submitting {} bytes to {} (fingerprint {})",
        body.len(),
        url,
        payload.fingerprint()
    );

    let response = client
        .post(url.clone())
        .header(COOKIE, cookie)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body)
        .send()
        .await
        .map_err(|source| SetupError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status.is_redirection() {
        tracing::info!("Submission accepted ({})", status);
        return Ok(());
    }

    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!("Could not read rejected submission body: {}", e);
            Default::default()
        }
    };
    let snippet = diagnostic_snippet(&String::from_utf8_lossy(&bytes));
    tracing::warn!("Submission rejected with status {}", status);

    Err(SubmissionError::Rejected {
        status: status.as_u16(),
        snippet,
    }
    .into())
}

/// Cuts a response body down to at most `DIAGNOSTIC_LIMIT` bytes
///
/// The cut lands on a character boundary; `...` marks a truncated body.
pub fn diagnostic_snippet(body: &str) -> String {
    if body.len() <= DIAGNOSTIC_LIMIT {
        return body.to_string();
    }

    let mut end = DIAGNOSTIC_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
