//! Session credential seam
//!
//! Acquiring a logged-in session happens elsewhere (a browser, a cookie
//! jar, an environment variable). This crate only needs the resulting
//! `Cookie` header value.

use thiserror::Error;

/// Errors raised while obtaining a session credential
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Environment variable {0} is not set or empty")]
    Missing(String),

    #[error("Session provider failed: {0}")]
    Provider(String),
}

/// Supplies the `Cookie` header for authenticated requests
pub trait SessionProvider: Send + Sync {
    /// Returns the full header value, e.g. `FX_RM=abc; other=def`
    fn cookie_header(&self) -> Result<String, SessionError>;
}

/// Reads the cookie header from an environment variable on every request
#[derive(Debug, Clone)]
pub struct EnvSession {
    var: String,
}

impl EnvSession {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl SessionProvider for EnvSession {
    fn cookie_header(&self) -> Result<String, SessionError> {
        match std::env::var(&self.var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(SessionError::Missing(self.var.clone())),
        }
    }
}

/// A fixed cookie header
#[derive(Debug, Clone)]
pub struct StaticSession(String);

impl StaticSession {
    pub fn new(cookie_header: impl Into<String>) -> Self {
        Self(cookie_header.into())
    }
}

impl SessionProvider for StaticSession {
    fn cookie_header(&self) -> Result<String, SessionError> {
        Ok(self.0.clone())
    }
}
