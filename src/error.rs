//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum KisError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Configuration errors. Fatal — never retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),
}

/// Authorization endpoint errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The token endpoint returned a non-success status. The raw response
    /// body is kept for diagnostics. Not retried — the next call simply
    /// re-authorizes from scratch since nothing was cached.
    #[error("Token request rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The token endpoint answered but the body had no `access_token`.
    #[error("Malformed token response: {0}")]
    MalformedResponse(String),
}

/// HTTP-layer errors for proxied API calls.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Transport-level failure, including connect errors and the request
    /// timeout. Transient; retried only under the idempotent GET policy.
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The upstream API returned a non-success status.
    #[error("Upstream error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}
