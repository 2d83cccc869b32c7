//! Store-specific error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error payload returned by the remote store alongside a non-2xx status.
///
/// The store reports failures as a JSON object; only `message` is always
/// present. The payload is carried verbatim so callers can surface it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorDetail {
    /// Wrap a bare message when the store did not send a structured payload.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: None,
            hint: None,
        }
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(code) = &self.code {
            write!(f, " (code {})", code)?;
        }
        Ok(())
    }
}

/// Errors that can occur while talking to the remote store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store received the request and rejected it (constraint
    /// violation, bad filter, missing grant, ...).
    #[error("store rejected request: {0}")]
    Backend(ErrorDetail),

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded into the expected rows.
    #[error("failed to decode store response: {0}")]
    Decode(String),

    /// The configured store URL is unusable.
    #[error("invalid store URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The configured API key cannot be sent as an HTTP header.
    #[error("store API key contains bytes that cannot be sent in a header")]
    InvalidApiKey,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
