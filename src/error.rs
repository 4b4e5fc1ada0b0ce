//! Error types for the SemanticPen client
//!
//! This module provides the error handling for the library, including:
//! - Local validation errors raised before any network call
//! - Structured API errors carrying the original HTTP status code
//! - A distinguished rate-limit error with an optional retry-after hint
//! - Polling outcomes (generation failure, attempt budget exhausted)
//!
//! All non-2xx responses funnel through [`Error::from_response`], the single
//! translation point from a raw response to the error taxonomy.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for SemanticPen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the SemanticPen client
///
/// Input validation failures, API failures, and orchestration failures are
/// distinct variants and never conflated. Nothing is silently swallowed or
/// auto-recovered; every failure surfaces to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation failed before any network call was made
    #[error("validation error for field '{field}': {message}")]
    Validation {
        /// The input field that failed validation (e.g., "target_keyword")
        field: String,
        /// Human-readable description of the problem
        message: String,
    },

    /// The API returned a non-success HTTP status
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The API rejected the request due to throttling (HTTP 429)
    ///
    /// The client never auto-retries on this; surfacing the hint is the
    /// full contract.
    #[error(transparent)]
    RateLimit(#[from] RateLimitError),

    /// Network-level failure (connect, TLS, body read, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The configured request timeout elapsed before a response arrived
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Request body or response payload could not be (de)serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A polled article snapshot reported status `failed`
    #[error("article generation failed: {message}")]
    GenerationFailed {
        /// The error message reported by the article snapshot
        message: String,
    },

    /// The poll attempt budget was exhausted without a terminal state
    #[error("article generation timeout after {attempts} attempts")]
    PollTimeout {
        /// Number of poll attempts that were made
        attempts: u32,
    },

    /// The operation was aborted through a cancellation token
    #[error("operation cancelled")]
    Cancelled,
}

/// Structured API error response
///
/// Parsed from a non-success response body where possible; when the body is
/// not a structured error, `message` carries the raw body text. Always
/// carries the HTTP status code of the response it was built from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status code of the failed response
    #[serde(rename = "statusCode", default)]
    pub status_code: u16,

    /// Human-readable error message
    #[serde(default)]
    pub message: String,

    /// Optional additional context about the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(
                f,
                "API error {}: {} ({})",
                self.status_code, self.message, details
            ),
            None => write!(f, "API error {}: {}", self.status_code, self.message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Rate limit error response (HTTP 429)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitError {
    /// Human-readable error message
    #[serde(default)]
    pub message: String,

    /// Server-provided hint, in seconds, for when to retry
    #[serde(rename = "retryAfter", default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

impl fmt::Display for RateLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.retry_after {
            Some(secs) => write!(
                f,
                "rate limit exceeded: {} (retry after {} seconds)",
                self.message, secs
            ),
            None => write!(f, "rate limit exceeded: {}", self.message),
        }
    }
}

impl std::error::Error for RateLimitError {}

impl Error {
    /// Translate a non-success HTTP response into the error taxonomy.
    ///
    /// Attempts to parse the body as a structured API error; if that fails,
    /// synthesizes one whose message is the raw body text. HTTP 429 becomes
    /// the distinguished [`RateLimitError`] variant, everything else an
    /// [`ApiError`]. The original status code is always preserved.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        if status == StatusCode::TOO_MANY_REQUESTS {
            let rate_limit = match serde_json::from_slice::<RateLimitError>(body) {
                Ok(parsed) => parsed,
                Err(_) => RateLimitError {
                    message: String::from_utf8_lossy(body).into_owned(),
                    retry_after: None,
                },
            };
            return Error::RateLimit(rate_limit);
        }

        match serde_json::from_slice::<ApiError>(body) {
            Ok(mut api_error) => {
                api_error.status_code = status.as_u16();
                Error::Api(api_error)
            }
            Err(_) => Error::Api(ApiError {
                status_code: status.as_u16(),
                message: String::from_utf8_lossy(body).into_owned(),
                details: None,
            }),
        }
    }
}
