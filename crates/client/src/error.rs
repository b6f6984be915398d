//! Error types for API and credential store operations
//!
//! Provides the error taxonomy surfaced to callers: network failures,
//! authorization failures, field-level validation errors, and server errors,
//! each carrying enough context for user-facing messaging.

use std::time::Duration;

use thiserror::Error;

/// Categories of API errors for callers that branch on class rather than
/// variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// No response reached the client (connection failure or timeout)
    Network,
    /// Authorization failure (401/403) after the refresh path is exhausted
    Auth,
    /// Client-side request error (4xx) with field-level messages from the
    /// backend
    Validation,
    /// Server-side failure (5xx)
    Server,
    /// Local misconfiguration or storage failure
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The bounded per-request timeout expired.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Authorization failed and could not be recovered by a token refresh.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The backend rejected the request (4xx). `body` preserves the backend's
    /// field-level error payload.
    #[error("validation failed (status {status})")]
    Validation {
        /// HTTP status code of the rejected request
        status: u16,
        /// Backend error payload, usually a map of field name to messages
        body: serde_json::Value,
    },

    /// The backend failed to handle the request (5xx).
    #[error("server error (status {status})")]
    Server {
        /// HTTP status code of the failed request
        status: u16,
        /// Raw response body, if any
        body: String,
    },

    /// The response body could not be decoded into the expected type.
    ///
    /// Categorized as [`ApiErrorCategory::Server`]: the request reached the
    /// backend and the backend answered, but with a payload that does not
    /// match its own contract.
    #[error("failed to decode response: {0}")]
    Parse(String),

    /// The credential store failed.
    #[error("credential store error: {0}")]
    Store(#[from] StoreError),

    /// The client was constructed with invalid input.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    #[must_use]
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Auth(_) => ApiErrorCategory::Auth,
            Self::Validation { .. } => ApiErrorCategory::Validation,
            Self::Server { .. } | Self::Parse(_) => ApiErrorCategory::Server,
            Self::Store(_) | Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// HTTP status associated with this error, when one exists
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { status, .. } | Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error denotes a missing resource (HTTP 404)
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Credential store errors
///
/// The store treats an absent key as a normal state, not an error, so these
/// only cover genuine backend failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend rejected the operation.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A stored value could not be encoded or decoded.
    #[error("stored value could not be encoded: {0}")]
    Serialization(#[from] serde_json::Error),
}
