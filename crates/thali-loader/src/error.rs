//! # Load Error Types
//!
//! Everything that can stop a menu from being installed.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Load Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Payload             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Config         │  │  Transport      │  │  Envelope (stage 1)     │ │
//! │  │  InvalidUrl     │  │  Status         │  │  MissingData (stage 1)  │ │
//! │  │                 │  │                 │  │  Payload (stage 2)      │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The user never sees these distinctions; the browser collapses every
//! variant into one message. They exist for the logs.

use thiserror::Error;

/// Result type alias for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid or unreadable configuration.
    #[error("Invalid loader configuration: {0}")]
    Config(String),

    /// Endpoint could not be turned into a request URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with something other than 200.
    #[error("Unexpected HTTP status {status}")]
    Status { status: u16 },

    // =========================================================================
    // Payload Errors
    // =========================================================================
    /// Stage 1: the response body is not a JSON object.
    #[error("Malformed response envelope: {0}")]
    Envelope(String),

    /// Stage 1: the envelope has no usable `data` field.
    #[error("Response envelope has no `data` field")]
    MissingData,

    /// Stage 2: the inner document did not decode into a category list.
    #[error("Malformed menu payload: {0}")]
    Payload(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Transport(err.to_string())
    }
}

/// Bare JSON errors come from the inner document; the envelope stage maps its
/// own errors explicitly.
impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Payload(err.to_string())
    }
}

impl From<url::ParseError> for LoadError {
    fn from(err: url::ParseError) -> Self {
        LoadError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for LoadError {
    fn from(err: toml::de::Error) -> Self {
        LoadError::Config(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl LoadError {
    /// The request itself failed or was refused.
    pub fn is_transport(&self) -> bool {
        matches!(self, LoadError::Transport(_) | LoadError::Status { .. })
    }

    /// The server answered 200 but the body was unusable.
    pub fn is_payload(&self) -> bool {
        matches!(
            self,
            LoadError::Envelope(_) | LoadError::MissingData | LoadError::Payload(_)
        )
    }

    /// Short category name for the `kind` field of failure logs. Whatever
    /// is neither transport nor payload is a config problem.
    pub fn kind(&self) -> &'static str {
        if self.is_transport() {
            "transport"
        } else if self.is_payload() {
            "payload"
        } else {
            "config"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert!(LoadError::Transport("connection refused".into()).is_transport());
        assert!(LoadError::Status { status: 503 }.is_transport());
        assert!(LoadError::MissingData.is_payload());
        assert!(LoadError::Envelope("eof".into()).is_payload());
        assert!(LoadError::Payload("bad".into()).is_payload());

        assert!(!LoadError::MissingData.is_transport());
        assert!(!LoadError::Status { status: 404 }.is_payload());
    }

    #[test]
    fn test_kind() {
        assert_eq!(LoadError::Status { status: 500 }.kind(), "transport");
        assert_eq!(LoadError::MissingData.kind(), "payload");
        assert_eq!(LoadError::Config("shop_id".into()).kind(), "config");
        assert_eq!(LoadError::InvalidUrl("relative".into()).kind(), "config");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LoadError::Status { status: 502 }.to_string(),
            "Unexpected HTTP status 502"
        );
        assert_eq!(
            LoadError::MissingData.to_string(),
            "Response envelope has no `data` field"
        );
    }

    #[test]
    fn test_json_error_maps_to_payload() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(LoadError::from(err), LoadError::Payload(_)));
    }
}
