//! # API Error Type
//!
//! Unified error type for browser commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Thali                                  │
//! │                                                                         │
//! │  REPL                        Commands                                   │
//! │  ────                        ────────                                   │
//! │                                                                         │
//! │  "add 3"                                                                │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Load failed? ─── CoreError::MenuUnavailable ──┐                 │  │
//! │  │         │                                      │  (cause already │  │
//! │  │         ▼                                      ▼   logged)       │  │
//! │  │  Not ready / no such row? ── CoreError ───── ApiError ──────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Load failures all read the same to the user; the cause is in the logs.

use serde::Serialize;
use thali_core::CoreError;

/// The one message shown when the menu could not be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Error fetching data";

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Item not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The menu fetch is still outstanding
    MenuLoading,

    /// The menu fetch failed; nothing to browse
    MenuUnavailable,

    /// Referenced row does not exist
    NotFound,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// The generic load failure.
    pub fn menu_unavailable() -> Self {
        ApiError::new(ErrorCode::MenuUnavailable, LOAD_FAILED_MESSAGE)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MenuLoading => ApiError::new(ErrorCode::MenuLoading, "Loading..."),
            CoreError::MenuUnavailable { reason } => {
                tracing::debug!(%reason, "Command rejected, menu unavailable");
                ApiError::menu_unavailable()
            }
            // Rows are numbered from 1 on screen
            CoreError::NoVisibleItemAt { position } => {
                ApiError::not_found("Item", &format!("#{}", position + 1))
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
