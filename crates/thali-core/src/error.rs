//! # Error Types
//!
//! Domain-specific error types for thali-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  thali-core errors (this file)                                         │
//! │  ├── CoreError        - Session state / lookup failures                │
//! │  └── ValidationError  - Menu integrity findings                        │
//! │                                                                         │
//! │  thali-loader errors (separate crate)                                  │
//! │  └── LoadError        - Fetch and payload decode failures              │
//! │                                                                         │
//! │  Browser API errors (in app)                                           │
//! │  └── ApiError         - What the terminal front end sees               │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → Terminal; ValidationError → warn! log    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Selection and cart operations themselves never fail. These errors only
//! come from asking a session that is not ready yet, or from picking a row
//! past the end of the visible list.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core session errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The menu fetch is still outstanding.
    #[error("Menu is still loading")]
    MenuLoading,

    /// The menu fetch failed; the session will never become ready.
    #[error("Menu unavailable: {reason}")]
    MenuUnavailable { reason: String },

    /// No visible item at the zero-based `position`.
    ///
    /// ## When This Occurs
    /// - Row number typed from a list that has since been filtered
    /// - Row number past the end of the active category
    #[error("No visible item at position {position}")]
    NoVisibleItemAt { position: usize },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Menu integrity findings.
///
/// Produced by [`crate::validation::audit_menu`]. The loader reports these as
/// warnings; a menu with issues is still installed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Duplicate identifier.
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// Invalid format (e.g., a price that is not a decimal number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NoVisibleItemAt { position: 4 };
        assert_eq!(err.to_string(), "No visible item at position 4");

        let err = CoreError::MenuUnavailable {
            reason: "status 503".to_string(),
        };
        assert_eq!(err.to_string(), "Menu unavailable: status 503");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "category name".to_string(),
        };
        assert_eq!(err.to_string(), "category name is required");

        let err = ValidationError::Duplicate {
            field: "category id".to_string(),
            value: "7".to_string(),
        };
        assert_eq!(err.to_string(), "category id '7' already exists");
    }
}
