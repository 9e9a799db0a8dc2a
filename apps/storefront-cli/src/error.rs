//! # CLI Error Types
//!
//! Two error types live at the application boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Storefront                             │
//! │                                                                         │
//! │  Startup                                                                │
//! │  ───────                                                                │
//! │  config file unreadable / bad TOML / invalid product ──► CliError      │
//! │                                                   (process exits)       │
//! │                                                                         │
//! │  Menu loop                                                              │
//! │  ─────────                                                              │
//! │  commands::place_order(...)                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CoreError::InsufficientStock ──► ApiError { code, message }           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  menu prints message, loop continues                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::CoreError;
use thiserror::Error;

// =============================================================================
// CLI Error
// =============================================================================

/// Failures that stop the application.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading the config file or the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for the catalog schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configured product was rejected by the core.
    #[error("Invalid product in config: {0}")]
    Catalog(#[from] CoreError),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// =============================================================================
// API Error
// =============================================================================

/// Error returned by the menu entry points in [`crate::commands`].
///
/// ## Serialization
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Not enough stock for Google Pixel 7. Available: 2, Requested: 3"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes, one per core error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Bad argument (non-positive quantity, empty name, ...)
    ValidationError,

    /// Product is deactivated
    NotActive,

    /// Not enough stock
    InsufficientStock,

    /// Per-order maximum exceeded
    LimitExceeded,

    /// Product not held by the store
    NotFound,

    /// Nothing to list
    NoActiveProducts,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidArgument(_) => ErrorCode::ValidationError,
            CoreError::NotActive(_) => ErrorCode::NotActive,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::LimitExceeded { .. } => ErrorCode::LimitExceeded,
            CoreError::ProductNotFound(_) => ErrorCode::NotFound,
            CoreError::NoActiveProducts => ErrorCode::NoActiveProducts,
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_maps_to_code() {
        let err: ApiError = CoreError::NoActiveProducts.into();
        assert_eq!(err.code, ErrorCode::NoActiveProducts);
        assert_eq!(err.message, "No active products in the store");

        let err: ApiError = CoreError::LimitExceeded {
            name: "Shipping".to_string(),
            maximum: 1,
            requested: 2,
        }
        .into();
        assert_eq!(err.code, ErrorCode::LimitExceeded);
    }

    #[test]
    fn test_serialized_shape() {
        let err: ApiError = CoreError::InsufficientStock {
            name: "Google Pixel 7".to_string(),
            available: 2,
            requested: 3,
        }
        .into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INSUFFICIENT_STOCK");
        assert_eq!(
            json["message"],
            "Not enough stock for Google Pixel 7. Available: 2, Requested: 3"
        );
    }
}
