//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Bad arguments (wrapped as InvalidArgument)     │
//! │                                                                         │
//! │  storefront-cli errors (app crate)                                     │
//! │  ├── CliError         - Config / terminal failures                     │
//! │  └── ApiError         - What the menu prints                           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Menu                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, quantities)
//! 3. Callers match on the variant, never on the message text

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An argument failed validation (empty name, negative price, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// The product has been deactivated and cannot be purchased.
    #[error("Product {0} is not active")]
    NotActive(String),

    /// Requested more units than the product currently holds.
    ///
    /// ## User Workflow
    /// ```text
    /// Order line (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Google Pixel 7", available: 3, requested: 5 }
    /// ```
    #[error("Not enough stock for {name}. Available: {available}, Requested: {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Requested more units than a limited product allows in one order.
    #[error("Only {maximum} of {name} allowed per order, requested {requested}")]
    LimitExceeded {
        name: String,
        maximum: i64,
        requested: i64,
    },

    /// The product is not held by the store.
    #[error("Product does not exist: {0}")]
    ProductNotFound(String),

    /// Every product in the store is inactive.
    #[error("No active products in the store")]
    NoActiveProducts,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the constructors and mutators before any state changes.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    MustNotBeNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
