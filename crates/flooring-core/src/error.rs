//! # Error Types
//!
//! Domain-specific error types for flooring-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  flooring-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Malformed user input                           │
//! │                                                                         │
//! │  flooring-store errors (separate crate)                                │
//! │  └── StoreError       - File import/export failures                    │
//! │                                                                         │
//! │  flooring-service errors                                               │
//! │  └── ServiceError     - What the CLI displays                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ServiceError → CLI                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations.
///
/// Each variant carries enough context to be shown to the user directly.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The order date is today or earlier.
    ///
    /// ## When This Occurs
    /// - Creating an order for a date that is not strictly in the future
    #[error("The date entered ({date}) is not after today's date.")]
    DateAlreadyPassed { date: String },

    /// The state is well-formed but has no row in the tax table.
    #[error("State {state} is not present in the tax code file.")]
    TaxCodeViolation { state: String },

    /// The product type is not in the catalog.
    #[error("The product type {product_type} does not exist.")]
    UnknownProduct { product_type: String },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when raw text doesn't meet the format rules, before any
/// lookup against reference data happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., bad date, characters outside the allowed set).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is too large to price without overflowing.
    #[error("{field} is too large")]
    TooLarge { field: String },
}

impl ValidationError {
    /// Creates an InvalidFormat error for a field.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
