//! # Service Error Types
//!
//! The five failure kinds the order service reports.
//!
//! ## Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError (core)              → InvalidInput                     │
//! │  CoreError::UnknownProduct           → InvalidInput                     │
//! │  CoreError::DateAlreadyPassed        → DateAlreadyPassed                │
//! │  CoreError::TaxCodeViolation         → TaxCodeViolation                 │
//! │  lookup miss (edit / remove)         → NoSuchItem                       │
//! │  StoreError (any)                    → Persistence (kind preserved)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use flooring_core::{CoreError, ValidationError};
use flooring_store::StoreError;

/// Errors returned by [`OrderService`](crate::OrderService).
///
/// Every variant displays as a message fit for the user.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or unknown user data.
    #[error("{0}")]
    InvalidInput(String),

    /// The order date is not after today.
    #[error("{0}")]
    DateAlreadyPassed(String),

    /// The state has no row in the tax table.
    #[error("{0}")]
    TaxCodeViolation(String),

    /// No stored order matches the lookup.
    #[error("{0}")]
    NoSuchItem(String),

    /// The data store failed; the original error is kept intact.
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::InvalidInput(err.to_string())
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DateAlreadyPassed { .. } => ServiceError::DateAlreadyPassed(err.to_string()),
            CoreError::TaxCodeViolation { .. } => ServiceError::TaxCodeViolation(err.to_string()),
            CoreError::UnknownProduct { .. } | CoreError::Validation(_) => {
                ServiceError::InvalidInput(err.to_string())
            }
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
