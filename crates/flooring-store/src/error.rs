//! # Store Error Types
//!
//! Error types for file import/export and order persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / malformed line                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds path, line and entity context         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ServiceError::Persistence ← Same StoreError, kind preserved           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CLI prints the message                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Data store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file or directory could not be read or written.
    ///
    /// ## When This Occurs
    /// - Products or taxes file is missing
    /// - Orders directory is not writable
    /// - Disk full
    #[error("Could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line of a data file could not be parsed.
    #[error("{}:{line}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The order (or reference row) to update, remove or price is not stored.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a Parse error for a 1-based line number.
    pub fn parse(path: impl AsRef<Path>, line: usize, reason: impl Into<String>) -> Self {
        StoreError::Parse {
            path: path.as_ref().to_path_buf(),
            line,
            reason: reason.into(),
        }
    }

    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
