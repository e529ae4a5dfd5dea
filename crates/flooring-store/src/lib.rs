//! # flooring-store: Data Store and Audit Log for Flooring Orders
//!
//! This crate owns the product catalog, the tax table and every order, plus
//! the audit trail. Collections live in memory between an import and an
//! export; the files under the data directory are the durable copy.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Flooring Data Flow                               │
//! │                                                                         │
//! │  OrderService (flooring-service)                                       │
//! │       │                    │                                            │
//! │       ▼                    ▼                                            │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  flooring-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │ FlatFileStore │    │  Repositories │    │  AuditLog    │   │   │
//! │  │   │  (store.rs)   │    │ (repository/) │    │  (audit.rs)  │   │   │
//! │  │   │               │    │               │    │              │   │   │
//! │  │   │ OrderStore    │───►│ order.rs      │    │ FileAuditLog │   │   │
//! │  │   │ trait impl    │    │ product.rs    │    │ MemoryAudit  │   │   │
//! │  │   │               │    │ tax.rs        │    │              │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  data/Products.txt, data/Taxes.txt, data/Orders/, data/audit.txt       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - File locations
//! - [`store`] - `OrderStore` trait and `FlatFileStore`
//! - [`repository`] - File formats (orders, products, taxes)
//! - [`audit`] - Audit log implementations
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod audit;
pub mod config;
pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use audit::{AuditLog, FileAuditLog, MemoryAuditLog};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use store::{FlatFileStore, OrderStore};
