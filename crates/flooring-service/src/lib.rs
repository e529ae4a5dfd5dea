//! # flooring-service: Order Lifecycle for Flooring Orders
//!
//! [`OrderService`] is the only way the CLI touches orders. It turns raw text
//! into validated domain values, calls the data store, and writes an audit
//! entry for every attempt, successful or not.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  create_order ──► [validated, unpersisted] ── submit_order ──┐          │
//! │                                                              ▼          │
//! │                                                        [persisted]      │
//! │                                                         │       │       │
//! │           order_to_edit ─► edit_order ─► change_order ──┘       │       │
//! │                                                                 │       │
//! │           order_to_remove ─────────────► remove_order ──► [removed]     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dependencies Are Injected
//! The service is generic over its [`OrderStore`](flooring_store::OrderStore)
//! and [`AuditLog`](flooring_store::AuditLog), so tests run it against a
//! scratch directory and an in-memory audit log.

pub mod error;
pub mod service;

pub use error::{ServiceError, ServiceResult};
pub use service::{OrderEdit, OrderService};
