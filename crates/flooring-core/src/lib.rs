//! # flooring-core: Pure Business Logic for Flooring Orders
//!
//! This crate is the **heart** of Flooring Orders. It contains the order
//! pricing rules and input validation as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Flooring Orders Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    flooring CLI (apps/)                         │   │
//! │  │        list ──► add ──► edit ──► remove ──► backup              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                flooring-service (OrderService)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ flooring-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │ validation│                  │   │
//! │  │   │   Order   │  │   Money   │  │  patterns │                  │   │
//! │  │   │  Product  │  │  TaxRate  │  │   rules   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CLOCK • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                flooring-store (Data Store + Audit Log)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Order, Product, StateTax, Area)
//! - [`money`] - Money and TaxRate with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Input format rules
//!
//! ## Example Usage
//!
//! ```rust
//! use flooring_core::money::{Money, TaxRate};
//!
//! let subtotal = Money::from_cents(108_315); // $1083.15
//! let tax = subtotal.calculate_tax(TaxRate::from_bps(825)); // 8.25%
//!
//! assert_eq!(tax, Some(Money::from_cents(8_936)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, TaxRate};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Order dates are entered, displayed and stored as `MM-DD-YYYY`.
pub const DATE_FORMAT: &str = "%m-%d-%Y";
