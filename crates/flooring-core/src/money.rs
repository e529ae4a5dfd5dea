//! # Money Module
//!
//! `Money` (whole cents) and `TaxRate` (basis points) for order pricing.
//!
//! ## Rounding Points
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  rate per sq ft (cents) × area (Decimal)                                │
//! │      = 225 × 249.0 = 56025.0 cents         ◄── rounded once, half up    │
//! │                                                                         │
//! │  (material + labor) × bps / 10000                                       │
//! │      = 108315 × 825 / 10000 = 8935.98...   ◄── rounded once, half up    │
//! │                                                                         │
//! │  total = material + labor + tax            ◄── exact                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use flooring_core::money::Money;
//!
//! let cost_per_sqft = Money::parse("cost", "2.25").unwrap();
//! assert_eq!(cost_per_sqft.cents(), 225);
//! assert_eq!(cost_per_sqft.to_string(), "$2.25");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::Area;
use crate::validation::ValidationResult;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.cost_per_sqft ───┐                                             │
/// │                           ├──► × Area ──► material / labor cost         │
/// │  Product.labor_per_sqft ──┘                    │                        │
/// │                                                ▼                        │
/// │                         subtotal ──► calculate_tax(rate) ──► total      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use flooring_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal dollar amount to Money, rounding half away from zero.
    ///
    /// `None` if the amount does not fit in `i64` cents.
    pub fn from_decimal(amount: Decimal) -> Option<Self> {
        amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|c| c.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|c| c.to_i64())
            .map(Money)
    }

    /// Parses a non-negative dollar amount such as `"2.25"` from a reference file.
    ///
    /// ## Example
    /// ```rust
    /// use flooring_core::money::Money;
    ///
    /// assert_eq!(Money::parse("cost", "2.25").unwrap().cents(), 225);
    /// assert!(Money::parse("cost", "-1").is_err());
    /// assert!(Money::parse("cost", "2.255").is_err());
    /// ```
    pub fn parse(field: &str, text: &str) -> ValidationResult<Self> {
        let amount = parse_cents_precision(field, text)?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValidationError::invalid_format(field, "must not be negative"));
        }
        Money::from_decimal(amount).ok_or_else(|| ValidationError::TooLarge {
            field: field.to_string(),
        })
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The amount as a two-place decimal (`1099` → `10.99`), as written to order files.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Addition, `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Tax on this amount at `rate`, rounded half up to whole cents.
    ///
    /// ## Example
    /// ```rust
    /// use flooring_core::money::{Money, TaxRate};
    ///
    /// let subtotal = Money::from_cents(1000); // $10.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(825)); // 8.25%
    ///
    /// // $10.00 × 8.25% = $0.825 → rounds to $0.83
    /// assert_eq!(tax, Some(Money::from_cents(83)));
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Option<Money> {
        // i128 keeps large subtotals from overflowing before the division
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        i64::try_from(tax_cents).ok().map(Money)
    }

    /// Multiplies a per-square-foot rate by an area.
    ///
    /// ## Example
    /// ```rust
    /// use flooring_core::money::Money;
    /// use flooring_core::types::Area;
    ///
    /// let area = Area::parse("249.0").unwrap();
    /// let material = Money::from_cents(225).times_area(area);
    /// assert_eq!(material, Some(Money::from_cents(56_025))); // $560.25
    /// ```
    pub fn times_area(&self, area: Area) -> Option<Money> {
        self.to_decimal()
            .checked_mul(area.value())
            .and_then(Money::from_decimal)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// A state tax rate in hundredths of a percent.
///
/// The tax file stores `8.25`; that is held as `825`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Parses a percentage such as `"8.25"` into basis points.
    ///
    /// ## Example
    /// ```rust
    /// use flooring_core::money::TaxRate;
    ///
    /// assert_eq!(TaxRate::parse("tax rate", "8.25").unwrap().bps(), 825);
    /// assert_eq!(TaxRate::parse("tax rate", "6").unwrap().bps(), 600);
    /// assert!(TaxRate::parse("tax rate", "abc").is_err());
    /// assert!(TaxRate::parse("tax rate", "8.255").is_err());
    /// ```
    pub fn parse(field: &str, text: &str) -> ValidationResult<Self> {
        let percentage = parse_cents_precision(field, text)?;
        percentage
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|bps| bps.to_u32())
            .map(TaxRate)
            .ok_or_else(|| ValidationError::invalid_format(field, "must be a percentage between 0 and 42949672"))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// The rate as a two-place percentage (`825` → `8.25`).
    pub fn percentage(&self) -> Decimal {
        Decimal::new(self.0 as i64, 2)
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Decimal Parsing
// =============================================================================

/// Parses decimal text, accepting the `"123."` and `".5"` spellings users type.
pub(crate) fn parse_decimal(field: &str, text: &str) -> ValidationResult<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let text = text.strip_suffix('.').unwrap_or(text);
    let normalized = if text.starts_with('.') {
        format!("0{text}")
    } else {
        text.to_string()
    };

    Decimal::from_str(&normalized)
        .map_err(|e| ValidationError::invalid_format(field, e.to_string()))
}

/// Parses a reference-file amount that must be exact to two decimal places.
///
/// `2.10` and `2.100` are accepted; `2.105` is rejected rather than rounded.
fn parse_cents_precision(field: &str, text: &str) -> ValidationResult<Decimal> {
    let amount = parse_decimal(field, text)?;
    if amount.normalize().scale() > 2 {
        return Err(ValidationError::invalid_format(
            field,
            "must have at most two decimal places",
        ));
    }
    Ok(amount)
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
