//! # Domain Types
//!
//! Core domain types used throughout Flooring Orders.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    StateTax     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product_type   │   │  state (key)    │   │  date + number  │       │
//! │  │  cost_per_sqft  │   │  state_name     │   │  customer_name  │       │
//! │  │  labor_per_sqft │   │  rate (bps)     │   │  state, product │       │
//! │  └────────┬────────┘   └────────┬────────┘   │  area           │       │
//! │           │                     │            │  derived costs  │       │
//! │           └──────── recalculate ┴──────────► └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Orders are identified by `(date, order_number)`. The number is `0` until
//! the store assigns one on insert.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::money::{parse_decimal, Money, TaxRate};
use crate::validation::{ValidationResult, AREA_PATTERN};
use crate::DATE_FORMAT;

// =============================================================================
// Area
// =============================================================================

/// Floor area in square feet. Always strictly positive.
///
/// Deserialization goes through [`Area::new`], so the rule holds for
/// values read back from storage too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Area(Decimal);

impl Area {
    /// Parses user-entered area text.
    ///
    /// ## Rules
    /// - Digits with an optional decimal point (`123`, `123.`, `123.45`, `.5`)
    /// - No sign, no exponent
    /// - Must be greater than zero
    ///
    /// ## Example
    /// ```rust
    /// use flooring_core::types::Area;
    ///
    /// assert!(Area::parse("249.0").is_ok());
    /// assert!(Area::parse(".5").is_ok());
    /// assert!(Area::parse("-3").is_err());
    /// assert!(Area::parse("0").is_err());
    /// ```
    pub fn parse(text: &str) -> ValidationResult<Self> {
        if !AREA_PATTERN.is_match(text) {
            return Err(ValidationError::invalid_format(
                "area",
                "must be a positive number of square feet",
            ));
        }
        Area::new(parse_decimal("area", text)?)
    }

    /// Wraps an already-parsed decimal, rejecting zero and negatives.
    pub fn new(value: Decimal) -> ValidationResult<Self> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::MustBePositive {
                field: "area".to_string(),
            });
        }
        Ok(Area(value))
    }

    /// Returns the area as a decimal.
    #[inline]
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Area {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Area::new(value)
    }
}

impl From<Area> for Decimal {
    fn from(area: Area) -> Self {
        area.0
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A flooring product from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog key, e.g. `Carpet`.
    pub product_type: String,

    /// Material cost per square foot.
    pub cost_per_sqft: Money,

    /// Labor cost per square foot.
    pub labor_cost_per_sqft: Money,
}

// =============================================================================
// State Tax
// =============================================================================

/// A row of the tax table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTax {
    /// State code, e.g. `TX`.
    pub state: String,

    /// Full state name, e.g. `Texas`.
    pub state_name: String,

    pub rate: TaxRate,
}

// =============================================================================
// Order
// =============================================================================

/// One customer purchase with its computed pricing.
///
/// ## Pricing
/// ```text
/// material_cost = area × cost_per_sqft        (rounded to cents)
/// labor_cost    = area × labor_cost_per_sqft  (rounded to cents)
/// tax           = (material + labor) × rate   (rounded to cents)
/// total         = material + labor + tax
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Assigned by the store on insert; `0` while unsubmitted.
    pub order_number: u32,

    pub date: NaiveDate,

    pub customer_name: String,

    pub state: String,

    /// Snapshot of the state's rate at the last recalculation.
    pub tax_rate: TaxRate,

    pub product_type: String,

    pub area: Area,

    pub cost_per_sqft: Money,

    pub labor_cost_per_sqft: Money,

    pub material_cost: Money,

    pub labor_cost: Money,

    pub tax: Money,

    pub total: Money,
}

impl Order {
    /// Order number of an order that has not been submitted yet.
    pub const UNASSIGNED: u32 = 0;

    /// Builds an unsubmitted order priced from the given reference rows.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use flooring_core::money::{Money, TaxRate};
    /// use flooring_core::types::{Area, Order, Product, StateTax};
    ///
    /// let carpet = Product {
    ///     product_type: "Carpet".to_string(),
    ///     cost_per_sqft: Money::from_cents(225),
    ///     labor_cost_per_sqft: Money::from_cents(210),
    /// };
    /// let texas = StateTax {
    ///     state: "TX".to_string(),
    ///     state_name: "Texas".to_string(),
    ///     rate: TaxRate::from_bps(825),
    /// };
    /// let date = NaiveDate::from_ymd_opt(2099, 12, 31).unwrap();
    ///
    /// let area = Area::parse("249.0").unwrap();
    /// let order = Order::new(date, "Jane Doe", area, &carpet, &texas).unwrap();
    /// assert_eq!(order.total.cents(), 117_251); // $1172.51
    /// ```
    ///
    /// ## Errors
    /// [`ValidationError::TooLarge`] if any cost overflows whole cents.
    pub fn new(
        date: NaiveDate,
        customer_name: impl Into<String>,
        area: Area,
        product: &Product,
        tax: &StateTax,
    ) -> ValidationResult<Self> {
        let mut order = Order {
            order_number: Self::UNASSIGNED,
            date,
            customer_name: customer_name.into(),
            state: tax.state.clone(),
            tax_rate: tax.rate,
            product_type: product.product_type.clone(),
            area,
            cost_per_sqft: product.cost_per_sqft,
            labor_cost_per_sqft: product.labor_cost_per_sqft,
            material_cost: Money::zero(),
            labor_cost: Money::zero(),
            tax: Money::zero(),
            total: Money::zero(),
        };
        order.recalculate(product, tax)?;
        Ok(order)
    }

    /// Re-derives every computed field from the current area and the given rows.
    ///
    /// The caller looks the rows up by `self.product_type` and `self.state`.
    /// On error the order is left as it was.
    pub fn recalculate(&mut self, product: &Product, tax: &StateTax) -> ValidationResult<()> {
        let too_large = || ValidationError::TooLarge {
            field: "area".to_string(),
        };

        let material_cost = product.cost_per_sqft.times_area(self.area).ok_or_else(too_large)?;
        let labor_cost = product
            .labor_cost_per_sqft
            .times_area(self.area)
            .ok_or_else(too_large)?;
        let subtotal = material_cost.checked_add(labor_cost).ok_or_else(too_large)?;
        let tax_amount = subtotal.calculate_tax(tax.rate).ok_or_else(too_large)?;
        let total = subtotal.checked_add(tax_amount).ok_or_else(too_large)?;

        self.cost_per_sqft = product.cost_per_sqft;
        self.labor_cost_per_sqft = product.labor_cost_per_sqft;
        self.tax_rate = tax.rate;
        self.material_cost = material_cost;
        self.labor_cost = labor_cost;
        self.tax = tax_amount;
        self.total = total;
        Ok(())
    }

    /// Whether the store has assigned a number yet.
    #[inline]
    pub fn is_submitted(&self) -> bool {
        self.order_number != Self::UNASSIGNED
    }

    /// The order date as `MM-DD-YYYY`.
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
