//! # Validation Module
//!
//! Input format rules for Flooring Orders.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE (pure)                                           │
//! │  ├── Format checks: date, name, state, area, order number              │
//! │  └── Temporal rule: date strictly after "today" (passed in)            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: OrderService (flooring-service)                              │
//! │  ├── Referential checks: state in tax table, product in catalog        │
//! │  └── Audit entry for every rejection                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: FlatFileStore                                                │
//! │  └── Only ever sees validated orders                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use flooring_core::validation::{parse_order_date, validate_state_code};
//!
//! let date = parse_order_date("12-31-2099").unwrap();
//! assert_eq!(date.to_string(), "2099-12-31");
//!
//! assert!(validate_state_code("TX").is_ok());
//! assert!(validate_state_code("tx").is_err());
//! ```

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::DATE_FORMAT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Patterns
// =============================================================================

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(1[0-2]|0[1-9])-(3[01]|[12][0-9]|0[1-9])-[0-9]{4}$")
        .expect("Invalid date regex pattern")
});

// ASCII whitespace only, as in the stored files
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z \t\n\x0B\x0C\r,.`]+$").expect("Invalid name regex pattern")
});

static STATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z]+$").expect("Invalid state regex pattern"));

pub(crate) static AREA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+\.?[0-9]*|\.[0-9]+)$").expect("Invalid area regex pattern")
});

static ORDER_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid order number regex pattern"));

// =============================================================================
// Dates
// =============================================================================

/// Parses an order date entered as `MM-DD-YYYY`.
///
/// ## Rules
/// - Month 01-12, day 01-31, four-digit year
/// - Must be a real calendar date (`02-30-2099` is rejected)
pub fn parse_order_date(text: &str) -> ValidationResult<NaiveDate> {
    if !DATE_PATTERN.is_match(text) {
        return Err(ValidationError::invalid_format("date", "expected MM-DD-YYYY"));
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| ValidationError::invalid_format("date", "not a calendar date"))
}

/// Checks that a new order's date is strictly after `today`.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Add Order                                                              │
/// │                                                                         │
/// │  User enters date: 06-01-2030                                          │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_order_date ── bad format? → InvalidInput                        │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  ensure_future_date ← THIS FUNCTION                                    │
/// │       │                                                                 │
/// │       ├── date <= today? → DateAlreadyPassed                           │
/// │       │                                                                 │
/// │       └── OK → continue with name, state, product checks               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn ensure_future_date(date: NaiveDate, today: NaiveDate) -> CoreResult<()> {
    if date <= today {
        return Err(CoreError::DateAlreadyPassed {
            date: date.format(DATE_FORMAT).to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty
/// - Letters, whitespace, comma, period and backtick only
///
/// ## Example
/// ```rust
/// use flooring_core::validation::validate_customer_name;
///
/// assert!(validate_customer_name("Acme, Inc.").is_ok());
/// assert!(validate_customer_name("").is_err());
/// assert!(validate_customer_name("R2-D2").is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "customer name".to_string(),
        });
    }

    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::invalid_format(
            "customer name",
            "may only contain letters, spaces, commas, periods and backticks",
        ));
    }

    Ok(())
}

/// Validates the shape of a state code (two or more uppercase letters).
///
/// Whether the state exists in the tax table is checked by the service.
pub fn validate_state_code(state: &str) -> ValidationResult<()> {
    if !STATE_PATTERN.is_match(state) {
        return Err(ValidationError::invalid_format(
            "state",
            "must be two or more uppercase letters",
        ));
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses an order number entered for removal.
///
/// ## Rules
/// - ASCII digits only, no sign
/// - Must fit in a `u32`
pub fn parse_order_number(text: &str) -> ValidationResult<u32> {
    if !ORDER_NUMBER_PATTERN.is_match(text) {
        return Err(ValidationError::invalid_format("order number", "digits only"));
    }

    text.parse()
        .map_err(|_| ValidationError::invalid_format("order number", "too large"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_order_date() {
        assert_eq!(parse_order_date("12-31-2099").unwrap(), ymd(2099, 12, 31));
        assert_eq!(parse_order_date("01-01-2020").unwrap(), ymd(2020, 1, 1));

        assert!(parse_order_date("2099-12-31").is_err());
        assert!(parse_order_date("13-01-2099").is_err());
        assert!(parse_order_date("1-1-2099").is_err());
        assert!(parse_order_date("00-10-2099").is_err());
        assert!(parse_order_date("12-32-2099").is_err());
        assert!(parse_order_date("02-30-2099").is_err());
        assert!(parse_order_date("").is_err());
        assert!(parse_order_date(" 12-31-2099").is_err());
    }

    #[test]
    fn test_ensure_future_date() {
        let today = ymd(2026, 10, 18);
        assert!(ensure_future_date(ymd(2026, 10, 19), today).is_ok());

        let err = ensure_future_date(today, today).unwrap_err();
        assert!(matches!(err, CoreError::DateAlreadyPassed { .. }));
        assert!(ensure_future_date(ymd(2020, 1, 1), today).is_err());
    }

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Jane Doe").is_ok());
        assert!(validate_customer_name("O`Brien, Sr.").is_ok());

        assert_eq!(
            validate_customer_name(""),
            Err(ValidationError::Required {
                field: "customer name".to_string()
            })
        );
        assert!(validate_customer_name("Jane 2").is_err());
        assert!(validate_customer_name("Jane's").is_err());
        assert!(validate_customer_name("Jane\tDoe").is_ok());
        assert!(validate_customer_name("Jane\u{00A0}Doe").is_err());
        assert!(validate_customer_name("Jane\u{2028}Doe").is_err());
    }

    #[test]
    fn test_validate_state_code() {
        assert!(validate_state_code("TX").is_ok());
        assert!(validate_state_code("CAL").is_ok());

        assert!(validate_state_code("T").is_err());
        assert!(validate_state_code("Tx").is_err());
        assert!(validate_state_code("").is_err());
        assert!(validate_state_code("T1").is_err());
    }

    #[test]
    fn test_parse_order_number() {
        assert_eq!(parse_order_number("42").unwrap(), 42);
        assert_eq!(parse_order_number("007").unwrap(), 7);

        assert!(parse_order_number("").is_err());
        assert!(parse_order_number("-1").is_err());
        assert!(parse_order_number("4a").is_err());
        assert!(parse_order_number("99999999999").is_err());
    }
}
