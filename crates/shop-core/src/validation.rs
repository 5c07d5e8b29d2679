//! # Validation Module
//!
//! Turns raw text typed at the console into the typed values the facade takes.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console screen                                               │
//! │  └── reads a line per field                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── non-empty SKU / name                                              │
//! │  └── numeric price and quantity                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Shop facade                                                  │
//! │  └── sale rules (quantity > 0, stock, payment method)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the shape of the input is checked here. A negative price or stock
//! level is still a number and passes.

use crate::error::ValidationError;
use crate::money::{Money, ParseMoneyError};
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Trims `raw` and rejects it if nothing is left.
///
/// ## Example
/// ```rust
/// use shop_core::validation::require_non_empty;
///
/// assert_eq!(require_non_empty("sku", " 001 ").unwrap(), "001");
/// assert!(require_non_empty("sku", "   ").is_err());
/// ```
pub fn require_non_empty(field: &str, raw: &str) -> ValidationResult<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a unit price such as `2.50`.
pub fn parse_price(raw: &str) -> ValidationResult<Money> {
    raw.parse::<Money>().map_err(|err| match err {
        ParseMoneyError::Empty => ValidationError::Required {
            field: "price".to_string(),
        },
        ParseMoneyError::NotANumber => ValidationError::NotNumeric {
            field: "price".to_string(),
            value: raw.trim().to_string(),
        },
        other => ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: other.to_string(),
        },
    })
}

/// Parses a whole-number quantity.
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }
    value.parse::<i64>().map_err(|_| ValidationError::NotNumeric {
        field: "quantity".to_string(),
        value: value.to_string(),
    })
}

/// Quantity for the sell form: anything unparseable becomes `0`, which the
/// facade then rejects as an invalid quantity.
pub fn parse_sale_quantity(raw: &str) -> i64 {
    parse_quantity(raw).unwrap_or(0)
}

// =============================================================================
// Forms
// =============================================================================

/// Builds a product from the four add-item fields.
///
/// ## Rules
/// - SKU and name must not be blank (both are stored trimmed)
/// - Price must be a decimal number with at most two places
/// - Quantity must be a whole number
///
/// ## Example
/// ```rust
/// use shop_core::validation::parse_new_product;
/// use shop_core::Money;
///
/// let product = parse_new_product("031", "Sticky Notes", "1.45", "40").unwrap();
/// assert_eq!(product.unit_price(), Money::from_cents(145));
///
/// assert!(parse_new_product("031", "Sticky Notes", "cheap", "40").is_err());
/// ```
pub fn parse_new_product(
    sku: &str,
    name: &str,
    price: &str,
    quantity: &str,
) -> ValidationResult<Product> {
    let sku = require_non_empty("sku", sku)?;
    let name = require_non_empty("name", name)?;
    let unit_price = parse_price(price)?;
    let quantity = parse_quantity(quantity)?;
    Ok(Product::new(sku, name, unit_price, quantity))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert_eq!(require_non_empty("name", " Pen ").unwrap(), "Pen");
        assert_eq!(
            require_non_empty("name", "\t"),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("2.50"), Ok(Money::from_cents(250)));
        assert_eq!(parse_price(" 7 "), Ok(Money::from_cents(700)));
        assert!(matches!(parse_price(""), Err(ValidationError::Required { .. })));
        assert!(matches!(parse_price("two"), Err(ValidationError::NotNumeric { .. })));
        assert!(matches!(
            parse_price("1.999"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("10"), Ok(10));
        assert_eq!(parse_quantity(" -3 "), Ok(-3));
        assert!(matches!(parse_quantity(""), Err(ValidationError::Required { .. })));
        assert!(matches!(parse_quantity("1.5"), Err(ValidationError::NotNumeric { .. })));
    }

    #[test]
    fn test_parse_sale_quantity_defaults_to_zero() {
        assert_eq!(parse_sale_quantity("5"), 5);
        assert_eq!(parse_sale_quantity("five"), 0);
        assert_eq!(parse_sale_quantity(""), 0);
    }

    #[test]
    fn test_parse_new_product() {
        let product = parse_new_product(" 031 ", " Sticky Notes ", "1.45", "40").unwrap();
        assert_eq!(product.sku(), "031");
        assert_eq!(product.name(), "Sticky Notes");
        assert_eq!(product.quantity(), 40);

        assert!(parse_new_product("", "Sticky Notes", "1.45", "40").is_err());
        assert!(parse_new_product("031", " ", "1.45", "40").is_err());
        assert!(parse_new_product("031", "Sticky Notes", "1.45", "lots").is_err());
    }

    #[test]
    fn test_negative_numbers_are_still_numbers() {
        let product = parse_new_product("X", "Refund Line", "-1.00", "-2").unwrap();
        assert_eq!(product.unit_price(), Money::from_cents(-100));
        assert_eq!(product.quantity(), -2);
    }
}
