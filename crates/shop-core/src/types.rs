//! # Domain Types
//!
//! Core domain types used throughout Shop POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   SaleResult    │   │   SaleStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  sku (identity) │   │  status         │   │  Success        │       │
//! │  │  name           │   │  message        │   │  ProductNotFound│       │
//! │  │  unit_price     │   │  total_price    │   │  InsufficientSt.│       │
//! │  │  quantity       │   │  (Success only) │   │  PaymentFailed  │       │
//! │  └─────────────────┘   └─────────────────┘   │  InvalidQuantity│       │
//! │                                              │  InvalidSku     │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SaleError;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Products are values: fields are read through accessors, and a change in
/// stock produces a new record via [`Product::with_quantity`]. The SKU is the
/// identity; two records with the same SKU describe the same product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    sku: String,
    name: String,
    unit_price: Money,
    quantity: i64,
}

impl Product {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Self {
        Product {
            sku: sku.into(),
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Stock Keeping Unit - the identity key.
    #[inline]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Display name shown to the cashier.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Units currently in stock.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Returns a copy of this record holding `quantity` units.
    pub fn with_quantity(&self, quantity: i64) -> Self {
        Product {
            quantity,
            ..self.clone()
        }
    }
}

// =============================================================================
// Sale Status
// =============================================================================

/// The outcome category of a sale attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleStatus {
    /// Payment taken and stock reduced.
    Success,
    ProductNotFound,
    InsufficientStock,
    PaymentFailed,
    InvalidQuantity,
    InvalidSku,
}

// =============================================================================
// Sale Result
// =============================================================================

/// What `Shop::sell_product` hands back.
///
/// Business-rule failures are ordinary values here, never errors.
/// `total_price` is `Some` only when `status` is [`SaleStatus::Success`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleResult {
    pub status: SaleStatus,
    pub message: String,
    pub total_price: Option<Money>,
}

impl SaleResult {
    /// A completed sale for `total`.
    pub fn success(message: impl Into<String>, total: Money) -> Self {
        SaleResult {
            status: SaleStatus::Success,
            message: message.into(),
            total_price: Some(total),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == SaleStatus::Success
    }
}

impl From<SaleError> for SaleResult {
    fn from(err: SaleError) -> Self {
        SaleResult {
            status: err.status(),
            message: err.to_string(),
            total_price: None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_quantity_keeps_identity() {
        let product = Product::new("001", "Notebook", Money::from_cents(250), 20);
        let reduced = product.with_quantity(15);

        assert_eq!(reduced.sku(), "001");
        assert_eq!(reduced.name(), "Notebook");
        assert_eq!(reduced.unit_price(), Money::from_cents(250));
        assert_eq!(reduced.quantity(), 15);
        // the original value is untouched
        assert_eq!(product.quantity(), 20);
    }

    #[test]
    fn test_failure_result_has_no_total() {
        let result = SaleResult::from(SaleError::InvalidQuantity);
        assert_eq!(result.status, SaleStatus::InvalidQuantity);
        assert_eq!(result.message, "Quantity must be greater than zero.");
        assert!(result.total_price.is_none());
        assert!(!result.is_success());
    }

    #[test]
    fn test_success_result_carries_total() {
        let result = SaleResult::success("Sale completed for Pen.", Money::from_cents(240));
        assert!(result.is_success());
        assert_eq!(result.total_price, Some(Money::from_cents(240)));
    }

    #[test]
    fn test_sale_status_serializes_screaming_snake() {
        let json = serde_json::to_string(&SaleStatus::InsufficientStock).unwrap();
        assert_eq!(json, "\"INSUFFICIENT_STOCK\"");

        let status: SaleStatus = serde_json::from_str("\"INVALID_SKU\"").unwrap();
        assert_eq!(status, SaleStatus::InvalidSku);
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product::new("002", "Pen", Money::from_cents(120), 50);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "sku": "002",
                "name": "Pen",
                "unitPrice": 120,
                "quantity": 50
            })
        );
    }
}
