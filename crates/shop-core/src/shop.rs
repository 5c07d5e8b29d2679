//! # Shop Facade
//!
//! The only way in to the inventory. Front ends call four operations and never
//! see the product list, the pricing rule or the payment check directly.
//!
//! ## Sale Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sell_product(sku, quantity, method)                                    │
//! │                                                                         │
//! │  1. trim SKU        ── empty?          ──► INVALID_SKU                  │
//! │  2. quantity        ── <= 0?           ──► INVALID_QUANTITY             │
//! │  3. find product    ── absent?         ──► PRODUCT_NOT_FOUND            │
//! │  4. stock check     ── too few?        ──► INSUFFICIENT_STOCK           │
//! │  5. total = unit price × quantity                                       │
//! │  6. take payment    ── bad method?     ──► PAYMENT_FAILED               │
//! │  7. reduce stock                                                        │
//! │  8. SUCCESS + total                                                     │
//! │                                                                         │
//! │  Every rejection returns before step 7: a failed sale never touches     │
//! │  the inventory.                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::error::{SaleError, SaleOutcome};
use crate::inventory::Inventory;
use crate::payment;
use crate::pricing;
use crate::types::{Product, SaleResult};

/// Point-of-sale facade over an in-memory inventory.
#[derive(Debug, Clone, Default)]
pub struct Shop {
    inventory: Inventory,
}

impl Shop {
    /// Creates a shop with no products.
    pub fn new() -> Self {
        Shop {
            inventory: Inventory::new(),
        }
    }

    /// Adds a product, merging stock into an existing record with the same SKU.
    ///
    /// The record is taken as given; the caller has already checked its fields.
    pub fn add_product(&mut self, product: Product) {
        self.inventory.add_or_merge(product);
    }

    /// Looks up a product by SKU. Surrounding whitespace is ignored and a blank
    /// SKU finds nothing.
    pub fn search_for_product(&self, sku: &str) -> Option<Product> {
        let sku = sku.trim();
        if sku.is_empty() {
            return None;
        }
        self.inventory.find_by_sku(sku).cloned()
    }

    /// Snapshot of every product in the order it was first added.
    pub fn list_products(&self) -> Vec<Product> {
        self.inventory.all_products()
    }

    /// Number of distinct SKUs held.
    pub fn product_count(&self) -> usize {
        self.inventory.len()
    }

    /// Sells `quantity` units of `sku`, paid by `payment_method`.
    ///
    /// Never fails with an error: every rejection comes back as a
    /// [`SaleResult`] with a non-success status and a message for the cashier.
    pub fn sell_product(&mut self, sku: &str, quantity: i64, payment_method: &str) -> SaleResult {
        match self.try_sell(sku, quantity, payment_method) {
            Ok(result) => result,
            Err(err) => {
                debug!(
                    sku = sku.trim(),
                    quantity,
                    status = ?err.status(),
                    reason = %err,
                    "sale rejected"
                );
                err.into()
            }
        }
    }

    fn try_sell(&mut self, sku: &str, quantity: i64, payment_method: &str) -> SaleOutcome<SaleResult> {
        let sku = sku.trim();
        if sku.is_empty() {
            return Err(SaleError::InvalidSku);
        }

        if quantity <= 0 {
            return Err(SaleError::InvalidQuantity);
        }

        let product = self
            .inventory
            .find_by_sku(sku)
            .cloned()
            .ok_or_else(|| SaleError::ProductNotFound {
                sku: sku.to_string(),
            })?;

        if !self.inventory.has_sufficient_stock(sku, quantity) {
            return Err(SaleError::InsufficientStock {
                name: product.name().to_string(),
                available: product.quantity(),
            });
        }

        let total = pricing::calculate_total(product.unit_price(), quantity);

        if !payment::take_payment(total, payment_method) {
            return Err(SaleError::PaymentFailed {
                method: payment_method.trim().to_string(),
            });
        }

        // Last step: nothing above may leave the inventory changed.
        self.inventory.reduce_stock(sku, quantity);

        info!(
            sku,
            quantity,
            %total,
            remaining = product.quantity() - quantity,
            "sale completed"
        );

        Ok(SaleResult::success(
            format!("Sale completed for {}.", product.name()),
            total,
        ))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
