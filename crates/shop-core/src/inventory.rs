//! # Inventory
//!
//! The product list behind the [`Shop`](crate::Shop) facade.
//!
//! Products are kept in insertion order and looked up by SKU with a linear
//! scan; the list is a few dozen items long. Records are replaced wholesale
//! rather than edited in place.
//!
//! ## Operations
//! ```text
//! add_or_merge(p)      ──► same SKU? replace with summed quantity : append
//! find_by_sku(sku)     ──► Option<&Product>
//! has_sufficient_stock ──► absent SKU counts as zero stock
//! reduce_stock         ──► replace with quantity - qty (no bounds check)
//! all_products         ──► owned copy
//! ```

use tracing::debug;

use crate::types::Product;

#[derive(Debug, Clone, Default)]
pub(crate) struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub(crate) fn new() -> Self {
        Inventory::default()
    }

    fn position(&self, sku: &str) -> Option<usize> {
        self.products.iter().position(|p| p.sku() == sku)
    }

    /// Adds a product, or merges it into the existing record with that SKU.
    ///
    /// On merge only the quantity changes; name and price stay as first added.
    /// The summed quantity saturates at `i64::MAX`.
    pub(crate) fn add_or_merge(&mut self, product: Product) {
        match self.position(product.sku()) {
            Some(index) => {
                let existing = &self.products[index];
                let merged = existing
                    .with_quantity(existing.quantity().saturating_add(product.quantity()));
                debug!(sku = merged.sku(), quantity = merged.quantity(), "merged product stock");
                self.products[index] = merged;
            }
            None => {
                debug!(sku = product.sku(), quantity = product.quantity(), "added product");
                self.products.push(product);
            }
        }
    }

    pub(crate) fn find_by_sku(&self, sku: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.sku() == sku)
    }

    pub(crate) fn has_sufficient_stock(&self, sku: &str, qty: i64) -> bool {
        self.find_by_sku(sku).map_or(0, Product::quantity) >= qty
    }

    /// Decrements the stock of `sku` by `qty`. Does nothing for an unknown SKU.
    ///
    /// Callers must check [`has_sufficient_stock`](Self::has_sufficient_stock)
    /// first; this method will happily take the quantity below zero.
    pub(crate) fn reduce_stock(&mut self, sku: &str, qty: i64) {
        if let Some(index) = self.position(sku) {
            let current = &self.products[index];
            self.products[index] = current.with_quantity(current.quantity().saturating_sub(qty));
        }
    }

    pub(crate) fn all_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.products.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(sku: &str, name: &str, cents: i64, qty: i64) -> Product {
        Product::new(sku, name, Money::from_cents(cents), qty)
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.len(), 0);

        inventory.add_or_merge(product("002", "Pen", 120, 50));
        inventory.add_or_merge(product("001", "Notebook", 250, 20));

        let skus: Vec<_> = inventory
            .all_products()
            .iter()
            .map(|p| p.sku().to_string())
            .collect();
        assert_eq!(skus, vec!["002", "001"]);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_merge_sums_quantity_and_keeps_first_fields() {
        let mut inventory = Inventory::new();
        inventory.add_or_merge(product("001", "Notebook", 250, 20));
        inventory.add_or_merge(product("001", "Renamed", 999, 5));

        assert_eq!(inventory.len(), 1);
        let stored = inventory.find_by_sku("001").unwrap();
        assert_eq!(stored.quantity(), 25);
        assert_eq!(stored.name(), "Notebook");
        assert_eq!(stored.unit_price(), Money::from_cents(250));
    }

    #[test]
    fn test_merge_saturates_at_max_quantity() {
        let mut inventory = Inventory::new();
        inventory.add_or_merge(product("001", "Notebook", 250, 20));
        inventory.add_or_merge(product("001", "Notebook", 250, i64::MAX));

        let stored = inventory.find_by_sku("001").unwrap();
        assert_eq!(stored.quantity(), i64::MAX);
        assert!(inventory.has_sufficient_stock("001", i64::MAX));
    }

    #[test]
    fn test_find_missing_is_none() {
        let inventory = Inventory::new();
        assert!(inventory.find_by_sku("001").is_none());
    }

    #[test]
    fn test_sufficient_stock() {
        let mut inventory = Inventory::new();
        inventory.add_or_merge(product("001", "Notebook", 250, 20));

        assert!(inventory.has_sufficient_stock("001", 20));
        assert!(!inventory.has_sufficient_stock("001", 21));
        // absent SKU is zero stock
        assert!(!inventory.has_sufficient_stock("999", 1));
        assert!(inventory.has_sufficient_stock("999", 0));
    }

    #[test]
    fn test_reduce_stock() {
        let mut inventory = Inventory::new();
        inventory.add_or_merge(product("001", "Notebook", 250, 20));

        inventory.reduce_stock("001", 5);
        assert_eq!(inventory.find_by_sku("001").unwrap().quantity(), 15);

        // unknown SKU is a no-op
        inventory.reduce_stock("999", 5);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_reduce_stock_trusts_caller() {
        let mut inventory = Inventory::new();
        inventory.add_or_merge(product("001", "Notebook", 250, 2));

        inventory.reduce_stock("001", 5);
        assert_eq!(inventory.find_by_sku("001").unwrap().quantity(), -3);
    }

    #[test]
    fn test_all_products_is_a_copy() {
        let mut inventory = Inventory::new();
        inventory.add_or_merge(product("001", "Notebook", 250, 20));

        let snapshot = inventory.all_products();
        inventory.reduce_stock("001", 5);

        assert_eq!(snapshot[0].quantity(), 20);
        assert_eq!(inventory.all_products()[0].quantity(), 15);
    }
}
