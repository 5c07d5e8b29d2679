//! # Seed Data
//!
//! The product list a fresh shop opens with: stationery first, then desk and
//! computer accessories.
//!
//! ## Usage
//! ```rust
//! use shop_core::{seed, Shop};
//!
//! let mut shop = Shop::new();
//! seed::seed(&mut shop);
//! assert_eq!(shop.product_count(), seed::SEED_PRODUCTS.len());
//! ```

use crate::money::Money;
use crate::shop::Shop;
use crate::types::Product;

/// `(sku, name, unit price in minor units, quantity)` for every seeded product.
pub const SEED_PRODUCTS: &[(&str, &str, i64, i64)] = &[
    ("001", "Notebook", 250, 20),
    ("002", "Pen", 120, 50),
    ("003", "Pencil", 80, 60),
    ("004", "Eraser", 50, 40),
    ("005", "Highlighter", 175, 30),
    ("006", "Stapler", 599, 15),
    ("007", "Paper Clips (Box)", 110, 25),
    ("008", "Ruler (30cm)", 130, 20),
    ("009", "Correction Tape", 210, 18),
    ("010", "Glue Stick", 160, 22),
    ("011", "A4 Notebook", 320, 35),
    ("012", "A5 Notebook", 240, 30),
    ("013", "Whiteboard Marker", 225, 28),
    ("014", "Permanent Marker", 275, 26),
    ("015", "Calculator (Basic)", 899, 12),
    ("016", "Desk Organiser", 650, 14),
    ("017", "Mouse Pad", 420, 16),
    ("018", "USB Flash Drive 16GB", 799, 20),
    ("019", "USB Flash Drive 32GB", 1199, 18),
    ("020", "Laptop Sleeve", 1450, 10),
    ("021", "Wireless Mouse", 1299, 15),
    ("022", "Keyboard (USB)", 1699, 12),
    ("023", "HDMI Cable", 699, 25),
    ("024", "Ethernet Cable", 499, 30),
    ("025", "Power Extension Lead", 950, 14),
    ("026", "Desk Lamp", 1875, 8),
    ("027", "Headphones (Wired)", 1340, 20),
    ("028", "Headphones (Wireless)", 2999, 10),
    ("029", "Webcam (HD)", 2499, 9),
    ("030", "Office Chair Mat", 2250, 7),
];

/// Adds every entry of [`SEED_PRODUCTS`] to `shop`.
///
/// Goes through [`Shop::add_product`], so seeding twice doubles the stock.
pub fn seed(shop: &mut Shop) {
    for &(sku, name, cents, quantity) in SEED_PRODUCTS {
        shop.add_product(Product::new(sku, name, Money::from_cents(cents), quantity));
    }
    tracing::debug!(products = shop.product_count(), "seed data loaded");
}
