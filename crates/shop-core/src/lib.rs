//! # shop-core: Pure Business Logic for Shop POS
//!
//! This crate holds the in-memory inventory and the [`Shop`] facade that both
//! the console front end and the tests drive. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shop POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    Add Item ──► Search ──► List ──► Sell                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ facade calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │  pricing  │  │  payment  │  │   shop    │  │   │
//! │  │   │ merge/find│  │ unit × qty│  │ CARD/CASH │  │  facade   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO GLOBAL STATE                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, SaleStatus, SaleResult)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Sale and validation error types
//! - [`validation`] - Parsing of raw console input
//! - [`pricing`] - Line total calculation
//! - [`payment`] - Payment method check
//! - [`shop`] - The facade
//! - [`seed`] - Startup product list
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::{Money, Product, SaleStatus, Shop};
//!
//! let mut shop = Shop::new();
//! shop.add_product(Product::new("001", "Notebook", Money::from_cents(250), 20));
//!
//! let result = shop.sell_product("001", 5, " card ");
//! assert_eq!(result.status, SaleStatus::Success);
//! assert_eq!(result.total_price, Some(Money::from_cents(1250)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
mod inventory;
pub mod money;
pub mod payment;
pub mod pricing;
pub mod seed;
pub mod shop;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{SaleError, ValidationError};
pub use money::Money;
pub use payment::PaymentMethod;
pub use shop::Shop;
pub use types::*;
