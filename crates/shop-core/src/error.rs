//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shop-core errors (this file)                                          │
//! │  ├── SaleError        - Why a sale was rejected                        │
//! │  └── ValidationError  - Raw console input that failed to parse         │
//! │                                                                         │
//! │  shop-console errors (separate crate)                                  │
//! │  └── ConsoleError     - Terminal I/O and configuration failures        │
//! │                                                                         │
//! │  Flow: SaleError → SaleResult (never crosses the facade as an error)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, name, available stock)
//! 3. Errors are enum variants, never String
//! 4. The `Display` text of a `SaleError` is the message the cashier sees

use thiserror::Error;

use crate::types::SaleStatus;

// =============================================================================
// Sale Error
// =============================================================================

/// Reasons a sale is rejected by the facade.
///
/// Variants are listed in the order the facade checks them. Each one maps to
/// exactly one [`SaleStatus`] and is converted into a `SaleResult` before it
/// leaves the facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaleError {
    /// SKU was empty after trimming.
    #[error("SKU must not be empty.")]
    InvalidSku,

    /// Requested quantity was zero or negative.
    #[error("Quantity must be greater than zero.")]
    InvalidQuantity,

    /// No product is stored under the SKU.
    #[error("No product found with SKU: {sku}")]
    ProductNotFound { sku: String },

    /// Requested more than is on hand.
    ///
    /// ## User Workflow
    /// ```text
    /// Sell "001" × 25
    ///      │
    ///      ▼
    /// Check stock: available=20
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Notebook", available: 20 }
    ///      │
    ///      ▼
    /// Console shows: "Sale failed: Insufficient stock for Notebook. Available: 20"
    /// ```
    #[error("Insufficient stock for {name}. Available: {available}")]
    InsufficientStock { name: String, available: i64 },

    /// Payment method was not accepted.
    #[error("Unsupported or failed payment method: {method}")]
    PaymentFailed { method: String },
}

impl SaleError {
    /// The status reported to callers for this rejection.
    pub fn status(&self) -> SaleStatus {
        match self {
            SaleError::InvalidSku => SaleStatus::InvalidSku,
            SaleError::InvalidQuantity => SaleStatus::InvalidQuantity,
            SaleError::ProductNotFound { .. } => SaleStatus::ProductNotFound,
            SaleError::InsufficientStock { .. } => SaleStatus::InsufficientStock,
            SaleError::PaymentFailed { .. } => SaleStatus::PaymentFailed,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when raw text typed at the console can't be turned into the
/// typed values the facade expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value could not be parsed as a number.
    #[error("{field} must be numeric: {value:?}")]
    NotNumeric { field: String, value: String },

    /// Invalid format (e.g., too many decimal places).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for sale pipeline steps.
pub type SaleOutcome<T> = Result<T, SaleError>;

// =============================================================================
// Unit Tests
// =============================================================================
