//! # Payment
//!
//! A stand-in for a payment terminal. Nothing is charged: the only thing
//! checked is that the cashier named a method the shop accepts.
//!
//! ## Accepted Methods
//! ```text
//! raw input ──► trim ──► uppercase ──► "CARD" │ "CASH" ──► accepted
//!                                      anything else    ──► rejected
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::money::Money;

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl PaymentMethod {
    /// Reads a method name as typed, ignoring case and surrounding whitespace.
    ///
    /// ```rust
    /// use shop_core::PaymentMethod;
    ///
    /// assert_eq!(PaymentMethod::parse("  card "), Some(PaymentMethod::Card));
    /// assert_eq!(PaymentMethod::parse("cheque"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "CARD" => Some(PaymentMethod::Card),
            "CASH" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "CARD",
            PaymentMethod::Cash => "CASH",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Takes payment of `amount` by `method`.
///
/// Succeeds for any amount as long as the method is CARD or CASH.
pub fn take_payment(amount: Money, method: &str) -> bool {
    match PaymentMethod::parse(method) {
        Some(accepted) => {
            debug!(%amount, method = %accepted, "payment taken");
            true
        }
        None => {
            debug!(%amount, method = method.trim(), "payment method rejected");
            false
        }
    }
}
