//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (pence / cents)                      │
//! │    250 pence × 5 = 1250 pence = 12.50  ✅ exact                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::money::Money;
//!
//! // Create from minor units (preferred)
//! let price = Money::from_cents(250); // 2.50
//!
//! // Or parse what the cashier typed
//! let parsed: Money = "2.50".parse().unwrap();
//! assert_eq!(parsed, price);
//!
//! assert_eq!(price.multiply_quantity(5).to_string(), "12.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minor units per major unit.
const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: the add-item form accepts any number, negatives included
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No currency symbol**: the console formats with its configured symbol
///
/// ## Where Money is Used
/// ```text
/// Product.unit_price ──► pricing::calculate_total ──► SaleResult.total_price
///                                     │
///                                     └──► payment::take_payment(amount, ..)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    ///
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-550).minor_part(), 50);
    /// ```
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(250); // 2.50
    /// assert_eq!(unit_price.multiply_quantity(5).cents(), 1250); // 12.50
    /// ```
    ///
    /// Saturates at the bounds of `i64` instead of overflowing.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Why a decimal string could not be read as [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("amount is empty")]
    Empty,

    #[error("amount is not a number")]
    NotANumber,

    #[error("amount has more than two decimal places")]
    TooManyDecimals,

    #[error("amount is too large")]
    Overflow,
}

/// Parses `"2.50"`, `"3"`, `"0.5"`, `".75"`, `"-1.20"`. The only sign accepted
/// is a leading `-`.
///
/// Surrounding whitespace is ignored. At most two fractional digits are
/// accepted; a single digit is read as tenths (`"0.5"` is 50 minor units).
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (major_str, minor_str) = match unsigned.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (unsigned, ""),
        };

        if major_str.is_empty() && minor_str.is_empty() {
            return Err(ParseMoneyError::NotANumber);
        }
        if !major_str.chars().all(|c| c.is_ascii_digit())
            || !minor_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ParseMoneyError::NotANumber);
        }
        if minor_str.len() > 2 {
            return Err(ParseMoneyError::TooManyDecimals);
        }

        let major: i64 = if major_str.is_empty() {
            0
        } else {
            major_str.parse().map_err(|_| ParseMoneyError::Overflow)?
        };
        let minor: i64 = match minor_str.len() {
            0 => 0,
            1 => minor_str.parse::<i64>().map_err(|_| ParseMoneyError::NotANumber)? * 10,
            _ => minor_str.parse().map_err(|_| ParseMoneyError::NotANumber)?,
        };

        let cents = major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|c| c.checked_add(minor))
            .ok_or(ParseMoneyError::Overflow)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as a plain decimal with two places: `12.50`, `-0.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
