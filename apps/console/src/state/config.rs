//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--store-name`, `--currency-symbol`)
//! 2. Environment variables (`SHOP_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup.

use serde::{Deserialize, Serialize};
use shop_core::Money;

use crate::error::{ConsoleError, ConsoleResult};

/// Environment variable overriding [`ConfigState::store_name`].
pub const ENV_STORE_NAME: &str = "SHOP_STORE_NAME";

/// Environment variable overriding [`ConfigState::currency_symbol`].
pub const ENV_CURRENCY_SYMBOL: &str = "SHOP_CURRENCY_SYMBOL";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the menu header.
    pub store_name: String,

    /// Printed before every price, e.g. "£".
    pub currency_symbol: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Shop POS"
    /// - Currency: £
    fn default() -> Self {
        ConfigState {
            store_name: "Shop POS".to_string(),
            currency_symbol: "£".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from the process environment over the defaults.
    pub fn from_env() -> ConsoleResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its
    /// value if set.
    ///
    /// A store name that is set but blank is rejected. An empty currency
    /// symbol is allowed and prints bare numbers.
    pub fn from_lookup<F>(lookup: F) -> ConsoleResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup(ENV_STORE_NAME) {
            let store_name = store_name.trim();
            if store_name.is_empty() {
                return Err(ConsoleError::Config {
                    key: ENV_STORE_NAME.to_string(),
                    reason: "must not be blank".to_string(),
                });
            }
            config.store_name = store_name.to_string();
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol.trim().to_string();
        }

        Ok(config)
    }

    /// Applies command line overrides. Blank flag values are ignored.
    pub fn with_overrides(
        mut self,
        store_name: Option<String>,
        currency_symbol: Option<String>,
    ) -> Self {
        if let Some(name) = store_name.filter(|n| !n.trim().is_empty()) {
            self.store_name = name.trim().to_string();
        }
        if let Some(symbol) = currency_symbol {
            self.currency_symbol = symbol.trim().to_string();
        }
        self
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use shop_console::state::ConfigState;
    /// use shop_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1250)), "£12.50");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.major().abs(),
            amount.minor_part()
        )
    }
}
