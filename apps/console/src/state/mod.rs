//! # State Module
//!
//! State the console holds for its whole run. The shop itself is owned by
//! [`run`](crate::run) and lent to each screen; only configuration lives here.

mod config;

pub use config::{ConfigState, ENV_CURRENCY_SYMBOL, ENV_STORE_NAME};
