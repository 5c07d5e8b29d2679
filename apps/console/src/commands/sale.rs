//! # Sell Screen
//!
//! Collects a sale and hands it to [`Shop::sell_product`]. Quantity text that
//! is not a whole number is passed on as 0, so the facade reports it as an
//! invalid quantity like any other.

use std::io::{BufRead, Write};

use shop_core::validation::parse_sale_quantity;
use shop_core::Shop;

use super::{Next, Terminal};
use crate::error::ConsoleResult;
use crate::state::ConfigState;

pub fn sell_screen<R: BufRead, W: Write>(
    shop: &mut Shop,
    config: &ConfigState,
    terminal: &mut Terminal<R, W>,
) -> ConsoleResult<Next> {
    terminal.heading("Sell")?;

    let Some(sku) = terminal.prompt("SKU: ")? else {
        return Ok(Next::Quit);
    };
    let Some(quantity) = terminal.prompt("Quantity: ")? else {
        return Ok(Next::Quit);
    };
    let Some(method) = terminal.prompt("Payment method (CARD/CASH): ")? else {
        return Ok(Next::Quit);
    };

    let result = shop.sell_product(&sku, parse_sale_quantity(&quantity), &method);

    match result.total_price {
        Some(total) if result.is_success() => terminal.say(format_args!(
            "{} Total: {}",
            result.message,
            config.format_currency(total)
        ))?,
        _ => terminal.say(format_args!("Sale failed: {}", result.message))?,
    }

    terminal.return_to_home()
}
