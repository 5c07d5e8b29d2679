//! # Product Screens
//!
//! Add, search and list. All three only read from the terminal and call
//! the [`Shop`] facade; no inventory rules live here.

use std::io::{BufRead, Write};

use shop_core::validation::parse_new_product;
use shop_core::{Product, Shop};
use tracing::debug;

use super::{Next, Terminal};
use crate::error::ConsoleResult;
use crate::state::ConfigState;

const INVALID_INPUT: &str =
    "Invalid input. SKU/name must not be empty and price/quantity must be numeric.";

/// `{sku} | {name} | {price} | qty={qty}`
pub fn describe(product: &Product, config: &ConfigState) -> String {
    format!(
        "{} | {} | {} | qty={}",
        product.sku(),
        product.name(),
        config.format_currency(product.unit_price()),
        product.quantity()
    )
}

/// Reads a new product and adds it, merging into an existing SKU.
pub fn add_item_screen<R: BufRead, W: Write>(
    shop: &mut Shop,
    config: &ConfigState,
    terminal: &mut Terminal<R, W>,
) -> ConsoleResult<Next> {
    terminal.heading("Add Item")?;

    let Some(sku) = terminal.prompt("SKU: ")? else {
        return Ok(Next::Quit);
    };
    let Some(name) = terminal.prompt("Name: ")? else {
        return Ok(Next::Quit);
    };
    let Some(price) = terminal.prompt("Unit price (e.g. 2.50): ")? else {
        return Ok(Next::Quit);
    };
    let Some(quantity) = terminal.prompt("Quantity (e.g. 10): ")? else {
        return Ok(Next::Quit);
    };

    match parse_new_product(&sku, &name, &price, &quantity) {
        Ok(product) => {
            terminal.say(format_args!(
                "Added: {} ({}) | {} | qty={}",
                product.name(),
                product.sku(),
                config.format_currency(product.unit_price()),
                product.quantity()
            ))?;
            shop.add_product(product);
        }
        Err(err) => {
            debug!(error = %err, "Rejected add item input");
            terminal.say(INVALID_INPUT)?;
        }
    }

    terminal.return_to_home()
}

pub fn search_item_screen<R: BufRead, W: Write>(
    shop: &mut Shop,
    config: &ConfigState,
    terminal: &mut Terminal<R, W>,
) -> ConsoleResult<Next> {
    terminal.heading("Search for Item")?;

    let Some(sku) = terminal.prompt("SKU: ")? else {
        return Ok(Next::Quit);
    };

    match shop.search_for_product(&sku) {
        Some(product) => terminal.say(format_args!("Found: {}", describe(&product, config)))?,
        None => terminal.say("Not found.")?,
    }

    terminal.return_to_home()
}

pub fn list_products_screen<R: BufRead, W: Write>(
    shop: &mut Shop,
    config: &ConfigState,
    terminal: &mut Terminal<R, W>,
) -> ConsoleResult<Next> {
    terminal.heading("List All Products")?;

    let products = shop.list_products();
    if products.is_empty() {
        terminal.say("No products available.")?;
    }
    for product in &products {
        terminal.say(describe(product, config))?;
    }

    terminal.return_to_home()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{drive, seeded_shop};
    use super::*;
    use shop_core::Money;

    #[test]
    fn test_describe() {
        let product = Product::new("001", "Notebook", Money::from_cents(250), 20);
        assert_eq!(
            describe(&product, &ConfigState::default()),
            "001 | Notebook | £2.50 | qty=20"
        );
    }

    #[test]
    fn test_add_new_item() {
        let mut shop = Shop::new();
        let output = drive(&mut shop, "1\n031\nSticky Notes\n1.45\n40\n\n0\n");

        assert!(output.contains("Added: Sticky Notes (031) | £1.45 | qty=40"));
        let product = shop.search_for_product("031").unwrap();
        assert_eq!(product.unit_price(), Money::from_cents(145));
        assert_eq!(product.quantity(), 40);
    }

    #[test]
    fn test_add_existing_sku_merges_quantity() {
        let mut shop = seeded_shop();
        drive(&mut shop, "1\n001\nJournal\n9.99\n5\n\n0\n");

        let product = shop.search_for_product("001").unwrap();
        assert_eq!(product.name(), "Notebook");
        assert_eq!(product.unit_price(), Money::from_cents(250));
        assert_eq!(product.quantity(), 25);
    }

    #[test]
    fn test_add_huge_quantity_to_existing_sku_saturates() {
        let mut shop = seeded_shop();
        let output = drive(&mut shop, "1\n001\nNotebook\n2.50\n9223372036854775807\n\n0\n");

        assert!(output.contains("Added: Notebook (001) | £2.50 | qty=9223372036854775807"));
        assert_eq!(shop.search_for_product("001").unwrap().quantity(), i64::MAX);
    }

    #[test]
    fn test_screen_titles_and_prompts() {
        let mut shop = Shop::new();
        let output = drive(&mut shop, "1\n031\nSticky Notes\n1.45\n40\n\n3\n\n0\n");

        assert!(output.contains("=== Add Item ==="));
        assert!(output.contains("Unit price (e.g. 2.50): "));
        assert!(output.contains("Quantity (e.g. 10): "));
        assert!(output.contains("=== List All Products ==="));
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let mut shop = Shop::new();

        let output = drive(&mut shop, "1\n031\nSticky Notes\ncheap\n40\n\n0\n");
        assert!(output.contains(INVALID_INPUT));

        let output = drive(&mut shop, "1\n \nSticky Notes\n1.45\n40\n\n0\n");
        assert!(output.contains(INVALID_INPUT));

        let output = drive(&mut shop, "1\n031\nSticky Notes\n1.45\nlots\n\n0\n");
        assert!(output.contains(INVALID_INPUT));

        assert_eq!(shop.product_count(), 0);
    }

    #[test]
    fn test_add_interrupted_by_end_of_input() {
        let mut shop = Shop::new();
        let output = drive(&mut shop, "1\n031\nSticky");

        assert_eq!(shop.product_count(), 0);
        assert!(output.trim_end().ends_with("Goodbye."));
    }

    #[test]
    fn test_search_found_and_not_found() {
        let mut shop = seeded_shop();

        let output = drive(&mut shop, "2\n 002 \n\n0\n");
        assert!(output.contains("Found: 002 | Pen | £1.20 | qty=50"));

        let output = drive(&mut shop, "2\nNOPE\n\n0\n");
        assert!(output.contains("Not found."));
    }

    #[test]
    fn test_list_products_in_order() {
        let mut shop = seeded_shop();
        let output = drive(&mut shop, "3\n\n0\n");

        let first = output.find("001 | Notebook | £2.50 | qty=20").unwrap();
        let second = output.find("002 | Pen | £1.20 | qty=50").unwrap();
        assert!(first < second);
        assert!(output.contains("Press ENTER to return to Home..."));
    }

    #[test]
    fn test_list_empty_inventory() {
        let mut shop = Shop::new();
        let output = drive(&mut shop, "3\n\n0\n");
        assert!(output.contains("No products available."));
    }
}
