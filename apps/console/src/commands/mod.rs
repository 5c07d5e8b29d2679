//! # Console Commands Module
//!
//! The home menu and the screens it dispatches to.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (Terminal, home menu loop)
//! ├── product.rs  ◄─── Add item, search, list
//! └── sale.rs     ◄─── Sell
//! ```
//!
//! ## How a Screen Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Home menu ──► "4" ──► sale::sell_screen(shop, config, terminal)        │
//! │                              │                                          │
//! │                              ├── prompt SKU / quantity / method         │
//! │                              ├── shop.sell_product(..)                  │
//! │                              ├── print outcome                          │
//! │                              └── "Press ENTER to return to Home..."     │
//! │                                         │                               │
//! │                              Next::Home ◄┘  (Next::Quit on end of input)│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Screens are generic over `BufRead` / `Write` so tests drive them with
//! in-memory buffers.

pub mod product;
pub mod sale;

use std::fmt::Display;
use std::io::{BufRead, Write};

use shop_core::Shop;

use crate::error::ConsoleResult;
use crate::state::ConfigState;

const RULE: &str = "===================================";

/// Where to go after a screen finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    Home,
    /// Input ended; leave the menu loop.
    Quit,
}

/// Home menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddItem,
    SearchItem,
    ListProducts,
    Sell,
    Quit,
}

impl MenuOption {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuOption::AddItem),
            "2" => Some(MenuOption::SearchItem),
            "3" => Some(MenuOption::ListProducts),
            "4" => Some(MenuOption::Sell),
            "0" => Some(MenuOption::Quit),
            _ => None,
        }
    }
}

/// Line-oriented reader/writer pair.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> ConsoleResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> ConsoleResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Writes `label`, then reads a line. Returns `None` at end of input.
    ///
    /// The trailing newline is stripped; other whitespace is left for the
    /// caller, since the facade trims SKUs and payment methods itself.
    pub fn prompt(&mut self, label: &str) -> ConsoleResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Prints a screen title.
    pub fn heading(&mut self, title: &str) -> ConsoleResult<()> {
        self.blank()?;
        self.say(format_args!("=== {} ===", title))
    }

    /// Waits for ENTER before going back to the home menu.
    pub fn return_to_home(&mut self) -> ConsoleResult<Next> {
        self.blank()?;
        match self.prompt("Press ENTER to return to Home...")? {
            Some(_) => Ok(Next::Home),
            None => Ok(Next::Quit),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Runs the home menu until the cashier chooses 0 or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    shop: &mut Shop,
    config: &ConfigState,
    terminal: &mut Terminal<R, W>,
) -> ConsoleResult<()> {
    loop {
        terminal.blank()?;
        terminal.say(RULE)?;
        terminal.say(format_args!(" {} - Home", config.store_name))?;
        terminal.say(RULE)?;
        terminal.say("1) Add Item")?;
        terminal.say("2) Search for Item")?;
        terminal.say("3) List All Products")?;
        terminal.say("4) Sell")?;
        terminal.say("0) Quit")?;

        let Some(choice) = terminal.prompt("Choose option: ")? else {
            break;
        };

        let next = match MenuOption::parse(&choice) {
            Some(MenuOption::AddItem) => product::add_item_screen(shop, config, terminal)?,
            Some(MenuOption::SearchItem) => product::search_item_screen(shop, config, terminal)?,
            Some(MenuOption::ListProducts) => product::list_products_screen(shop, config, terminal)?,
            Some(MenuOption::Sell) => sale::sell_screen(shop, config, terminal)?,
            Some(MenuOption::Quit) => Next::Quit,
            None => {
                terminal.say("Invalid option. Please choose 0-4.")?;
                Next::Home
            }
        };

        if next == Next::Quit {
            break;
        }
    }

    terminal.blank()?;
    terminal.say("Goodbye.")
}


#[cfg(test)]
mod tests {
    use super::test_support::{drive, seeded_shop};
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_menu_option_parse() {
        assert_eq!(MenuOption::parse(" 1 "), Some(MenuOption::AddItem));
        assert_eq!(MenuOption::parse("4"), Some(MenuOption::Sell));
        assert_eq!(MenuOption::parse("0"), Some(MenuOption::Quit));
        assert_eq!(MenuOption::parse("5"), None);
        assert_eq!(MenuOption::parse(""), None);
    }

    #[test]
    fn test_prompt_strips_newline_only() {
        let mut terminal = Terminal::new(Cursor::new(" card \r\n".as_bytes()), Vec::new());
        assert_eq!(terminal.prompt("Method: ").unwrap().as_deref(), Some(" card "));
        assert_eq!(terminal.prompt("Again: ").unwrap(), None);

        let output = String::from_utf8(terminal.into_output()).unwrap();
        assert_eq!(output, "Method: Again: ");
    }

    #[test]
    fn test_quit_prints_goodbye() {
        let mut shop = seeded_shop();
        let output = drive(&mut shop, "0\n");

        assert!(output.contains(" Shop POS - Home"));
        assert!(output.contains("Choose option: "));
        assert!(output.trim_end().ends_with("Goodbye."));
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut shop = seeded_shop();
        let output = drive(&mut shop, "");
        assert!(output.trim_end().ends_with("Goodbye."));
    }

    #[test]
    fn test_invalid_option_returns_to_menu() {
        let mut shop = seeded_shop();
        let output = drive(&mut shop, "9\n0\n");

        assert!(output.contains("Invalid option. Please choose 0-4."));
        assert_eq!(output.matches("Choose option: ").count(), 2);
    }

    #[test]
    fn test_store_name_in_header() {
        let mut shop = seeded_shop();
        let config = ConfigState {
            store_name: "Corner Shop".to_string(),
            ..ConfigState::default()
        };
        let mut terminal = Terminal::new(Cursor::new("0\n".as_bytes()), Vec::new());
        run_menu(&mut shop, &config, &mut terminal).unwrap();

        let output = String::from_utf8(terminal.into_output()).unwrap();
        assert!(output.contains(" Corner Shop - Home"));
    }
}
