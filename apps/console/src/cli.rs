//! Command line flags for the `shop` binary.

use clap::Parser;

/// Point-of-sale console over an in-memory inventory.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "shop", version, about)]
pub struct Cli {
    /// Start with an empty inventory instead of the seed products
    #[arg(long)]
    pub no_seed: bool,

    /// Store name shown in the menu header (overrides SHOP_STORE_NAME)
    #[arg(long, value_name = "NAME")]
    pub store_name: Option<String>,

    /// Symbol printed before prices (overrides SHOP_CURRENCY_SYMBOL)
    #[arg(long, value_name = "SYMBOL")]
    pub currency_symbol: Option<String>,

    /// Log shop activity at debug level to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
