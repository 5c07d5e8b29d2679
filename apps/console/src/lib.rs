//! # Shop POS Console Library
//!
//! Configures and runs the interactive console.
//!
//! ## Module Organization
//! ```text
//! shop_console/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── cli.rs          ◄─── Command line flags
//! ├── error.rs        ◄─── ConsoleError
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── config.rs   ◄─── Configuration state
//! └── commands/
//!     ├── mod.rs      ◄─── Terminal wrapper and home menu loop
//!     ├── product.rs  ◄─── Add / search / list screens
//!     └── sale.rs     ◄─── Sell screen
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use commands::Terminal;
use error::ConsoleResult;
use shop_core::{seed, Shop};
use state::ConfigState;

/// Runs the console until the cashier quits or input ends.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults, then SHOP_* environment variables, then flags           │
/// │                                                                         │
/// │  3. Build the Shop ───────────────────────────────────────────────────► │
/// │     • seed products unless --no-seed                                    │
/// │                                                                         │
/// │  4. Menu Loop ────────────────────────────────────────────────────────► │
/// │     • stdin / stdout                                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> ConsoleResult<()> {
    init_tracing(cli.verbose);

    let config = ConfigState::from_env()?.with_overrides(cli.store_name, cli.currency_symbol);
    info!(store = %config.store_name, "Starting Shop POS console");

    let mut shop = Shop::new();
    if cli.no_seed {
        info!("Starting with an empty inventory");
    } else {
        seed::seed(&mut shop);
        info!(products = shop.product_count(), "Seed data loaded");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());

    commands::run_menu(&mut shop, &config, &mut terminal)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shop_core=trace` - Trace for the core crate only
/// - Default: WARN (the menu shares the terminal), or DEBUG for shop crates
///   with `--verbose`
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,shop_core=debug,shop_console=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
