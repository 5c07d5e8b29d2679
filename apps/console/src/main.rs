//! # Shop POS Console Entry Point
//!
//! ## Startup Sequence
//! 1. Parse command line flags
//! 2. Initialize tracing (logging to stderr)
//! 3. Load configuration (defaults → environment → flags)
//! 4. Create the shop and load seed data
//! 5. Run the menu loop on stdin/stdout

use clap::Parser;

use shop_console::cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    shop_console::run(Cli::parse())?;
    Ok(())
}
