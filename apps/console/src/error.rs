//! # Console Error Type
//!
//! Failures that stop the console. Sale rejections and bad form input are not
//! errors here: the facade reports the former as a `SaleResult` and the
//! screens print the latter and carry on.
//!
//! ```text
//! stdin/stdout failure ──► ConsoleError::Io     ──┐
//!                                                 ├──► main exits non-zero
//! bad SHOP_* variable  ──► ConsoleError::Config ──┘
//! ```

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value was present but unusable.
    #[error("invalid value for {key}: {reason}")]
    Config { key: String, reason: String },
}

/// Convenience type alias for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
