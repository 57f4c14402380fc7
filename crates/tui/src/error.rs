//! Error types for the TUI module.

use std::io;
use thiserror::Error;

/// Result type for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;

/// Error type for TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Failed to initialize or restore the terminal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Invalid start-up configuration (e.g. an unknown `TBX_FILTER`).
    #[error("Configuration error: {0}")]
    Config(#[from] tickbox_core::ListError),
}
