//! TUI module for Tickbox
//!
//! Provides a terminal user interface for adding, completing, editing,
//! filtering and deleting tasks using ratatui and crossterm.

pub mod app;
pub mod error;
pub mod event;
pub mod ui;

pub use app::{App, InputMode};
pub use error::{TuiError, TuiResult};
