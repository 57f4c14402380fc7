//! Tickbox shell library
//!
//! Exposes the line-oriented session and its commands for use in
//! integration tests. The `tbx` binary in `main.rs` uses this library.

pub mod commands;
pub mod error;
pub mod output;
pub mod session;

pub use commands::{Command, Reply, SessionLine};
pub use error::{ShellError, ShellResult};
pub use output::OutputFormat;
pub use session::Session;
