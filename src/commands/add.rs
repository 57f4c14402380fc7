//! Add command for appending tasks
//!
//! Implements the `add` session command. Empty text is silently ignored.

use clap::Args;
use tickbox_core::{Command as ListCommand, TaskList};

use super::Reply;
use crate::error::ShellResult;
use crate::output::OutputFormat;

/// Add a task to the end of the list
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Task text, the rest of the line as typed
    #[arg(default_value = "")]
    pub text: String,
}

impl AddCommand {
    /// Build the command from everything after the `add` word.
    pub fn from_rest(rest: &str) -> Self {
        Self {
            text: rest.to_string(),
        }
    }

    /// Execute the add command.
    pub fn execute(&self, list: &mut TaskList, format: OutputFormat) -> ShellResult<Reply> {
        let (outcome, view) = list.apply(ListCommand::Add {
            text: self.text.clone(),
        });
        Reply::applied(outcome, &view, format)
    }
}
