//! Toggle command for completing and reopening tasks

use clap::Args;
use tickbox_core::{Command as ListCommand, TaskId, TaskList};

use super::Reply;
use crate::error::ShellResult;
use crate::output::OutputFormat;

/// Mark a task completed, or reopen it
#[derive(Debug, Args)]
pub struct ToggleCommand {
    /// Task ID (as printed in the ID column, `#` prefix optional)
    #[arg(required = true)]
    pub id: TaskId,
}

impl ToggleCommand {
    /// Execute the toggle command. Unknown ids change nothing.
    pub fn execute(&self, list: &mut TaskList, format: OutputFormat) -> ShellResult<Reply> {
        let (outcome, view) = list.apply(ListCommand::Toggle { id: self.id });
        Reply::applied(outcome, &view, format)
    }
}
