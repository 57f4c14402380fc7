//! Delete command for removing tasks

use clap::Args;
use tickbox_core::{Command as ListCommand, TaskId, TaskList};

use super::Reply;
use crate::error::ShellResult;
use crate::output::OutputFormat;

/// Delete a task
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Task ID to delete
    #[arg(required = true)]
    pub id: TaskId,
}

impl DeleteCommand {
    /// Execute the delete command. Unknown ids change nothing.
    pub fn execute(&self, list: &mut TaskList, format: OutputFormat) -> ShellResult<Reply> {
        let (outcome, view) = list.apply(ListCommand::Delete { id: self.id });
        Reply::applied(outcome, &view, format)
    }
}
