//! Filter command for choosing which tasks are shown

use clap::Args;
use tickbox_core::{Command as ListCommand, Filter, TaskList};

use super::Reply;
use crate::error::ShellResult;
use crate::output::OutputFormat;

/// Show all, active or completed tasks
#[derive(Debug, Args)]
pub struct FilterCommand {
    /// One of: all, active, completed
    #[arg(required = true)]
    pub value: Filter,
}

impl FilterCommand {
    /// Execute the filter command.
    pub fn execute(&self, list: &mut TaskList, format: OutputFormat) -> ShellResult<Reply> {
        let (outcome, view) = list.apply(ListCommand::SetFilter(self.value));
        Reply::applied(outcome, &view, format)
    }
}
