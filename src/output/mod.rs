//! Output formatting module for Tickbox
//!
//! Renders task list views as aligned tables or JSON, and describes the
//! outcome of each command in one line.

use chrono::Local;
use serde::Serialize;
use tickbox_core::{Outcome, Task, TaskListView};

use crate::error::ShellResult;

/// Maximum width for the text column before truncation
const MAX_TEXT_WIDTH: usize = 48;

/// How the session prints results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputFormat {
    /// Print JSON lines instead of tables
    pub json: bool,
    /// Skip printing the view after each command
    pub quiet: bool,
    /// Print a `> ` prompt before reading each line
    pub prompt: bool,
}

/// Truncate a string to the specified maximum width, adding ellipsis if needed.
fn truncate(s: &str, max_width: usize) -> String {
    let len = s.chars().count();
    if len <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{}...", head)
    }
}

/// Completion mark shown in the table
fn mark(task: &Task) -> &'static str {
    if task.is_completed() { "[x]" } else { "[ ]" }
}

/// Format a view into an aligned table followed by the footer.
///
/// Produces output in the format:
/// ```text
/// ID  Done  Added  Text
/// --  ----  -----  ----------
/// 1   [ ]   09:14  Buy milk
/// 2   [x]   09:15  Walk the dog
///
/// 1 items left | filter: all
/// ```
pub fn format_view_table(view: &TaskListView<'_>) -> String {
    let mut output = String::new();

    if view.is_empty() {
        output.push_str("No tasks.\n");
    } else {
        let headers = ["ID", "Done", "Added", "Text"];

        let id_width = view
            .tasks
            .iter()
            .map(|t| t.id().to_string().len())
            .max()
            .unwrap_or(0)
            .max(headers[0].len());
        let done_width = headers[1].len();
        let added_width = headers[2].len();
        let text_width = view
            .tasks
            .iter()
            .map(|t| t.text().chars().count().min(MAX_TEXT_WIDTH))
            .max()
            .unwrap_or(0)
            .max(headers[3].len());

        output.push_str(&format!(
            "{:<id_w$}  {:<done_w$}  {:<added_w$}  {}\n",
            headers[0],
            headers[1],
            headers[2],
            headers[3],
            id_w = id_width,
            done_w = done_width,
            added_w = added_width,
        ));
        output.push_str(&format!(
            "{:-<id_w$}  {:-<done_w$}  {:-<added_w$}  {:-<text_w$}\n",
            "",
            "",
            "",
            "",
            id_w = id_width,
            done_w = done_width,
            added_w = added_width,
            text_w = text_width,
        ));

        for task in &view.tasks {
            output.push_str(&format!(
                "{:<id_w$}  {:<done_w$}  {:<added_w$}  {}\n",
                task.id(),
                mark(task),
                task.created_at().with_timezone(&Local).format("%H:%M"),
                truncate(task.text(), MAX_TEXT_WIDTH),
                id_w = id_width,
                done_w = done_width,
                added_w = added_width,
            ));
        }
    }

    output.push('\n');
    output.push_str(&format_footer(view));
    output
}

/// Footer line: remaining count and the active filter.
pub fn format_footer(view: &TaskListView<'_>) -> String {
    format!("{} | filter: {}", view.remaining_label(), view.filter)
}

/// Format a view as a single JSON line.
pub fn format_view_json(view: &TaskListView<'_>) -> ShellResult<String> {
    Ok(serde_json::to_string(view)?)
}

/// Format a view in the requested format.
pub fn format_view(view: &TaskListView<'_>, format: OutputFormat) -> ShellResult<String> {
    if format.json {
        format_view_json(view)
    } else {
        Ok(format_view_table(view))
    }
}

#[derive(Serialize)]
struct RemainingJson {
    remaining: usize,
}

/// Format the remaining-count query.
pub fn format_remaining(remaining: usize, format: OutputFormat) -> ShellResult<String> {
    if format.json {
        Ok(serde_json::to_string(&RemainingJson { remaining })?)
    } else {
        Ok(format!("{} items left", remaining))
    }
}

/// One-line description of what a command did.
pub fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Added(id) => format!("Added task #{}", id),
        Outcome::Deleted(task) => format!("Deleted task #{}: {}", task.id(), task.text()),
        Outcome::Toggled { id, completed } => {
            let verb = if *completed { "Completed" } else { "Reopened" };
            format!("{} task #{}", verb, id)
        }
        Outcome::Updated(id) => format!("Updated task #{}", id),
        Outcome::Cleared(0) => "No completed tasks to clear".to_string(),
        Outcome::Cleared(n) => format!("Cleared {} completed task(s)", n),
        Outcome::FilterSet(filter) => format!("Showing {} tasks", filter),
        Outcome::Ignored => "Nothing changed".to_string(),
    }
}
