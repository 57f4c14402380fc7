//! Derived view of a task list
//!
//! A [`TaskListView`] is what every command hands back to the front end:
//! the visible tasks under the current filter plus the footer numbers.

use serde::Serialize;

use crate::list::TaskList;
use crate::models::{Filter, Task};

/// Snapshot of the visible part of a task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListView<'a> {
    /// Filter the snapshot was taken under
    pub filter: Filter,
    /// Tasks matching `filter`, in list order
    pub tasks: Vec<&'a Task>,
    /// Active tasks across the whole list
    pub remaining: usize,
    /// Tasks in the whole list
    pub total: usize,
}

impl<'a> TaskListView<'a> {
    pub(crate) fn new(list: &'a TaskList) -> Self {
        Self {
            filter: list.filter(),
            tasks: list.visible_tasks(),
            remaining: list.remaining_count(),
            total: list.len(),
        }
    }

    /// Footer text, e.g. `"2 items left"`.
    pub fn remaining_label(&self) -> String {
        format!("{} items left", self.remaining)
    }

    /// Whether any task in the list (not just the visible ones) is completed
    pub fn has_completed(&self) -> bool {
        self.remaining < self.total
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
