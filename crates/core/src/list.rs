//! The task list manager
//!
//! [`TaskList`] is the single owner of a session's tasks and filter. Every
//! mutation goes through one of its commands; invalid input is normalized
//! or ignored rather than rejected.

use tracing::{debug, trace};

use crate::id::IdGenerator;
use crate::models::{Filter, Task, TaskId, normalize_text};
use crate::view::TaskListView;

/// Owned, single-session task list with its active filter
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    /// Tasks in insertion order
    tasks: Vec<Task>,
    /// Filter applied to the derived view
    filter: Filter,
    /// Source of fresh task ids
    ids: IdGenerator,
}

static_assertions::assert_impl_all!(TaskList: Send, Sync);

impl TaskList {
    /// Create an empty list with the `All` filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list starting with the given filter.
    pub fn with_filter(filter: Filter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Append a task with the trimmed text.
    ///
    /// Returns the new id, or `None` if the text was empty after trimming
    /// (the list is left unchanged).
    pub fn add_task(&mut self, raw: &str) -> Option<TaskId> {
        let Some(text) = normalize_text(raw) else {
            trace!("ignoring add with empty text");
            return None;
        };
        let id = self.ids.next_id();
        debug!(%id, "adding task");
        self.tasks.push(Task::new(id, text));
        Some(id)
    }

    /// Remove the task with the given id.
    ///
    /// Returns the removed task, or `None` if no task had that id.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let Some(pos) = self.position(id) else {
            trace!(%id, "ignoring delete of unknown task");
            return None;
        };
        debug!(%id, "deleting task");
        Some(self.tasks.remove(pos))
    }

    /// Flip the completion flag of the task with the given id.
    ///
    /// Returns the new completion state, or `None` if no task had that id.
    pub fn toggle_complete(&mut self, id: TaskId) -> Option<bool> {
        let Some(task) = self.get_mut(id) else {
            trace!(%id, "ignoring toggle of unknown task");
            return None;
        };
        let completed = task.toggle();
        debug!(%id, completed, "toggled task");
        Some(completed)
    }

    /// Replace a task's text with the trimmed `new_text`.
    ///
    /// An empty or all-whitespace `new_text` is treated as a cancelled edit.
    /// Returns `true` only if the text was replaced.
    pub fn update_task_text(&mut self, id: TaskId, new_text: &str) -> bool {
        let Some(text) = normalize_text(new_text) else {
            trace!(%id, "ignoring update with empty text");
            return false;
        };
        let Some(task) = self.get_mut(id) else {
            trace!(%id, "ignoring update of unknown task");
            return false;
        };
        debug!(%id, "updating task text");
        task.set_text(text);
        true
    }

    /// Remove every completed task, keeping the order of the rest.
    ///
    /// Returns the number of tasks removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_completed());
        let removed = before - self.tasks.len();
        debug!(removed, "cleared completed tasks");
        removed
    }

    /// Select which tasks the view shows.
    pub fn set_filter(&mut self, filter: Filter) {
        debug!(%filter, "setting filter");
        self.filter = filter;
    }

    /// Current filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Tasks matching the current filter, in list order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.visible_iter().collect()
    }

    /// Iterator form of [`TaskList::visible_tasks`].
    pub fn visible_iter(&self) -> impl Iterator<Item = &Task> + '_ {
        let filter = self.filter;
        self.tasks.iter().filter(move |task| filter.matches(task))
    }

    /// Number of tasks not yet completed, regardless of the filter.
    pub fn remaining_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| !task.is_completed())
            .count()
    }

    /// All tasks in insertion order, ignoring the filter.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Snapshot of what a front end should render.
    pub fn view(&self) -> TaskListView<'_> {
        TaskListView::new(self)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}
