//! Command dispatch for the task list
//!
//! Front ends translate each user action into exactly one [`Command`] and
//! call [`TaskList::apply`], which runs it and returns the updated view.

use crate::edit::{EditRequest, EditResponse};
use crate::list::TaskList;
use crate::models::{Filter, Task, TaskId};
use crate::view::TaskListView;

/// One user action against the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { text: String },
    Delete { id: TaskId },
    Toggle { id: TaskId },
    UpdateText {
        id: TaskId,
        text: String,
    },
    /// Answer to an edit started with [`TaskList::begin_edit`]
    FinishEdit {
        request: EditRequest,
        response: EditResponse,
    },
    ClearCompleted,
    SetFilter(Filter),
}

/// Effect a command had on the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(TaskId),
    Deleted(Task),
    Toggled {
        id: TaskId,
        completed: bool,
    },
    Updated(TaskId),
    /// Number of completed tasks removed
    Cleared(usize),
    FilterSet(Filter),
    /// Input was empty or the id was unknown; nothing changed
    Ignored,
}

impl Outcome {
    /// Whether the list contents or filter changed
    pub fn changed(&self) -> bool {
        !matches!(self, Outcome::Ignored | Outcome::Cleared(0))
    }
}

impl TaskList {
    /// Run one command and return its outcome together with the new view.
    pub fn apply(&mut self, command: Command) -> (Outcome, TaskListView<'_>) {
        let outcome = match command {
            Command::Add { text } => self
                .add_task(&text)
                .map_or(Outcome::Ignored, Outcome::Added),
            Command::Delete { id } => self
                .delete_task(id)
                .map_or(Outcome::Ignored, Outcome::Deleted),
            Command::Toggle { id } => match self.toggle_complete(id) {
                Some(completed) => Outcome::Toggled { id, completed },
                None => Outcome::Ignored,
            },
            Command::UpdateText { id, text } => {
                if self.update_task_text(id, &text) {
                    Outcome::Updated(id)
                } else {
                    Outcome::Ignored
                }
            }
            Command::FinishEdit { request, response } => {
                let id = request.id();
                if self.finish_edit(request, response) {
                    Outcome::Updated(id)
                } else {
                    Outcome::Ignored
                }
            }
            Command::ClearCompleted => Outcome::Cleared(self.clear_completed()),
            Command::SetFilter(filter) => {
                self.set_filter(filter);
                Outcome::FilterSet(filter)
            }
        };
        (outcome, self.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{abc_list, texts};

    #[test]
    fn test_apply_add_returns_view_with_new_task() {
        let mut list = TaskList::new();
        let (outcome, view) = list.apply(Command::Add {
            text: " Buy milk ".to_string(),
        });

        let Outcome::Added(id) = outcome else {
            panic!("expected Added, got {:?}", outcome);
        };
        assert_eq!(view.tasks.len(), 1);
        assert_eq!(view.tasks[0].id(), id);
        assert_eq!(view.tasks[0].text(), "Buy milk");
        assert_eq!(view.remaining, 1);
    }

    #[test]
    fn test_apply_add_empty_is_ignored() {
        let mut list = TaskList::new();
        let (outcome, view) = list.apply(Command::Add {
            text: "   ".to_string(),
        });
        assert_eq!(outcome, Outcome::Ignored);
        assert!(!outcome.changed());
        assert!(view.is_empty());
    }

    #[test]
    fn test_apply_delete() {
        let (mut list, [a, _, _]) = abc_list();
        let (outcome, view) = list.apply(Command::Delete { id: a });
        assert!(matches!(outcome, Outcome::Deleted(ref t) if t.id() == a));
        assert_eq!(texts(&view.tasks), ["B", "C"]);

        let (outcome, _) = list.apply(Command::Delete { id: a });
        assert_eq!(outcome, Outcome::Ignored);
    }

    #[test]
    fn test_apply_toggle() {
        let (mut list, [a, _, _]) = abc_list();
        let (outcome, view) = list.apply(Command::Toggle { id: a });
        assert_eq!(
            outcome,
            Outcome::Toggled {
                id: a,
                completed: true
            }
        );
        assert_eq!(view.remaining, 1);
    }

    #[test]
    fn test_apply_update_text() {
        let (mut list, [_, _, c]) = abc_list();
        let (outcome, view) = list.apply(Command::UpdateText {
            id: c,
            text: "C2".to_string(),
        });
        assert_eq!(outcome, Outcome::Updated(c));
        assert_eq!(texts(&view.tasks), ["A", "B", "C2"]);

        let (outcome, _) = list.apply(Command::UpdateText {
            id: c,
            text: String::new(),
        });
        assert_eq!(outcome, Outcome::Ignored);
    }

    #[test]
    fn test_apply_finish_edit() {
        let (mut list, [a, b, _]) = abc_list();

        let request = list.begin_edit(a).unwrap();
        let (outcome, view) = list.apply(Command::FinishEdit {
            request,
            response: EditResponse::Submit(" A2 ".to_string()),
        });
        assert_eq!(outcome, Outcome::Updated(a));
        assert_eq!(texts(&view.tasks), ["A2", "B", "C"]);

        let request = list.begin_edit(b).unwrap();
        let (outcome, _) = list.apply(Command::FinishEdit {
            request,
            response: EditResponse::Cancel,
        });
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(list.get(b).unwrap().text(), "B");
    }

    #[test]
    fn test_apply_clear_completed() {
        let (mut list, _) = abc_list();
        let (outcome, view) = list.apply(Command::ClearCompleted);
        assert_eq!(outcome, Outcome::Cleared(1));
        assert!(outcome.changed());
        assert_eq!(texts(&view.tasks), ["A", "C"]);

        let (outcome, _) = list.apply(Command::ClearCompleted);
        assert_eq!(outcome, Outcome::Cleared(0));
        assert!(!outcome.changed());
    }

    #[test]
    fn test_apply_set_filter_returns_filtered_view() {
        let (mut list, _) = abc_list();
        let (outcome, view) = list.apply(Command::SetFilter(Filter::Completed));
        assert_eq!(outcome, Outcome::FilterSet(Filter::Completed));
        assert_eq!(texts(&view.tasks), ["B"]);
        assert_eq!(view.remaining, 2);
    }
}
