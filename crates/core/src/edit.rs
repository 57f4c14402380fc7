//! Text edits as an explicit request/response exchange
//!
//! The front end asks for an [`EditRequest`] to learn the current text,
//! collects input however it likes, then hands back an [`EditResponse`].
//! The list itself never waits on input.

use crate::list::TaskList;
use crate::models::TaskId;

/// A pending edit of one task's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    id: TaskId,
    current_text: String,
}

impl EditRequest {
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Text the input widget should be seeded with
    pub fn current_text(&self) -> &str {
        &self.current_text
    }
}

/// What the user did with an edit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditResponse {
    /// Replacement text, still untrimmed
    Submit(String),
    Cancel,
}

/// Raw input from a prompt; `None` (no input at all) cancels.
impl From<Option<String>> for EditResponse {
    fn from(input: Option<String>) -> Self {
        match input {
            Some(text) => EditResponse::Submit(text),
            None => EditResponse::Cancel,
        }
    }
}

impl TaskList {
    /// Start editing a task. Returns `None` if the id is unknown.
    pub fn begin_edit(&self, id: TaskId) -> Option<EditRequest> {
        self.get(id).map(|task| EditRequest {
            id,
            current_text: task.text().to_string(),
        })
    }

    /// Apply the answer to an edit request.
    ///
    /// Empty submissions behave like [`EditResponse::Cancel`]. If the task
    /// was deleted while the edit was pending, nothing happens. Returns
    /// `true` if the text was replaced.
    pub fn finish_edit(&mut self, request: EditRequest, response: EditResponse) -> bool {
        match response {
            EditResponse::Submit(text) => self.update_task_text(request.id, &text),
            EditResponse::Cancel => false,
        }
    }
}
