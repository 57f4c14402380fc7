//! Task list core for Tickbox
//!
//! Owns the in-memory list of tasks and the active filter for one session,
//! exposes the commands that mutate the list, and derives the visible view.
//! Front ends (the `tbx` shell and the `tbx-tui` terminal UI) forward user
//! actions into [`TaskList`] and render the [`TaskListView`] they get back.

pub mod command;
pub mod config;
pub mod edit;
pub mod error;
pub mod id;
pub mod list;
pub mod models;
pub mod view;

pub use command::{Command, Outcome};
pub use config::{TBX_FILTER_ENV, resolve_filter};
pub use edit::{EditRequest, EditResponse};
pub use error::{ListError, ListResult};
pub use id::IdGenerator;
pub use list::TaskList;
pub use models::{Filter, Task, TaskId};
pub use view::TaskListView;
