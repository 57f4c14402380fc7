//! Data models for Tickbox
//!
//! Defines the task record, its identifier, and the three-valued filter
//! that selects which tasks are visible.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ListError, ListResult};

/// Unique identifier of a task within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wrap a raw id value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TaskId {
    type Err = ListError;

    /// Parse a decimal id. A leading `#` is accepted so ids can be typed
    /// back the way the shell prints them.
    fn from_str(s: &str) -> ListResult<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .map(TaskId)
            .map_err(|_| ListError::InvalidTaskId {
                value: s.to_string(),
            })
    }
}

/// A single to-do item
///
/// Fields are private: text is only ever stored trimmed and non-empty, and
/// that invariant is maintained by [`crate::TaskList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Create an active task. Callers must pass already-normalized text.
    pub(crate) fn new(id: TaskId, text: String) -> Self {
        debug_assert!(!text.is_empty() && text.trim() == text);
        Self {
            id,
            text,
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// When the task was added
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_text(&mut self, text: String) {
        debug_assert!(!text.is_empty() && text.trim() == text);
        self.text = text;
    }

    /// Flip the completion flag and return the new value.
    pub(crate) fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

/// Trim user input, returning `None` when nothing is left.
pub(crate) fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// View selector controlling which tasks are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Every filter value in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Returns whether a task belongs in the view selected by this filter
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.is_completed(),
            Filter::Completed => task.is_completed(),
        }
    }

    /// Returns the lowercase name used on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Returns the capitalized name shown on filter controls
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Cycle to the next filter.
    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Position of this filter in [`Filter::ALL`].
    pub fn index(self) -> usize {
        match self {
            Filter::All => 0,
            Filter::Active => 1,
            Filter::Completed => 2,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = ListError;

    fn from_str(s: &str) -> ListResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            _ => Err(ListError::UnknownFilter {
                value: s.to_string(),
            }),
        }
    }
}
