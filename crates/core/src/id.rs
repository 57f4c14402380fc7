//! Task id generation
//!
//! Ids come from a per-list counter, never from the clock, so two tasks
//! added in quick succession can never collide.

use crate::models::TaskId;

/// Monotonic id source for one task list
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Create a generator whose first id is `1`.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next id.
    ///
    /// Ids are never reused, even after the task holding one is deleted.
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
