use thiserror::Error;

/// Error types for parsing task list input
///
/// The manager's commands never fail; these are produced only when a front
/// end turns user-typed strings into typed values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The filter name is not one of `all`, `active` or `completed`
    #[error("Unknown filter '{value}' (expected one of: all, active, completed)")]
    UnknownFilter { value: String },

    /// The task id is not a non-negative integer
    #[error("Invalid task id '{value}'")]
    InvalidTaskId { value: String },
}

/// Result type alias for task list parsing
pub type ListResult<T> = Result<T, ListError>;
