//! Error types for task domain validation, parsing, and status transitions.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task name exceeds the permitted length.
    #[error("task name exceeds {max_chars} character limit")]
    TaskNameTooLong {
        /// Limit that was applied.
        max_chars: usize,
    },

    /// The date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid calendar date '{0}', expected YYYY-MM-DD")]
    InvalidCalendarDate(String),

    /// The task identifier is not a UUID.
    #[error("invalid task identifier '{0}'")]
    InvalidTaskId(String),
}

/// Error returned while parsing a task status from caller input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// A status change that the transition table does not permit.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("task {task_id} cannot move from {from} to {to}")]
pub struct InvalidTransitionError {
    /// Task whose status change was rejected.
    pub task_id: TaskId,
    /// Status the task currently holds.
    pub from: TaskStatus,
    /// Status that was requested.
    pub to: TaskStatus,
}
