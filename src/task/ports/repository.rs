//! Repository port for task and due-date storage.

use crate::task::domain::{DueDate, DueDateLedger, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// Implementations apply each write as a single unit: readers observe either
/// the state before a call or the state after it, never a mixture.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task together with its initial due-date ledger.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task, due_dates: &DueDateLedger) -> TaskRepositoryResult<()>;

    /// Persists a changed task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task in the order it was stored.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task in store order paired with its active due date,
    /// read from a single consistent view of storage.
    async fn list_with_active_due_dates(
        &self,
    ) -> TaskRepositoryResult<Vec<(Task, Option<DueDate>)>>;

    /// Loads the due-date ledger of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn load_due_dates(&self, task_id: TaskId) -> TaskRepositoryResult<DueDateLedger>;

    /// Replaces the due-date ledger of a task in one write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn save_due_dates(&self, due_dates: &DueDateLedger) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
