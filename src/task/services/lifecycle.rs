//! Service layer for task creation, status changes, and due-date scheduling.

use super::{ClosedTaskPolicy, TaskServiceConfig, locks::TaskLocks};
use crate::task::{
    domain::{
        CalendarDate, DueDate, DueDateChange, DueDateHistory, DueDateLedger,
        InvalidTransitionError, ParseTaskStatusError, StatusTransition, Task, TaskDomainError,
        TaskId, TaskName, TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
///
/// Dates are accepted as caller-supplied `YYYY-MM-DD` text and validated when
/// the request is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    description: String,
    creation_date: Option<String>,
    due_date: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            creation_date: None,
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the creation date. Defaults to today (UTC) when omitted.
    #[must_use]
    pub fn with_creation_date(mut self, creation_date: impl Into<String>) -> Self {
        self.creation_date = Some(creation_date.into());
        self
    }

    /// Sets an initial due date, created as the active one.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

/// Request payload for moving a task to another status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStatusRequest {
    task_id: TaskId,
    target_status: String,
}

impl ChangeStatusRequest {
    /// Creates a status change request.
    #[must_use]
    pub fn new(task_id: TaskId, target_status: impl Into<String>) -> Self {
        Self {
            task_id,
            target_status: target_status.into(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the requested target status as supplied.
    #[must_use]
    pub fn target_status(&self) -> &str {
        &self.target_status
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Caller input failed validation.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// The requested status string is not a known status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),
    /// The transition table rejected the status change.
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransitionError),
    /// The task is closed and the configured policy rejects the change.
    #[error("task {task_id} is {status} and its due dates can no longer change")]
    TaskClosed {
        /// Task that rejected the change.
        task_id: TaskId,
        /// Terminal status the task holds.
        status: TaskStatus,
    },
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(task_id) => Self::NotFound(task_id),
            other => Self::Repository(other),
        }
    }
}

/// Broad category of a [`TaskLifecycleError`], as shown to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskErrorKind {
    /// Input the user can correct.
    Validation,
    /// The referenced task does not exist.
    NotFound,
    /// The requested action is not allowed in the task's current status.
    InvalidTransition,
    /// Storage failed; nothing the user entered is at fault.
    Storage,
}

impl TaskLifecycleError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> TaskErrorKind {
        match self {
            Self::Validation(_) | Self::InvalidStatus(_) => TaskErrorKind::Validation,
            Self::NotFound(_) => TaskErrorKind::NotFound,
            Self::InvalidTransition(_) | Self::TaskClosed { .. } => {
                TaskErrorKind::InvalidTransition
            }
            Self::Repository(_) => TaskErrorKind::Storage,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// The only component that mutates task status or due dates. Status changes
/// and due-date changes for one task are serialized; different tasks proceed
/// independently.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mockable::DefaultClock;
/// use taskwell::task::{
///     adapters::memory::InMemoryTaskRepository,
///     services::{ChangeStatusRequest, CreateTaskRequest, TaskLifecycleService},
/// };
///
/// # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
/// let service = TaskLifecycleService::new(
///     Arc::new(InMemoryTaskRepository::new()),
///     Arc::new(DefaultClock),
/// );
/// let task = service
///     .create_task(
///         CreateTaskRequest::new("Pay rent")
///             .with_creation_date("2024-01-01")
///             .with_due_date("2024-01-05"),
///     )
///     .await
///     .expect("valid task");
///
/// let active = service.active_due_date(task.id()).await.expect("known task");
/// assert_eq!(active.map(|record| record.due_date().to_string()), Some("2024-01-05".to_owned()));
///
/// let done = service
///     .change_status(ChangeStatusRequest::new(task.id(), "Done"))
///     .await
///     .expect("Created -> Done is allowed");
/// assert_eq!(done.status().as_str(), "Done");
/// # });
/// ```
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: TaskServiceConfig,
    locks: Arc<TaskLocks>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service with default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, TaskServiceConfig::default())
    }

    /// Creates a new task lifecycle service with custom configuration.
    #[must_use]
    pub fn with_config(repository: Arc<R>, clock: Arc<C>, config: TaskServiceConfig) -> Self {
        Self {
            repository,
            clock,
            config,
            locks: Arc::new(TaskLocks::new()),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskServiceConfig {
        &self.config
    }

    async fn find_task_or_error(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }

    /// Creates a task in [`TaskStatus::Created`].
    ///
    /// When the request carries a due date, the task is stored together with
    /// one active due-date record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for an empty or over-long
    /// name or a malformed date, and repository errors when storage fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let name = TaskName::with_limit(request.name, self.config.max_name_chars)?;
        let creation_date = match request.creation_date.as_deref() {
            Some(raw) => CalendarDate::parse(raw)?,
            None => CalendarDate::today(&*self.clock),
        };
        let due_date = request
            .due_date
            .as_deref()
            .map(CalendarDate::parse)
            .transpose()?;

        let task = Task::new(name, request.description, creation_date);
        let ledger = match due_date {
            Some(date) => DueDateLedger::empty(task.id()).activate(date).0,
            None => DueDateLedger::empty(task.id()),
        };

        self.repository.store(&task, &ledger).await?;
        info!(
            task_id = %task.id(),
            creation_date = %task.creation_date(),
            due_date = due_date.map(|date| date.to_string()),
            "task created"
        );
        Ok(task)
    }

    /// Retrieves a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown identifier.
    pub async fn get_task(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.find_task_or_error(task_id).await
    }

    /// Lists all tasks, including soft-deleted ones, in creation order.
    ///
    /// # Errors
    ///
    /// Returns repository errors when storage lookup fails.
    pub async fn list_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Lists all tasks in creation order, each with its active due date.
    ///
    /// Tasks and deadlines come from one storage read, so a deadline is never
    /// paired with a task status from a different moment.
    ///
    /// # Errors
    ///
    /// Returns repository errors when storage lookup fails.
    pub async fn list_tasks_with_due_dates(
        &self,
    ) -> TaskLifecycleResult<Vec<(Task, Option<DueDate>)>> {
        Ok(self.repository.list_with_active_due_dates().await?)
    }

    /// Moves a task to the requested status.
    ///
    /// A permitted move that leaves the status as it is (re-postponing or
    /// re-deleting) returns the task without writing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidStatus`] for an unknown status
    /// string, [`TaskLifecycleError::NotFound`] for an unknown task, and
    /// [`TaskLifecycleError::InvalidTransition`] when the transition table
    /// rejects the move. The task is unchanged on every error.
    pub async fn change_status(&self, request: ChangeStatusRequest) -> TaskLifecycleResult<Task> {
        let target = TaskStatus::try_from(request.target_status())?;
        self.apply_status(request.task_id(), target).await
    }

    /// Soft-deletes a task by moving it to [`TaskStatus::Deleted`].
    ///
    /// Succeeds from every status. Deleting a task that is already deleted
    /// returns it unchanged without writing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown task and
    /// repository errors when storage fails.
    pub async fn delete_task(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.apply_status(task_id, TaskStatus::Deleted).await
    }

    async fn apply_status(&self, task_id: TaskId, target: TaskStatus) -> TaskLifecycleResult<Task> {
        let _guard = self.locks.acquire(task_id).await;
        let task = self.find_task_or_error(task_id).await?;
        let from = task.status();

        let Some(transition) = from.transition_to(target) else {
            debug!(%task_id, %from, to = %target, "status transition rejected");
            return Err(InvalidTransitionError {
                task_id,
                from,
                to: target,
            }
            .into());
        };

        if transition == StatusTransition::Unchanged {
            debug!(%task_id, status = %from, "status transition left task unchanged");
            return Ok(task);
        }

        let updated = task.with_status(target);
        self.repository.update(&updated).await?;
        info!(%task_id, %from, to = %target, "task status changed");
        Ok(updated)
    }

    /// Makes `due_date` the task's active deadline.
    ///
    /// The previous active record is deactivated in the same store write.
    /// Setting a date that is already in the history reactivates that record;
    /// setting the currently active date changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for a malformed date,
    /// [`TaskLifecycleError::NotFound`] for an unknown task, and
    /// [`TaskLifecycleError::TaskClosed`] when the task is `Done` or
    /// `Deleted` under [`ClosedTaskPolicy::Reject`].
    pub async fn set_due_date(
        &self,
        task_id: TaskId,
        due_date: &str,
    ) -> TaskLifecycleResult<DueDateChange> {
        let date = CalendarDate::parse(due_date)?;
        let _guard = self.locks.acquire(task_id).await;
        self.ensure_due_dates_writable(task_id).await?;

        let ledger = self.repository.load_due_dates(task_id).await?;
        let (next, change) = ledger.activate(date);
        if change.is_modified() {
            self.repository.save_due_dates(&next).await?;
        }

        info!(%task_id, due_date = %date, outcome = change.as_str(), "due date set");
        Ok(change)
    }

    /// Deactivates the task's active deadline.
    ///
    /// Returns the deactivated record, or `None` when no deadline was active;
    /// the latter is not an error and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown task and
    /// [`TaskLifecycleError::TaskClosed`] when the task is `Done` or
    /// `Deleted` under [`ClosedTaskPolicy::Reject`].
    pub async fn clear_due_date(&self, task_id: TaskId) -> TaskLifecycleResult<Option<DueDate>> {
        let _guard = self.locks.acquire(task_id).await;
        self.ensure_due_dates_writable(task_id).await?;

        let ledger = self.repository.load_due_dates(task_id).await?;
        let (next, cleared) = ledger.clear();
        if let Some(record) = cleared {
            self.repository.save_due_dates(&next).await?;
            info!(%task_id, due_date = %record.due_date(), "due date cleared");
        } else {
            debug!(%task_id, "no active due date to clear");
        }
        Ok(cleared)
    }

    async fn ensure_due_dates_writable(&self, task_id: TaskId) -> TaskLifecycleResult<()> {
        let task = self.find_task_or_error(task_id).await?;
        let status = task.status();
        if status.is_terminal() && self.config.closed_task_policy == ClosedTaskPolicy::Reject {
            debug!(%task_id, %status, "due date change rejected on closed task");
            return Err(TaskLifecycleError::TaskClosed { task_id, status });
        }
        Ok(())
    }

    /// Returns the task's active deadline, if one is set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown task.
    pub async fn active_due_date(&self, task_id: TaskId) -> TaskLifecycleResult<Option<DueDate>> {
        let ledger = self.repository.load_due_dates(task_id).await?;
        Ok(ledger.active().copied())
    }

    /// Returns every due-date record of the task, ascending by date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown task.
    pub async fn due_date_history(&self, task_id: TaskId) -> TaskLifecycleResult<DueDateHistory> {
        let ledger = self.repository.load_due_dates(task_id).await?;
        Ok(DueDateHistory::from(ledger))
    }

    /// Returns the record for a specific date, whether active or not.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for a malformed date and
    /// [`TaskLifecycleError::NotFound`] for an unknown task.
    pub async fn due_date_on(
        &self,
        task_id: TaskId,
        due_date: &str,
    ) -> TaskLifecycleResult<Option<DueDate>> {
        let date = CalendarDate::parse(due_date)?;
        let ledger = self.repository.load_due_dates(task_id).await?;
        Ok(ledger.find(date).copied())
    }
}
