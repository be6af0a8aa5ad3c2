//! Task record and its construction rules.

use super::{CalendarDate, TaskId, TaskName, TaskStatus};
use serde::{Deserialize, Serialize};

/// A trackable unit of work.
///
/// Every field except `status` is fixed at construction. Status changes go
/// through [`crate::task::services::TaskLifecycleService`], which produces a
/// new record via the crate-private `Task::with_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    description: String,
    creation_date: CalendarDate,
    status: TaskStatus,
}

impl Task {
    /// Creates a new task in [`TaskStatus::Created`] with a fresh identifier.
    ///
    /// Both `name` and `creation_date` arrive already validated; building
    /// them is where malformed input is rejected.
    #[must_use]
    pub fn new(name: TaskName, description: impl Into<String>, creation_date: CalendarDate) -> Self {
        Self {
            id: TaskId::new(),
            name,
            description: description.into(),
            creation_date,
            status: TaskStatus::Created,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the free-text description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the day the task was created.
    #[must_use]
    pub const fn creation_date(&self) -> CalendarDate {
        self.creation_date
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns a copy of this task carrying `status`.
    ///
    /// The transition table is not consulted here.
    #[must_use]
    pub(crate) fn with_status(&self, status: TaskStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}
