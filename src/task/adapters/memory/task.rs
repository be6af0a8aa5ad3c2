//! In-memory repository for tasks and their due-date ledgers.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{DueDate, DueDateLedger, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// All state sits behind one lock, so every write (including a full ledger
/// replacement) becomes visible to readers at once.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    insertion_order: Vec<TaskId>,
    due_dates: HashMap<TaskId, Vec<DueDate>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn ensure_task_exists(state: &InMemoryTaskState, task_id: TaskId) -> TaskRepositoryResult<()> {
    if state.tasks.contains_key(&task_id) {
        Ok(())
    } else {
        Err(TaskRepositoryError::NotFound(task_id))
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task, due_dates: &DueDateLedger) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        state.tasks.insert(task.id(), task.clone());
        state.insertion_order.push(task.id());
        state
            .due_dates
            .insert(task.id(), due_dates.records().to_vec());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *stored = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect())
    }

    async fn list_with_active_due_dates(
        &self,
    ) -> TaskRepositoryResult<Vec<(Task, Option<DueDate>)>> {
        let state = self.read()?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.tasks.get(id))
            .map(|task| {
                let records = state.due_dates.get(&task.id()).into_iter().flatten().copied();
                let active = DueDateLedger::from_records(task.id(), records)
                    .active()
                    .copied();
                (task.clone(), active)
            })
            .collect())
    }

    async fn load_due_dates(&self, task_id: TaskId) -> TaskRepositoryResult<DueDateLedger> {
        let state = self.read()?;
        ensure_task_exists(&state, task_id)?;
        let records = state
            .due_dates
            .get(&task_id)
            .map(|records| records.iter().copied())
            .into_iter()
            .flatten();
        Ok(DueDateLedger::from_records(task_id, records))
    }

    async fn save_due_dates(&self, due_dates: &DueDateLedger) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let task_id = due_dates.task_id();
        ensure_task_exists(&state, task_id)?;
        state
            .due_dates
            .insert(task_id, due_dates.records().to_vec());
        Ok(())
    }
}
