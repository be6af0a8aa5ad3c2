//! Keyed locks that serialize mutations of the same task.

use crate::task::domain::TaskId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry handing out one async mutex per task.
///
/// Holders of the guard for a task are the only writers of that task's
/// status and due dates. Different tasks never wait on each other beyond
/// the brief registry lookup.
#[derive(Debug, Default)]
pub(crate) struct TaskLocks {
    locks: Mutex<HashMap<TaskId, Arc<Mutex<()>>>>,
}

impl TaskLocks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `task_id`.
    pub(crate) async fn acquire(&self, task_id: TaskId) -> OwnedMutexGuard<()> {
        let task_lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(task_id).or_default())
        };
        task_lock.lock_owned().await
    }
}
