//! Shared world state for due-date scheduling BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskwell::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{DueDateChange, Task},
    services::{TaskLifecycleError, TaskLifecycleService, TaskServiceConfig},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for due-date behaviour tests.
pub struct DueDateWorld {
    pub service: TestTaskService,
    pub task: Option<Task>,
    pub last_set_result: Option<Result<DueDateChange, TaskLifecycleError>>,
}

impl DueDateWorld {
    /// Creates a world backed by a service with the given configuration.
    #[must_use]
    pub fn with_config(config: TaskServiceConfig) -> Self {
        let service = TaskLifecycleService::with_config(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
            config,
        );

        Self {
            service,
            task: None,
            last_set_result: None,
        }
    }

    /// Returns the task the scenario is acting on.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
    }
}

impl Default for DueDateWorld {
    fn default() -> Self {
        Self::with_config(TaskServiceConfig::default())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DueDateWorld {
    DueDateWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
