//! Application services for task lifecycle orchestration.

mod config;
mod lifecycle;
mod locks;

pub use config::{ClosedTaskPolicy, TaskServiceConfig};
pub use lifecycle::{
    ChangeStatusRequest, CreateTaskRequest, TaskErrorKind, TaskLifecycleError,
    TaskLifecycleResult, TaskLifecycleService,
};
