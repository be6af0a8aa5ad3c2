//! Domain model for task lifecycle management.
//!
//! Tasks and due dates are plain value records. The rules that relate them
//! (the status transition table and the single-active-deadline ledger) are
//! pure functions over those values, applied by the lifecycle service.

mod calendar;
mod due_date;
mod error;
mod ids;
mod status;
mod task;

pub use calendar::CalendarDate;
pub use due_date::{DueDate, DueDateChange, DueDateHistory, DueDateLedger};
pub use error::{InvalidTransitionError, ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskName};
pub use status::{StatusTransition, TaskStatus};
pub use task::Task;
