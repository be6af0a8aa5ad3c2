//! Configuration for the task lifecycle service.

use crate::task::domain::TaskName;
use serde::{Deserialize, Serialize};

/// Whether due dates of `Done` or `Deleted` tasks may still change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosedTaskPolicy {
    /// Reject due-date changes on closed tasks.
    #[default]
    Reject,
    /// Allow due-date changes regardless of status.
    Allow,
}

/// Tunable rules applied by [`super::TaskLifecycleService`].
///
/// Missing fields take their default values when deserialized, so a host
/// can load a partial JSON document.
///
/// # Examples
///
/// ```
/// use taskwell::task::services::{ClosedTaskPolicy, TaskServiceConfig};
///
/// let config: TaskServiceConfig =
///     serde_json::from_str(r#"{ "closed_task_policy": "allow" }"#).expect("valid config");
/// assert_eq!(config.closed_task_policy, ClosedTaskPolicy::Allow);
/// assert_eq!(config.max_name_chars, TaskServiceConfig::default().max_name_chars);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskServiceConfig {
    /// Treatment of due-date changes on closed tasks.
    pub closed_task_policy: ClosedTaskPolicy,
    /// Maximum task name length in characters, clamped to
    /// `1..=`[`TaskName::MAX_CHARS`] when applied.
    pub max_name_chars: usize,
}

impl Default for TaskServiceConfig {
    fn default() -> Self {
        Self {
            closed_task_policy: ClosedTaskPolicy::Reject,
            max_name_chars: 120,
        }
    }
}

impl TaskServiceConfig {
    /// Creates a configuration that lets closed tasks keep changing due
    /// dates and accepts names up to the hard limit.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            closed_task_policy: ClosedTaskPolicy::Allow,
            max_name_chars: TaskName::MAX_CHARS,
        }
    }

    /// Sets the closed-task policy.
    #[must_use]
    pub const fn with_closed_task_policy(mut self, policy: ClosedTaskPolicy) -> Self {
        self.closed_task_policy = policy;
        self
    }

    /// Sets the maximum task name length.
    ///
    /// Values outside `1..=`[`TaskName::MAX_CHARS`] are clamped into that
    /// range.
    #[must_use]
    pub const fn with_max_name_chars(mut self, max_name_chars: usize) -> Self {
        self.max_name_chars = if max_name_chars == 0 {
            1
        } else if max_name_chars > TaskName::MAX_CHARS {
            TaskName::MAX_CHARS
        } else {
            max_name_chars
        };
        self
    }
}
