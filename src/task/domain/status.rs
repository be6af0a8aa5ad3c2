//! Task status values and the transition table that governs them.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task is open. Every task starts here.
    Created,
    /// Task has been completed.
    Done,
    /// Task has been soft-deleted.
    Deleted,
    /// Task has been abandoned.
    Dropped,
    /// Task has been deferred to a later date.
    Postponed,
}

/// Result of checking a status change against the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTransition {
    /// The status moves to a different value.
    Changed,
    /// The move is permitted but leaves the status as it is.
    Unchanged,
}

/// Permitted status moves as `(from, to, effect)` rows.
///
/// Any pair missing from this table is rejected. Every status may move to
/// `Deleted`, nothing leaves it, and `Done` has the single exit to `Deleted`.
const TRANSITIONS: [(TaskStatus, TaskStatus, StatusTransition); 11] = [
    (TaskStatus::Created, TaskStatus::Done, StatusTransition::Changed),
    (TaskStatus::Created, TaskStatus::Postponed, StatusTransition::Changed),
    (TaskStatus::Created, TaskStatus::Dropped, StatusTransition::Changed),
    (TaskStatus::Created, TaskStatus::Deleted, StatusTransition::Changed),
    (TaskStatus::Postponed, TaskStatus::Created, StatusTransition::Changed),
    (TaskStatus::Postponed, TaskStatus::Postponed, StatusTransition::Unchanged),
    (TaskStatus::Postponed, TaskStatus::Dropped, StatusTransition::Changed),
    (TaskStatus::Postponed, TaskStatus::Deleted, StatusTransition::Changed),
    (TaskStatus::Dropped, TaskStatus::Deleted, StatusTransition::Changed),
    (TaskStatus::Done, TaskStatus::Deleted, StatusTransition::Changed),
    (TaskStatus::Deleted, TaskStatus::Deleted, StatusTransition::Unchanged),
];

impl TaskStatus {
    /// All statuses in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Created,
        Self::Done,
        Self::Deleted,
        Self::Dropped,
        Self::Postponed,
    ];

    /// Returns the canonical textual representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Done => "Done",
            Self::Deleted => "Deleted",
            Self::Dropped => "Dropped",
            Self::Postponed => "Postponed",
        }
    }

    /// Looks up the move from `self` to `target` in the transition table.
    ///
    /// Returns `None` when the move is not permitted.
    #[must_use]
    pub fn transition_to(self, target: Self) -> Option<StatusTransition> {
        TRANSITIONS
            .iter()
            .find(|(from, to, _)| *from == self && *to == target)
            .map(|(_, _, effect)| *effect)
    }

    /// Returns whether the table permits moving from `self` to `target`.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.transition_to(target).is_some()
    }

    /// Returns whether the status is terminal (`Done` or `Deleted`).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Deleted)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "created" => Ok(Self::Created),
            "done" => Ok(Self::Done),
            "deleted" => Ok(Self::Deleted),
            "dropped" => Ok(Self::Dropped),
            "postponed" => Ok(Self::Postponed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
