//! Due-date records and the per-task ledger that keeps at most one active.

use super::{CalendarDate, TaskId};
use serde::{Deserialize, Serialize};

/// A deadline record attached to a task.
///
/// Records are never removed. Superseded deadlines stay behind as inactive
/// history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DueDate {
    task_id: TaskId,
    due_date: CalendarDate,
    is_active: bool,
}

impl DueDate {
    /// Creates a due-date record.
    #[must_use]
    pub const fn new(task_id: TaskId, due_date: CalendarDate, is_active: bool) -> Self {
        Self {
            task_id,
            due_date,
            is_active,
        }
    }

    /// Returns the owning task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the deadline day.
    #[must_use]
    pub const fn due_date(&self) -> CalendarDate {
        self.due_date
    }

    /// Returns whether this record is the task's active deadline.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    const fn with_active(self, is_active: bool) -> Self {
        Self { is_active, ..self }
    }
}

/// How a request to set a due date was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDateChange {
    /// A record for the date did not exist and was added as active.
    Inserted(DueDate),
    /// An inactive record for the date existed and was made active again.
    Reactivated(DueDate),
    /// The date was already the active deadline.
    Unchanged(DueDate),
}

impl DueDateChange {
    /// Returns the record that is active after the change.
    #[must_use]
    pub const fn due_date(&self) -> &DueDate {
        match self {
            Self::Inserted(record) | Self::Reactivated(record) | Self::Unchanged(record) => record,
        }
    }

    /// Returns whether the stored records differ from before the change.
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        !matches!(self, Self::Unchanged(_))
    }

    /// Returns a short label for log output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inserted(_) => "inserted",
            Self::Reactivated(_) => "reactivated",
            Self::Unchanged(_) => "unchanged",
        }
    }
}

/// All due-date records belonging to one task, kept ordered by date.
///
/// Operations consume the ledger and return the next one, so a caller can
/// compute the full replacement before handing it to storage in one write.
/// Each date appears at most once and at most one record is active.
///
/// # Examples
///
/// ```
/// use taskwell::task::domain::{CalendarDate, DueDateLedger, TaskId};
///
/// let task_id = TaskId::new();
/// let first = CalendarDate::parse("2024-01-05").expect("valid date");
/// let second = CalendarDate::parse("2024-02-01").expect("valid date");
///
/// let (ledger, _) = DueDateLedger::empty(task_id).activate(first);
/// let (ledger, _) = ledger.activate(second);
///
/// assert_eq!(ledger.active().map(|record| record.due_date()), Some(second));
/// assert_eq!(ledger.records().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueDateLedger {
    task_id: TaskId,
    records: Vec<DueDate>,
}

impl DueDateLedger {
    /// Creates a ledger with no records.
    #[must_use]
    pub const fn empty(task_id: TaskId) -> Self {
        Self {
            task_id,
            records: Vec::new(),
        }
    }

    /// Rebuilds a ledger from stored records.
    ///
    /// Records for other tasks are dropped and duplicate dates collapse onto
    /// the first occurrence. If several records claim to be active only the
    /// latest date keeps the flag.
    #[must_use]
    pub fn from_records(task_id: TaskId, records: impl IntoIterator<Item = DueDate>) -> Self {
        let mut collected: Vec<DueDate> = records
            .into_iter()
            .filter(|record| record.task_id() == task_id)
            .collect();
        collected.sort_by_key(DueDate::due_date);
        collected.dedup_by_key(|record| record.due_date());

        let last_active = collected.iter().rposition(DueDate::is_active);
        let normalized = collected
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.with_active(Some(position) == last_active))
            .collect();

        Self {
            task_id,
            records: normalized,
        }
    }

    /// Returns the owning task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns every record in ascending date order.
    #[must_use]
    pub fn records(&self) -> &[DueDate] {
        &self.records
    }

    /// Returns the active record, if any.
    #[must_use]
    pub fn active(&self) -> Option<&DueDate> {
        self.records.iter().find(|record| record.is_active())
    }

    /// Returns the record for `date`, active or not.
    #[must_use]
    pub fn find(&self, date: CalendarDate) -> Option<&DueDate> {
        self.records.iter().find(|record| record.due_date() == date)
    }

    /// Makes `date` the active deadline.
    ///
    /// The previous active record, if different, is deactivated in the same
    /// step.
    #[must_use]
    pub fn activate(self, date: CalendarDate) -> (Self, DueDateChange) {
        if let Some(current) = self.active().filter(|record| record.due_date() == date) {
            let change = DueDateChange::Unchanged(*current);
            return (self, change);
        }

        let existed = self.find(date).is_some();
        let mut records: Vec<DueDate> = self
            .records
            .into_iter()
            .map(|record| record.with_active(record.due_date() == date))
            .collect();

        let activated = DueDate::new(self.task_id, date, true);
        let change = if existed {
            DueDateChange::Reactivated(activated)
        } else {
            let insert_at = records.partition_point(|record| record.due_date() < date);
            records.insert(insert_at, activated);
            DueDateChange::Inserted(activated)
        };

        let ledger = Self {
            task_id: self.task_id,
            records,
        };
        (ledger, change)
    }

    /// Deactivates the active record.
    ///
    /// Returns the deactivated record, or `None` when nothing was active.
    #[must_use]
    pub fn clear(self) -> (Self, Option<DueDate>) {
        let cleared = self.active().map(|record| record.with_active(false));
        if cleared.is_none() {
            return (self, None);
        }

        let records = self
            .records
            .into_iter()
            .map(|record| record.with_active(false))
            .collect();
        let ledger = Self {
            task_id: self.task_id,
            records,
        };
        (ledger, cleared)
    }

    /// Consumes the ledger, returning its records in ascending date order.
    #[must_use]
    pub fn into_records(self) -> Vec<DueDate> {
        self.records
    }
}

/// Snapshot of a task's due-date history in ascending date order.
///
/// Iteration is lazy and may be restarted any number of times; the snapshot
/// does not change when the store is later modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueDateHistory {
    records: Vec<DueDate>,
}

impl DueDateHistory {
    /// Returns an iterator over the records, oldest date first.
    pub fn iter(&self) -> std::slice::Iter<'_, DueDate> {
        self.records.iter()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<DueDateLedger> for DueDateHistory {
    fn from(ledger: DueDateLedger) -> Self {
        Self {
            records: ledger.into_records(),
        }
    }
}

impl<'a> IntoIterator for &'a DueDateHistory {
    type Item = &'a DueDate;
    type IntoIter = std::slice::Iter<'a, DueDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for DueDateHistory {
    type Item = DueDate;
    type IntoIter = std::vec::IntoIter<DueDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
