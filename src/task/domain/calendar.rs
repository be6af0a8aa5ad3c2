//! Calendar dates exchanged with callers as `YYYY-MM-DD` text.

use super::TaskDomainError;
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A day in the proleptic Gregorian calendar, without time or zone.
///
/// The textual form is always the zero-padded `YYYY-MM-DD` layout.
///
/// # Examples
///
/// ```
/// use taskwell::task::domain::CalendarDate;
///
/// let date = CalendarDate::parse(" 2024-01-05 ").expect("valid date");
/// assert_eq!(date.to_string(), "2024-01-05");
/// assert!(CalendarDate::parse("2024-1-5").is_err());
/// assert!(CalendarDate::parse("2023-02-29").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parses and normalizes a `YYYY-MM-DD` date.
    ///
    /// Surrounding whitespace is ignored. The layout must be exactly four
    /// year digits, two month digits and two day digits separated by `-`,
    /// and the day must exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidCalendarDate`] for any other input.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        let trimmed = value.trim();
        if !has_iso_day_shape(trimmed) {
            return Err(TaskDomainError::InvalidCalendarDate(value.to_owned()));
        }

        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidCalendarDate(value.to_owned()))
    }

    /// Wraps an already valid [`NaiveDate`].
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns today's date in UTC according to the supplied clock.
    #[must_use]
    pub fn today(clock: &impl Clock) -> Self {
        Self(clock.utc().date_naive())
    }

    /// Returns the wrapped [`NaiveDate`].
    #[must_use]
    pub const fn into_inner(self) -> NaiveDate {
        self.0
    }
}

/// Checks the `DDDD-DD-DD` layout byte by byte.
fn has_iso_day_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(position, byte)| match position {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

impl FromStr for CalendarDate {
    type Err = TaskDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        value.to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
