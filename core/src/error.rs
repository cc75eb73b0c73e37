// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{ClockTime, EntryId};

/// Errors raised by the timetable core.
///
/// Absence of a match is never an error: lookups return `None` instead.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    /// The input does not match `HH:MM` within `00:00`-`23:59`.
    #[error("Malformed time '{0}', expected HH:MM between 00:00 and 23:59")]
    MalformedTime(String),

    /// The day of week is outside `1..=7`.
    #[error("Invalid day of week {0}, expected 1 (Monday) to 7 (Sunday)")]
    InvalidDayOfWeek(i64),

    /// The start of a range does not precede its end.
    #[error("Invalid time range {start}-{end}, start must be before end")]
    InvalidTimeRange {
        /// Start of the range.
        start: ClockTime,
        /// End of the range.
        end: ClockTime,
    },

    /// The week set cannot be parsed, or names a week outside `1..=Weeks::MAX_WEEK`.
    #[error("Malformed week set '{0}'")]
    MalformedWeeks(String),

    /// The entry collides with existing entries.
    #[error("Entry {id} conflicts with {count} existing entries")]
    Conflict {
        /// The rejected entry.
        id: EntryId,
        /// How many entries it collides with.
        count: usize,
    },

    /// No entry with this identifier exists.
    #[error("Entry not found: {0}")]
    NotFound(EntryId),

    /// An entry with this identifier already exists.
    #[error("Duplicate entry: {0}")]
    Duplicate(EntryId),

    /// Schedule data could not be decoded.
    #[error("Invalid schedule data: {0}")]
    Data(String),
}

impl From<serde_json::Error> for TimetableError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(e.to_string())
    }
}
