// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{ClassEntry, ClockTime, DayOfWeek, EntryId, TimetableError, Weeks, time_diff_minutes};

/// A time range proposed for a new or edited entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The weekday of the range.
    pub day_of_week: DayOfWeek,

    /// Start time, inclusive.
    pub start_time: ClockTime,

    /// End time, exclusive.
    pub end_time: ClockTime,

    /// Weeks in which the range applies.
    pub weeks: Weeks,
}

impl Candidate {
    /// Creates a candidate, validating that `start < end`.
    pub fn new(
        day_of_week: DayOfWeek,
        start_time: ClockTime,
        end_time: ClockTime,
        weeks: Weeks,
    ) -> Result<Self, TimetableError> {
        if start_time >= end_time {
            return Err(TimetableError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            day_of_week,
            start_time,
            end_time,
            weeks,
        })
    }
}

impl From<&ClassEntry> for Candidate {
    fn from(entry: &ClassEntry) -> Self {
        Self {
            day_of_week: entry.day_of_week,
            start_time: entry.start_time,
            end_time: entry.end_time,
            weeks: entry.weeks.clone(),
        }
    }
}

/// An existing entry colliding with a candidate.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Conflict {
    /// The existing entry.
    pub entry: ClassEntry,

    /// The weeks in which both take place.
    pub weeks: Weeks,

    /// Length of the shared time range in minutes.
    pub overlap_minutes: i32,
}

/// Outcome of a conflict check: every collision, not just the first.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ConflictReport {
    /// Whether any conflict was found.
    pub has_conflict: bool,

    /// All conflicting entries, in input order.
    pub conflicts: Vec<Conflict>,
}

impl FromIterator<Conflict> for ConflictReport {
    fn from_iter<I: IntoIterator<Item = Conflict>>(iter: I) -> Self {
        let conflicts: Vec<_> = iter.into_iter().collect();
        Self {
            has_conflict: !conflicts.is_empty(),
            conflicts,
        }
    }
}

/// Whether the half-open ranges `[s1, e1)` and `[s2, e2)` overlap.
///
/// Touching ranges, where one ends exactly as the other starts, do not.
pub fn ranges_overlap(s1: ClockTime, e1: ClockTime, s2: ClockTime, e2: ClockTime) -> bool {
    s1 < e2 && s2 < e1
}

/// Checks `candidate` against `entries`, skipping the entry `exclude` if given.
///
/// Two ranges conflict when they share the day, their week sets intersect, and
/// their times overlap. Pass `exclude` to validate an edit against all *other*
/// entries.
pub fn check_conflict(
    candidate: &Candidate,
    exclude: Option<&EntryId>,
    entries: &[ClassEntry],
) -> ConflictReport {
    tracing::debug!(
        day = %candidate.day_of_week,
        start = %candidate.start_time,
        end = %candidate.end_time,
        "checking conflicts"
    );

    entries
        .iter()
        .filter(|a| exclude != Some(&a.id))
        .filter_map(|a| conflict_with(candidate, a))
        .inspect(|a| {
            tracing::warn!(
                entry = %a.entry.id,
                course = %a.entry.course_name,
                start = %a.entry.start_time,
                end = %a.entry.end_time,
                weeks = %a.weeks,
                "conflict detected"
            );
        })
        .collect()
}

/// Every pair of entries in `entries` that conflict with each other.
pub fn find_all_conflicts(entries: &[ClassEntry]) -> Vec<(EntryId, Conflict)> {
    let mut pairs = Vec::new();
    for (i, a) in entries.iter().enumerate() {
        let candidate = Candidate::from(a);
        for b in entries.iter().skip(i + 1) {
            if let Some(conflict) = conflict_with(&candidate, b) {
                pairs.push((a.id.clone(), conflict));
            }
        }
    }
    pairs
}

fn conflict_with(candidate: &Candidate, entry: &ClassEntry) -> Option<Conflict> {
    if candidate.day_of_week != entry.day_of_week
        || !ranges_overlap(
            candidate.start_time,
            candidate.end_time,
            entry.start_time,
            entry.end_time,
        )
    {
        return None;
    }

    let weeks = candidate.weeks.overlap(&entry.weeks)?;
    let overlap_minutes = time_diff_minutes(
        candidate.start_time.max(entry.start_time),
        candidate.end_time.min(entry.end_time),
    );
    Some(Conflict {
        entry: entry.clone(),
        weeks,
        overlap_minutes,
    })
}
