// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Resolves which class is current, next, or just ended at a reference instant.
//!
//! Every function here expects each day's entries to be sorted by start time,
//! as [`WeekSchedule`] guarantees. The precondition is checked in debug builds
//! only. Overlapping entries are tolerated: the first match in sort order wins.

use crate::{ClassEntry, ClockTime, DayOfWeek, WeekSchedule, calculate_progress};

/// The entry in session at `at`, i.e. `start_time <= at < end_time`.
///
/// On a back-to-back boundary the later class is current, since the end is exclusive.
pub fn find_current_class(day_classes: &[ClassEntry], at: ClockTime) -> Option<&ClassEntry> {
    debug_assert_sorted(day_classes);
    day_classes
        .iter()
        .find(|a| a.start_time <= at && at < a.end_time)
}

/// The first entry starting strictly after `at`.
pub fn find_next_class(day_classes: &[ClassEntry], at: ClockTime) -> Option<&ClassEntry> {
    debug_assert_sorted(day_classes);
    day_classes.iter().find(|a| a.start_time > at)
}

/// The most recently ended entry, i.e. the latest `end_time <= at`.
///
/// The scan stops at the first entry still running at `at`. With overlapping
/// entries, one that starts later but has already ended is therefore not
/// reported while an earlier-starting class is still in session.
pub fn find_last_class(day_classes: &[ClassEntry], at: ClockTime) -> Option<&ClassEntry> {
    debug_assert_sorted(day_classes);
    let mut last = None;
    for entry in day_classes {
        if entry.end_time > at {
            break;
        }
        last = Some(entry);
    }
    last
}

/// The next class from `day` at `at`, looking into the following days of the week.
///
/// Days are searched in cyclic order, Sunday wrapping to Monday. If only `day`
/// itself has entries and all of them have started, its first entry is returned
/// as next week's occurrence. Returns `None` only for an empty week.
pub fn find_next_class_across_week(
    schedule: &WeekSchedule,
    day: DayOfWeek,
    at: ClockTime,
) -> Option<&ClassEntry> {
    find_next_occurrence(schedule, schedule, day, at).map(|a| a.entry)
}

/// A future class occurrence, located relative to the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a> {
    /// The entry taking place.
    pub entry: &'a ClassEntry,

    /// Days from the reference day, `0..=7`.
    pub days_ahead: usize,

    /// `0` for the reference week, `1` once the search wrapped past Sunday.
    pub week_offset: u32,
}

/// Like [`find_next_class_across_week`], but days after Sunday are looked up
/// in `next_week`, since the week number may change the active entries.
pub fn find_next_occurrence<'a>(
    this_week: &'a WeekSchedule,
    next_week: &'a WeekSchedule,
    day: DayOfWeek,
    at: ClockTime,
) -> Option<Occurrence<'a>> {
    if let Some(entry) = find_next_class(this_week.day(day), at) {
        return Some(Occurrence {
            entry,
            days_ahead: 0,
            week_offset: 0,
        });
    }

    for days_ahead in 1..=7 {
        let target = day.add_days(days_ahead);
        let (schedule, week_offset) = match target > day {
            true => (this_week, 0),
            false => (next_week, 1),
        };
        if let Some(entry) = schedule.day(target).first() {
            tracing::trace!(%target, days_ahead, week_offset, "next class found on a later day");
            return Some(Occurrence {
                entry,
                days_ahead,
                week_offset,
            });
        }
    }

    None
}

/// Current, next and last classes of one day at one instant.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ClassStatus<'a> {
    /// The class in session.
    pub current: Option<&'a ClassEntry>,

    /// The next class starting later today.
    pub next: Option<&'a ClassEntry>,

    /// The most recently ended class today.
    pub last: Option<&'a ClassEntry>,

    /// Elapsed fraction of the current class, `0.0..=1.0`.
    pub progress: Option<f64>,
}

impl<'a> ClassStatus<'a> {
    /// Resolves the status of a sorted day list at a second-resolution instant.
    pub fn resolve(day_classes: &'a [ClassEntry], at: jiff::civil::Time) -> Self {
        let minute = ClockTime::from(at);
        let current = find_current_class(day_classes, minute);
        Self {
            current,
            next: find_next_class(day_classes, minute),
            last: find_last_class(day_classes, minute),
            progress: current.map(|a| calculate_progress(a.start_time, a.end_time, at)),
        }
    }

    /// Whether the instant falls between two classes of the day.
    pub fn is_break(&self) -> bool {
        self.current.is_none() && self.next.is_some() && self.last.is_some()
    }
}

fn debug_assert_sorted(day_classes: &[ClassEntry]) {
    debug_assert!(
        day_classes.is_sorted_by_key(|a| a.start_time),
        "day entries must be sorted by start time"
    );
}
