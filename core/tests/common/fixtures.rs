// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::sync::Arc;

use jiff::civil::{DateTime, date};
use timetable_core::{
    ClassEntry, ClockTime, Config, DayOfWeek, FixedClock, MemoryStore, Timetable, Weeks,
};

/// Parses an `HH:MM` literal.
#[must_use]
pub fn t(s: &str) -> ClockTime {
    s.parse().expect("valid time literal")
}

/// Creates an entry held every week.
#[must_use]
pub fn entry(id: &str, day: DayOfWeek, start: &str, end: &str) -> ClassEntry {
    ClassEntry::new(id, day, t(start), t(end))
        .expect("valid entry")
        .with_course_name(format!("Course {id}"))
}

/// A small semester: two Monday classes, a Wednesday class in the first half
/// only, and a Friday afternoon class.
#[must_use]
pub fn sample_entries() -> Vec<ClassEntry> {
    vec![
        entry("math", DayOfWeek::Monday, "08:00", "09:40"),
        entry("physics", DayOfWeek::Monday, "10:00", "11:40"),
        entry("lab", DayOfWeek::Wednesday, "14:00", "15:40").with_weeks(Weeks::range(1, 8)),
        entry("history", DayOfWeek::Friday, "14:00", "15:40"),
    ]
}

/// A configuration whose semester starts on Monday 2025-09-01.
#[must_use]
pub fn test_config() -> Config {
    Config {
        semester_start: Some(date(2025, 9, 1)),
        ..Config::default()
    }
}

/// Local date and time in the first weeks of the test semester.
///
/// `day` is the weekday within the week `week`, so `at(1, Monday, ..)` is 2025-09-01.
#[must_use]
pub fn at(week: u32, day: DayOfWeek, hour: i8, minute: i8) -> DateTime {
    let offset = i64::from(week - 1) * 7 + i64::from(day.number() - 1);
    date(2025, 9, 1)
        .checked_add(jiff::Span::new().days(offset))
        .expect("date in range")
        .at(hour, minute, 0, 0)
}

/// Creates a timetable over `entries` with the clock fixed at `now`.
#[must_use]
pub fn timetable_at(entries: Vec<ClassEntry>, now: DateTime) -> Timetable {
    let store = MemoryStore::new(entries).expect("valid entries");
    Timetable::with_clock(test_config(), Arc::new(store), Arc::new(FixedClock(now)))
        .expect("valid config")
}
