// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Looking up the next class across days and weeks.

use timetable_core::{DayOfWeek, WeekSchedule, Weeks, find_next_class_across_week};

use crate::common::{at, entry, sample_entries, t, timetable_at};

#[tokio::test]
async fn next_class_later_today() {
    let timetable = timetable_at(sample_entries(), at(1, DayOfWeek::Monday, 9, 0));

    let next = timetable.next_class().await.unwrap().expect("a next class");

    assert_eq!(next.entry.id.as_str(), "physics");
    assert_eq!(next.days_ahead, 0);
    assert_eq!(next.week, 1);
}

#[tokio::test]
async fn next_class_on_a_later_day() {
    let timetable = timetable_at(sample_entries(), at(1, DayOfWeek::Monday, 12, 0));

    let next = timetable.next_class().await.unwrap().expect("a next class");

    assert_eq!(next.entry.id.as_str(), "lab");
    assert_eq!(next.days_ahead, 2);
    assert_eq!(next.week, 1);
}

#[tokio::test]
async fn next_class_skips_entries_outside_the_week() {
    // the Wednesday lab only runs in weeks 1-8
    let timetable = timetable_at(sample_entries(), at(9, DayOfWeek::Monday, 12, 0));

    let next = timetable.next_class().await.unwrap().expect("a next class");

    assert_eq!(next.entry.id.as_str(), "history");
    assert_eq!(next.days_ahead, 4);
    assert_eq!(next.week, 9);
}

#[tokio::test]
async fn next_class_wraps_into_next_week() {
    let timetable = timetable_at(sample_entries(), at(1, DayOfWeek::Friday, 16, 0));

    let next = timetable.next_class().await.unwrap().expect("a next class");

    assert_eq!(next.entry.id.as_str(), "math");
    assert_eq!(next.days_ahead, 3);
    assert_eq!(next.week, 2);
}

#[tokio::test]
async fn next_class_is_the_same_day_next_week() {
    let entries = vec![entry("only", DayOfWeek::Monday, "08:00", "09:40")];
    let timetable = timetable_at(entries, at(3, DayOfWeek::Monday, 10, 0));

    let next = timetable.next_class().await.unwrap().expect("a next class");

    assert_eq!(next.entry.id.as_str(), "only");
    assert_eq!(next.days_ahead, 7);
    assert_eq!(next.week, 4);
}

#[tokio::test]
async fn next_class_uses_next_weeks_entries_after_wrapping() {
    let entries =
        vec![entry("once", DayOfWeek::Monday, "08:00", "09:40").with_weeks(Weeks::range(1, 1))];
    let timetable = timetable_at(entries, at(1, DayOfWeek::Saturday, 10, 0));

    assert_eq!(timetable.next_class().await.unwrap(), None);
}

#[tokio::test]
async fn next_class_in_an_empty_schedule() {
    let timetable = timetable_at(Vec::new(), at(1, DayOfWeek::Wednesday, 10, 0));

    assert_eq!(timetable.next_class().await.unwrap(), None);
}

#[test]
fn next_class_across_week_from_an_empty_day() {
    let schedule =
        WeekSchedule::from_entries([entry("tue", DayOfWeek::Tuesday, "08:00", "09:40")]);

    for now in ["00:00", "08:30", "23:59"] {
        let found = find_next_class_across_week(&schedule, DayOfWeek::Monday, t(now));
        assert_eq!(found.map(|a| a.id.as_str()), Some("tue"));
    }
}
