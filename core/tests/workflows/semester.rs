// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Semester weeks as seen by the timetable.

use std::sync::Arc;

use jiff::civil::date;
use timetable_core::{Config, DayOfWeek, FixedClock, MemoryStore, Timetable, Weeks};

use crate::common::{at, sample_entries, test_config, timetable_at};

fn timetable_with(config: Config, now: jiff::civil::DateTime) -> Timetable {
    let store = MemoryStore::new(sample_entries()).unwrap();
    Timetable::with_clock(config, Arc::new(store), Arc::new(FixedClock(now))).unwrap()
}

#[test]
fn week_follows_the_semester_start() {
    let cases = [
        (at(1, DayOfWeek::Monday, 0, 0), 1),
        (at(1, DayOfWeek::Sunday, 23, 59), 1),
        (at(2, DayOfWeek::Monday, 0, 0), 2),
        (at(12, DayOfWeek::Wednesday, 12, 0), 12),
    ];
    for (now, expected) in cases {
        let info = timetable_at(Vec::new(), now).week_info();
        assert_eq!(info.week, expected, "at {now}");
        assert!(info.is_calculated);
        assert_eq!(info.semester_start, Some(date(2025, 9, 1)));
    }
}

#[test]
fn week_before_the_semester_is_the_first() {
    let now = date(2025, 8, 20).at(10, 0, 0, 0);
    let info = timetable_with(test_config(), now).week_info();
    assert_eq!(info.week, 1);
}

#[test]
fn manual_week_takes_precedence() {
    let config = Config {
        current_week: Some(7),
        ..test_config()
    };
    let info = timetable_with(config, at(2, DayOfWeek::Monday, 9, 0)).week_info();
    assert_eq!(info.week, 7);
    assert!(!info.is_calculated);
}

#[test]
fn week_without_a_semester_start() {
    let info = timetable_with(Config::default(), at(5, DayOfWeek::Monday, 9, 0)).week_info();
    assert_eq!(info.week, 1);
    assert!(!info.is_calculated);
    assert_eq!(info.semester_start, None);
}

#[test]
fn weeks_past_the_semester_are_flagged() {
    let timetable = timetable_at(Vec::new(), at(21, DayOfWeek::Monday, 9, 0));
    let info = timetable.week_info();
    assert!(info.is_beyond(timetable.config().total_weeks));
}

#[test]
fn invalid_config_is_rejected() {
    let store = Arc::new(MemoryStore::default());
    let clock = Arc::new(FixedClock(at(1, DayOfWeek::Monday, 9, 0)));

    let zero_weeks = Config {
        total_weeks: 0,
        ..test_config()
    };
    assert!(Timetable::with_clock(zero_weeks, store.clone(), clock.clone()).is_err());

    let zero_current = Config {
        current_week: Some(0),
        ..test_config()
    };
    assert!(Timetable::with_clock(zero_current, store.clone(), clock.clone()).is_err());

    let huge_current = Config {
        current_week: Some(u32::MAX),
        ..test_config()
    };
    assert!(Timetable::with_clock(huge_current, store, clock).is_err());
}

#[tokio::test]
async fn next_class_from_the_last_allowed_week() {
    let config = Config {
        current_week: Some(Weeks::MAX_WEEK),
        total_weeks: Weeks::MAX_WEEK,
        ..test_config()
    };
    let timetable = timetable_with(config, at(1, DayOfWeek::Friday, 18, 0));

    let next = timetable.next_class().await.unwrap().expect("a next class");

    assert_eq!(next.entry.id.as_str(), "math");
    assert_eq!(next.days_ahead, 3);
    assert_eq!(next.week, Weeks::MAX_WEEK + 1);
}

#[tokio::test]
async fn week_schedule_summary() {
    let timetable = timetable_at(sample_entries(), at(1, DayOfWeek::Monday, 9, 0));

    let early = timetable.week_schedule(1).await.unwrap().stats();
    let late = timetable.week_schedule(10).await.unwrap().stats();

    assert_eq!(early.total_entries, 4);
    assert_eq!(late.total_entries, 3);
    assert_eq!(early.busiest_day, Some(DayOfWeek::Monday));
    assert_eq!(early.minutes_per_day[DayOfWeek::Monday.index()], 200);
}
