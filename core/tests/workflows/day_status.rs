// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Current, next and last class resolution through the timetable.

use timetable_core::{
    ClassStatus, DayOfWeek, find_current_class, find_last_class, find_next_class,
};

use crate::common::{at, entry, sample_entries, t, timetable_at};

#[tokio::test]
async fn status_during_a_class() {
    // Arrange
    let timetable = timetable_at(sample_entries(), at(1, DayOfWeek::Monday, 9, 0));

    // Act
    let today = timetable.today_schedule().await.unwrap();
    let status = today.status(timetable.now().time());

    // Assert
    assert_eq!(today.day, DayOfWeek::Monday);
    assert_eq!(today.week, 1);
    assert_eq!(status.current.map(|a| a.id.as_str()), Some("math"));
    assert_eq!(status.next.map(|a| a.id.as_str()), Some("physics"));
    assert_eq!(status.last, None);
    assert!(!status.is_break());
}

#[tokio::test]
async fn status_between_classes() {
    let timetable = timetable_at(sample_entries(), at(1, DayOfWeek::Monday, 9, 50));

    let today = timetable.today_schedule().await.unwrap();
    let status = today.status(timetable.now().time());

    assert_eq!(status.current, None);
    assert_eq!(status.next.map(|a| a.id.as_str()), Some("physics"));
    assert_eq!(status.last.map(|a| a.id.as_str()), Some("math"));
    assert_eq!(status.progress, None);
    assert!(status.is_break());
}

#[tokio::test]
async fn status_reports_progress() {
    let timetable = timetable_at(sample_entries(), at(1, DayOfWeek::Monday, 8, 50));

    let today = timetable.today_schedule().await.unwrap();
    let status = today.status(timetable.now().time());

    let progress = status.progress.expect("class in session");
    assert!((progress - 0.5).abs() < 1e-9);
}

#[tokio::test]
async fn status_on_a_free_day() {
    let timetable = timetable_at(sample_entries(), at(1, DayOfWeek::Sunday, 10, 0));

    let today = timetable.today_schedule().await.unwrap();

    assert!(today.classes.is_empty());
    assert_eq!(
        today.status(timetable.now().time()),
        ClassStatus {
            current: None,
            next: None,
            last: None,
            progress: None,
        }
    );
}

#[tokio::test]
async fn day_schedule_respects_weeks() {
    let timetable = timetable_at(sample_entries(), at(1, DayOfWeek::Monday, 9, 0));

    let early = timetable.day_schedule(DayOfWeek::Wednesday, 3).await.unwrap();
    let late = timetable.day_schedule(DayOfWeek::Wednesday, 12).await.unwrap();

    assert_eq!(early.classes.len(), 1);
    assert!(late.classes.is_empty());
}

#[tokio::test]
async fn status_is_stable_for_a_fixed_instant() {
    let timetable = timetable_at(sample_entries(), at(1, DayOfWeek::Monday, 10, 30));

    let first = timetable.today_schedule().await.unwrap();
    let second = timetable.today_schedule().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.status(timetable.now().time()),
        second.status(timetable.now().time())
    );
}

#[test]
fn lookups_partition_the_day() {
    let day = vec![
        entry("a", DayOfWeek::Monday, "08:00", "09:40"),
        entry("b", DayOfWeek::Monday, "09:40", "11:00"),
        entry("c", DayOfWeek::Monday, "14:00", "15:40"),
    ];

    for minute in (0..24 * 60).step_by(5) {
        let now = timetable_core::ClockTime::from_minute_of_day(minute).unwrap();
        if let Some(current) = find_current_class(&day, now) {
            assert!(current.start_time <= now && now < current.end_time);
        }
        if let Some(next) = find_next_class(&day, now) {
            assert!(next.start_time > now);
            assert!(day.iter().all(|a| a.start_time <= now || a.start_time >= next.start_time));
        }
        if let Some(last) = find_last_class(&day, now) {
            assert!(last.end_time <= now);
            assert!(day.iter().all(|a| a.end_time > now || a.end_time <= last.end_time));
        }
    }
}

#[test]
fn back_to_back_boundary_belongs_to_the_later_class() {
    let day = vec![
        entry("a", DayOfWeek::Monday, "08:00", "09:40"),
        entry("b", DayOfWeek::Monday, "09:40", "11:00"),
    ];

    let now = t("09:40");
    assert_eq!(find_current_class(&day, now).map(|a| a.id.as_str()), Some("b"));
    assert_eq!(find_last_class(&day, now).map(|a| a.id.as_str()), Some("a"));
    assert_eq!(find_next_class(&day, now), None);
}

#[tokio::test]
async fn layout_places_classes_on_the_grid() {
    let timetable = timetable_at(sample_entries(), at(1, DayOfWeek::Monday, 9, 0));

    let blocks = timetable.layout(DayOfWeek::Monday, 1).await.unwrap();

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].0.id.as_str(), "math");
    assert_eq!(blocks[0].1.top, 0.0);
    assert_eq!(blocks[0].1.height, 100.0);
    assert_eq!(blocks[1].1.top, 120.0);
}
