// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Conflict detection on candidates and on stored schedules.

use std::sync::Arc;

use timetable_core::{
    Candidate, DayOfWeek, FixedClock, MemoryStore, Timetable, TimetableError, Weeks,
    check_conflict,
};

use crate::common::{
    assert_ids, assert_no_conflict, at, entry, sample_entries, t, test_config, timetable_at,
};

fn candidate(day: DayOfWeek, start: &str, end: &str, weeks: Weeks) -> Candidate {
    Candidate::new(day, t(start), t(end), weeks).unwrap()
}

#[test]
fn overlapping_weeks_and_times_conflict() {
    let existing = vec![
        entry("a", DayOfWeek::Monday, "09:30", "10:30").with_weeks(Weeks::range(1, 16)),
    ];
    let c = candidate(DayOfWeek::Monday, "09:00", "10:00", Weeks::range(1, 16));

    let report = check_conflict(&c, None, &existing);

    assert!(report.has_conflict);
    assert_eq!(report.conflicts.len(), 1);
    assert_eq!(report.conflicts[0].overlap_minutes, 30);
    assert_eq!(report.conflicts[0].weeks, Weeks::range(1, 16));
}

#[test]
fn disjoint_weeks_do_not_conflict() {
    let existing = vec![
        entry("a", DayOfWeek::Monday, "09:30", "10:30").with_weeks(Weeks::range(17, 20)),
    ];
    let c = candidate(DayOfWeek::Monday, "09:00", "10:00", Weeks::range(1, 16));

    assert_no_conflict(&check_conflict(&c, None, &existing));
}

#[test]
fn touching_ranges_and_other_days_do_not_conflict() {
    let existing = vec![
        entry("before", DayOfWeek::Monday, "08:00", "09:00"),
        entry("after", DayOfWeek::Monday, "10:00", "11:00"),
        entry("tuesday", DayOfWeek::Tuesday, "09:00", "10:00"),
    ];
    let c = candidate(DayOfWeek::Monday, "09:00", "10:00", Weeks::All);

    assert_no_conflict(&check_conflict(&c, None, &existing));
}

#[test]
fn every_conflict_is_reported() {
    let existing = vec![
        entry("a", DayOfWeek::Monday, "08:00", "09:40"),
        entry("b", DayOfWeek::Monday, "10:00", "11:40"),
    ];
    let c = candidate(DayOfWeek::Monday, "09:00", "10:30", Weeks::All);

    let report = check_conflict(&c, None, &existing);

    assert_ids(report.conflicts.iter().map(|a| &a.entry), &["a", "b"]);
}

#[test]
fn conflict_check_is_symmetric() {
    let a = entry("a", DayOfWeek::Friday, "13:00", "14:30").with_weeks(Weeks::range(2, 6));
    let b = entry("b", DayOfWeek::Friday, "14:00", "15:00").with_weeks(Weeks::range(5, 9));

    let ab = check_conflict(&Candidate::from(&a), None, std::slice::from_ref(&b));
    let ba = check_conflict(&Candidate::from(&b), None, std::slice::from_ref(&a));

    assert_eq!(ab.has_conflict, ba.has_conflict);
    assert_eq!(ab.conflicts[0].weeks, ba.conflicts[0].weeks);
    assert_eq!(ab.conflicts[0].overlap_minutes, ba.conflicts[0].overlap_minutes);
}

#[tokio::test]
async fn editing_an_entry_ignores_itself() {
    let timetable = timetable_at(sample_entries(), at(1, DayOfWeek::Monday, 7, 0));
    let c = candidate(DayOfWeek::Monday, "08:30", "09:50", Weeks::All);

    let report = timetable
        .check_conflict(&c, Some(&"math".into()))
        .await
        .unwrap();

    assert_no_conflict(&report);
}

#[tokio::test]
async fn audit_lists_conflicts_loaded_up_front() {
    let entries = vec![
        entry("a", DayOfWeek::Thursday, "08:00", "09:40"),
        entry("b", DayOfWeek::Thursday, "09:00", "10:00"),
        entry("c", DayOfWeek::Thursday, "10:00", "11:00"),
    ];
    let timetable = timetable_at(entries, at(1, DayOfWeek::Monday, 7, 0));

    let pairs = timetable.audit().await.unwrap();

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0.as_str(), "a");
    assert_eq!(pairs[0].1.entry.id.as_str(), "b");
}

#[tokio::test]
async fn store_rejects_conflicting_writes() {
    let store = Arc::new(MemoryStore::new(sample_entries()).unwrap());
    let timetable = Timetable::with_clock(
        test_config(),
        store.clone(),
        Arc::new(FixedClock(at(1, DayOfWeek::Monday, 7, 0))),
    )
    .unwrap();

    let err = store
        .add_entry(entry("clash", DayOfWeek::Monday, "09:00", "10:30"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        TimetableError::Conflict {
            id: "clash".into(),
            count: 2,
        }
    );
    let monday = timetable.day_schedule(DayOfWeek::Monday, 1).await.unwrap();
    assert_ids(&monday.classes, &["math", "physics"]);
}
