// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Loading schedules from files.

use timetable_core::{DayOfWeek, MemoryStore, ScheduleFile, ScheduleStore, TimetableError, Weeks};

use crate::common::{t, write_schedule};

#[tokio::test]
async fn loads_a_json_schedule() {
    // Arrange
    let content = r##"{
        "entries": [
            {
                "id": 2,
                "day_of_week": 3,
                "start_time": "14:00",
                "end_time": "15:40",
                "weeks": "1-8",
                "course_name": "Lab",
                "location": "B-204"
            },
            {
                "id": "calc",
                "day_of_week": 1,
                "start_time": "08:00",
                "end_time": "09:40",
                "weeks": [1, 2, 3],
                "course_name": "Calculus",
                "color": "#6750A4"
            }
        ]
    }"##;
    let (_dir, path) = write_schedule("schedule.json", content).await.unwrap();

    // Act
    let store = MemoryStore::load_json(&path).await.unwrap();
    let entries = store.list_entries(None).await.unwrap();

    // Assert - sorted by day
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id.as_str(), "calc");
    assert_eq!(entries[0].weeks, Weeks::range(1, 3));
    assert_eq!(entries[0].color.as_deref(), Some("#6750A4"));
    assert_eq!(entries[1].id.as_str(), "2");
    assert_eq!(entries[1].day_of_week, DayOfWeek::Wednesday);
    assert_eq!(entries[1].start_time, t("14:00"));
    assert_eq!(entries[1].location.as_deref(), Some("B-204"));
}

#[tokio::test]
async fn loads_a_bare_array() {
    let content = r#"[
        {"id": "a", "day_of_week": 5, "start_time": "10:00", "end_time": "11:00"}
    ]"#;
    let (_dir, path) = write_schedule("schedule.json", content).await.unwrap();

    let store = MemoryStore::load_json(&path).await.unwrap();
    let friday = store
        .list_entries_by_day(DayOfWeek::Friday, Some(20))
        .await
        .unwrap();

    assert_eq!(friday.len(), 1);
    assert_eq!(friday[0].weeks, Weeks::All);
    assert_eq!(friday[0].course_name, "");
}

#[tokio::test]
async fn rejects_malformed_entries() {
    let cases = [
        r#"[{"id": "a", "day_of_week": 8, "start_time": "10:00", "end_time": "11:00"}]"#,
        r#"[{"id": "a", "day_of_week": 1, "start_time": "9:00", "end_time": "11:00"}]"#,
        r#"[{"id": "a", "day_of_week": 1, "start_time": "10:00", "end_time": "11:00", "weeks": "x"}]"#,
        r#"{"entries": 3}"#,
    ];
    for content in cases {
        let (_dir, path) = write_schedule("schedule.json", content).await.unwrap();
        let err = MemoryStore::load_json(&path).await.unwrap_err();
        assert!(matches!(err, TimetableError::Data(_)), "{content}: {err:?}");
    }
}

#[tokio::test]
async fn rejects_inverted_ranges_and_duplicates() {
    let inverted = r#"[{"id": "a", "day_of_week": 1, "start_time": "11:00", "end_time": "10:00"}]"#;
    let (_dir, path) = write_schedule("inverted.json", inverted).await.unwrap();
    let err = MemoryStore::load_json(&path).await.unwrap_err();
    assert!(matches!(err, TimetableError::InvalidTimeRange { .. }));

    let duplicate = r#"[
        {"id": "a", "day_of_week": 1, "start_time": "08:00", "end_time": "09:00"},
        {"id": "a", "day_of_week": 2, "start_time": "08:00", "end_time": "09:00"}
    ]"#;
    let (_dir, path) = write_schedule("duplicate.json", duplicate).await.unwrap();
    let err = MemoryStore::load_json(&path).await.unwrap_err();
    assert_eq!(err, TimetableError::Duplicate("a".into()));
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let (dir, _path) = write_schedule("schedule.json", "[]").await.unwrap();
    let err = MemoryStore::load_json(&dir.path().join("missing.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, TimetableError::Data(_)));
}

#[test]
fn decodes_a_toml_schedule() {
    let content = r#"
        [[entries]]
        id = "calc"
        day_of_week = 1
        start_time = "08:00"
        end_time = "09:40"
        weeks = "1-16"
        course_name = "Calculus"
        teacher = "Dr. Lin"
    "#;

    let file: ScheduleFile = toml::from_str(content).unwrap();

    assert_eq!(file.entries.len(), 1);
    assert_eq!(file.entries[0].weeks, Weeks::range(1, 16));
    assert_eq!(file.entries[0].teacher.as_deref(), Some("Dr. Lin"));
}
