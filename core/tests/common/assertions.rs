// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use timetable_core::{ClassEntry, ConflictReport};

/// Asserts that `entries` carry exactly the ids `expected`, in order.
///
/// # Panics
///
/// Panics if the ids differ.
pub fn assert_ids<'a>(entries: impl IntoIterator<Item = &'a ClassEntry>, expected: &[&str]) {
    let ids: Vec<_> = entries.into_iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, expected, "Entry ids mismatch");
}

/// Asserts that a report found nothing.
///
/// # Panics
///
/// Panics if the report has any conflict.
pub fn assert_no_conflict(report: &ConflictReport) {
    assert!(!report.has_conflict, "Unexpected conflicts: {report:?}");
    assert!(report.conflicts.is_empty());
}
