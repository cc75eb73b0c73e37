// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers
//! - Temporary schedule files with auto-cleanup

mod assertions;
mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use assertions::{assert_ids, assert_no_conflict};
#[allow(unused_imports)]
pub use fixtures::{at, entry, sample_entries, t, test_config, timetable_at};
#[allow(unused_imports)]
pub use temp_dir::write_schedule;
