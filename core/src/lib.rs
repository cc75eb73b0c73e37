// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Time resolution for weekly class timetables: current and next classes,
//! conflict detection, semester weeks and grid layout.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro
)]

mod clock;
mod config;
mod conflict;
mod entry;
mod error;
mod events;
mod layout;
mod lookup;
mod schedule;
mod semester;
mod store;
mod time;
mod timetable;
mod weekday;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::{APP_NAME, Config, get_config_dir};
pub use crate::conflict::{
    Candidate, Conflict, ConflictReport, check_conflict, find_all_conflicts, ranges_overlap,
};
pub use crate::entry::{ClassEntry, EntryId, Weeks};
pub use crate::error::TimetableError;
pub use crate::events::{EventBus, ScheduleEvent};
pub use crate::layout::{
    GridConfig, Position, TimeSlot, calculate_position, calculate_progress, generate_time_slots,
    is_current_time_slot,
};
pub use crate::lookup::{
    ClassStatus, Occurrence, find_current_class, find_last_class, find_next_class,
    find_next_class_across_week, find_next_occurrence,
};
pub use crate::schedule::{ScheduleStats, WeekSchedule};
pub use crate::semester::{WeekInfo, week_number};
pub use crate::store::{MemoryStore, ScheduleFile, ScheduleStore};
pub use crate::time::{ClockTime, format_time, parse_time, time_diff_minutes};
pub use crate::timetable::{DaySchedule, NextClass, Timetable};
pub use crate::weekday::DayOfWeek;
