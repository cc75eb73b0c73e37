// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use crate::{ClockTime, time_diff_minutes};

/// The visible time grid: which hours it shows and how tall an hour is.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GridConfig {
    /// First visible hour.
    #[serde(default = "default_start_hour")]
    pub start_hour: u8,

    /// Hour at which the grid ends, exclusive.
    #[serde(default = "default_end_hour")]
    pub end_hour: u8,

    /// Height of one hour in pixels.
    #[serde(default = "default_hour_height")]
    pub hour_height: f64,
}

const fn default_start_hour() -> u8 {
    8
}

const fn default_end_hour() -> u8 {
    22
}

const fn default_hour_height() -> f64 {
    60.0
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
            hour_height: default_hour_height(),
        }
    }
}

impl GridConfig {
    /// Checks `start_hour < end_hour <= 24` and a positive hour height.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(format!(
                "Invalid grid hours {}..{}, expected start before end within 0..24",
                self.start_hour, self.end_hour
            )
            .into());
        }
        if !(self.hour_height > 0.0) {
            return Err(format!("Invalid hour height {}", self.hour_height).into());
        }
        Ok(())
    }

    /// Projects a time range onto this grid.
    pub fn position(&self, start: ClockTime, end: ClockTime) -> Position {
        calculate_position(start, end, self.start_hour, self.hour_height)
    }

    /// Total grid height in pixels.
    pub fn height(&self) -> f64 {
        f64::from(self.end_hour.saturating_sub(self.start_hour)) * self.hour_height
    }
}

/// Vertical placement of a range on the grid, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Position {
    /// Offset from the top of the grid. Negative when starting before the grid.
    pub top: f64,

    /// Height of the range.
    pub height: f64,
}

/// Maps a time range to pixel offsets on a grid starting at `grid_start_hour`.
///
/// No clipping is done: ranges before the grid get a negative `top`, and
/// ranges past its end overflow.
pub fn calculate_position(
    start: ClockTime,
    end: ClockTime,
    grid_start_hour: u8,
    hour_height: f64,
) -> Position {
    let px_per_minute = hour_height / 60.0;
    let offset = i32::from(start.minute_of_day()) - i32::from(grid_start_hour) * 60;
    Position {
        top: f64::from(offset) * px_per_minute,
        height: f64::from(time_diff_minutes(start, end)) * px_per_minute,
    }
}

/// Elapsed fraction of `[start, end)` at `at`, computed at second resolution.
///
/// Clamps to `0.0` before the start and `1.0` at or after the end.
pub fn calculate_progress(start: ClockTime, end: ClockTime, at: jiff::civil::Time) -> f64 {
    let now = i64::from(at.hour()) * 3600 + i64::from(at.minute()) * 60 + i64::from(at.second());
    let start = i64::from(start.second_of_day());
    let end = i64::from(end.second_of_day());

    if now < start {
        0.0
    } else if now >= end {
        1.0
    } else {
        (now - start) as f64 / (end - start) as f64
    }
}

/// Whether `at` falls within `[start, end)`, at minute resolution.
pub fn is_current_time_slot(start: ClockTime, end: ClockTime, at: ClockTime) -> bool {
    start <= at && at < end
}

/// An hour row of the grid.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TimeSlot {
    /// Start of the hour.
    pub time: ClockTime,

    /// Label shown next to the row, such as `8:00`.
    pub label: String,
}

/// One slot per hour from `start_hour` up to, not including, `end_hour`.
pub fn generate_time_slots(grid: &GridConfig) -> Vec<TimeSlot> {
    (grid.start_hour..grid.end_hour.min(24))
        .filter_map(|hour| ClockTime::new(hour, 0).ok())
        .map(|time| TimeSlot {
            label: format!("{}:00", time.hour()),
            time,
        })
        .collect()
}
