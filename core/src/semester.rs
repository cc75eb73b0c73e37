// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::Config;

/// The teaching week `today` falls in, counting the week of `semester_start` as week 1.
///
/// Dates before the semester starts are clamped to week 1.
pub fn week_number(semester_start: Date, today: Date) -> u32 {
    match semester_start.until(today) {
        Ok(span) => {
            let days = i64::from(span.get_days());
            let week = days.div_euclid(7) + 1;
            u32::try_from(week.max(1)).unwrap_or(1)
        }
        Err(err) => {
            tracing::warn!(
                %semester_start,
                %today,
                %err,
                "failed to count semester days, using week 1"
            );
            1
        }
    }
}

/// The current teaching week and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct WeekInfo {
    /// The week number, starting at 1.
    pub week: u32,

    /// First day of the semester, if configured.
    pub semester_start: Option<Date>,

    /// Whether the week was computed from the semester start date.
    pub is_calculated: bool,
}

impl WeekInfo {
    /// Resolves the week from a manual override, then the semester start, else week 1.
    pub fn resolve(config: &Config, today: Date) -> Self {
        let (week, is_calculated) = match (config.current_week, config.semester_start) {
            (Some(week), _) => (week, false),
            (None, Some(start)) => (week_number(start, today), true),
            (None, None) => (1, false),
        };
        Self {
            week,
            semester_start: config.semester_start,
            is_calculated,
        }
    }

    /// Whether the week lies past the configured number of weeks.
    pub fn is_beyond(&self, total_weeks: u32) -> bool {
        self.week > total_weeks
    }
}
