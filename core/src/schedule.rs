// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{ClassEntry, DayOfWeek};

/// One week's worth of entries, grouped by day and sorted by start time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WeekSchedule {
    days: [Vec<ClassEntry>; 7],
}

impl WeekSchedule {
    /// Groups entries by day, sorting each day by start time.
    ///
    /// The sort is stable, so entries starting together keep their input order.
    pub fn from_entries(entries: impl IntoIterator<Item = ClassEntry>) -> Self {
        let mut days: [Vec<ClassEntry>; 7] = Default::default();
        for entry in entries {
            days[entry.day_of_week.index()].push(entry);
        }
        for day in &mut days {
            day.sort_by_key(|a| a.start_time);
        }
        Self { days }
    }

    /// Groups the entries that take place in `week`.
    pub fn for_week(entries: impl IntoIterator<Item = ClassEntry>, week: u32) -> Self {
        Self::from_entries(entries.into_iter().filter(|a| a.weeks.contains(week)))
    }

    /// Entries of one day, sorted by start time.
    pub fn day(&self, day: DayOfWeek) -> &[ClassEntry] {
        &self.days[day.index()]
    }

    /// Days paired with their entries, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, &[ClassEntry])> {
        DayOfWeek::ALL
            .into_iter()
            .map(|day| (day, self.day(day)))
    }

    /// All entries, Monday first.
    pub fn entries(&self) -> impl Iterator<Item = &ClassEntry> {
        self.days.iter().flatten()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    /// Whether no day has any entry.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// Summary figures for the week.
    pub fn stats(&self) -> ScheduleStats {
        let mut minutes_per_day = [0i32; 7];
        let mut busiest: Option<(DayOfWeek, usize)> = None;
        for (day, entries) in self.iter() {
            minutes_per_day[day.index()] = entries
                .iter()
                .map(ClassEntry::duration_minutes)
                .sum::<i32>();
            // ties go to the earlier day
            if !entries.is_empty() && busiest.is_none_or(|(_, n)| entries.len() > n) {
                busiest = Some((day, entries.len()));
            }
        }

        ScheduleStats {
            total_entries: self.len(),
            busiest_day: busiest.map(|(day, _)| day),
            minutes_per_day,
        }
    }
}

/// Summary figures of a [`WeekSchedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ScheduleStats {
    /// Number of entries in the week.
    pub total_entries: usize,

    /// The day with the most entries, if any.
    pub busiest_day: Option<DayOfWeek>,

    /// Scheduled minutes per day, Monday first.
    pub minutes_per_day: [i32; 7],
}
