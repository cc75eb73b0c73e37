// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use timetable_core::ClassEntry;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic};
use crate::util::{format_duration, parse_hex_color};

/// Aligned class rows for terminal listings. JSON output serializes the
/// schedule itself, so this only renders tables.
#[derive(Debug)]
pub struct ClassFormatter {
    columns: Vec<ClassColumn>,
}

impl ClassFormatter {
    pub fn new(columns: Vec<ClassColumn>) -> Self {
        Self { columns }
    }

    pub fn format<'a>(&'a self, entries: &'a [ClassEntry]) -> Display<'a> {
        Display {
            entries,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    entries: &'a [ClassEntry],
    formatter: &'a ClassFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        write!(
            f,
            "{}",
            Table::new(TableStyleBasic::new(), columns, self.entries)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassColumn {
    Id,
    TimeRange,
    Duration,
    Course,
    Location,
    Teacher,
    Weeks,
}

impl ClassColumn {
    /// Columns for listing a day or a week.
    pub fn list(verbose: bool) -> Vec<ClassColumn> {
        use ClassColumn::*;
        match verbose {
            true => vec![Id, TimeRange, Duration, Course, Location, Teacher, Weeks],
            false => vec![TimeRange, Course, Location],
        }
    }
}

impl TableColumn<ClassEntry> for ClassColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            ClassColumn::Id => "id",
            ClassColumn::TimeRange => "time",
            ClassColumn::Duration => "duration",
            ClassColumn::Course => "course",
            ClassColumn::Location => "location",
            ClassColumn::Teacher => "teacher",
            ClassColumn::Weeks => "weeks",
        }
        .into()
    }

    fn format<'a>(&self, entry: &'a ClassEntry) -> Cow<'a, str> {
        match self {
            ClassColumn::Id => format!("#{}", entry.id).into(),
            ClassColumn::TimeRange => format!("{}~{}", entry.start_time, entry.end_time).into(),
            ClassColumn::Duration => format_duration(entry.duration_minutes()).into(),
            ClassColumn::Course => entry.course_name.as_str().into(),
            ClassColumn::Location => entry.location.as_deref().unwrap_or_default().into(),
            ClassColumn::Teacher => entry.teacher.as_deref().unwrap_or_default().into(),
            ClassColumn::Weeks => entry.weeks.to_string().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ClassColumn::Id | ClassColumn::Duration => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, entry: &ClassEntry) -> Option<Color> {
        match self {
            ClassColumn::Course => entry.color.as_deref().and_then(parse_hex_color),
            ClassColumn::Weeks => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
