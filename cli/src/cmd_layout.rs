// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, error::Error};

use clap::{ArgMatches, Command};
use colored::{Color, Colorize};
use timetable_core::{
    ClassEntry, ClockTime, DayOfWeek, Position, Timetable, generate_time_slots,
    is_current_time_slot,
};

use crate::arg::{CommonArgs, ScheduleArgs};
use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic};
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdLayout {
    pub day: Option<DayOfWeek>,
    pub week: Option<u32>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdLayout {
    pub const NAME: &str = "layout";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show where a day's classes sit on the time grid")
            .arg(ScheduleArgs::day(false))
            .arg(ScheduleArgs::week())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            day: ScheduleArgs::get_day(matches),
            week: ScheduleArgs::get_week(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, timetable: &Timetable) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "laying out classes...");
        let today = timetable.today();
        let day = self.day.unwrap_or(today);
        let week = self.week.unwrap_or_else(|| timetable.week_info().week);
        let grid = timetable.config().grid;

        // only today has a current slot
        let now = ClockTime::from(timetable.now().time());
        let blocks = timetable.layout(day, week).await?;
        let rows: Vec<_> = blocks
            .iter()
            .map(|(entry, position)| Block {
                entry,
                position: *position,
                is_current: day == today
                    && is_current_time_slot(entry.start_time, entry.end_time, now),
            })
            .collect();

        if self.output_format == OutputFormat::Json {
            let json = serde_json::json!({
                "day": day,
                "week": week,
                "grid": grid,
                "height": grid.height(),
                "slots": generate_time_slots(&grid),
                "blocks": rows,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
            return Ok(());
        }

        println!(
            "{} {}",
            format!("{day}, week {week}").bold(),
            format!(
                "(grid {}:00-{}:00, {}px per hour)",
                grid.start_hour, grid.end_hour, grid.hour_height
            )
            .italic()
        );
        if self.verbose {
            let slots = generate_time_slots(&grid);
            let labels: Vec<_> = slots.iter().map(|a| a.label.as_str()).collect();
            println!("{}", labels.join(" ").dimmed());
        }

        if rows.is_empty() {
            println!("No classes");
        } else {
            let columns = BlockColumn::ALL;
            println!("{}", Table::new(TableStyleBasic::new(), &columns, &rows));
        }
        Ok(())
    }
}

#[derive(Debug, serde::Serialize)]
struct Block<'a> {
    entry: &'a ClassEntry,
    position: Position,
    is_current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockColumn {
    TimeRange,
    Course,
    Top,
    Height,
}

impl BlockColumn {
    const ALL: [BlockColumn; 4] = [
        BlockColumn::TimeRange,
        BlockColumn::Course,
        BlockColumn::Top,
        BlockColumn::Height,
    ];
}

impl<'r> TableColumn<Block<'r>> for BlockColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            BlockColumn::TimeRange => "time",
            BlockColumn::Course => "course",
            BlockColumn::Top => "top",
            BlockColumn::Height => "height",
        }
        .into()
    }

    fn format<'a>(&self, block: &'a Block<'r>) -> Cow<'a, str> {
        let entry = block.entry;
        match self {
            BlockColumn::TimeRange => format!("{}~{}", entry.start_time, entry.end_time).into(),
            BlockColumn::Course => entry.course_name.as_str().into(),
            BlockColumn::Top => format!("top={}", block.position.top).into(),
            BlockColumn::Height => format!("height={}", block.position.height).into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, block: &Block<'r>) -> Option<Color> {
        block.is_current.then_some(Color::Green)
    }
}
