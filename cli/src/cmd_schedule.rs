// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use timetable_core::{DayOfWeek, Timetable};

use crate::arg::{CommonArgs, ScheduleArgs};
use crate::class_formatter::{ClassColumn, ClassFormatter};
use crate::util::{OutputFormat, format_duration};

#[derive(Debug, Clone, Copy)]
pub struct CmdDay {
    pub day: Option<DayOfWeek>,
    pub week: Option<u32>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("d")
            .about("List the classes of a day")
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
        tracing::debug!(?self, "listing classes of a day...");
        let day = self.day.unwrap_or_else(|| timetable.today());
        let week = self.week.unwrap_or_else(|| timetable.week_info().week);
        let schedule = timetable.day_schedule(day, week).await?;

        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schedule)?),
            OutputFormat::Table => {
                println!("{}", format!("{day}, week {week}").bold());
                if schedule.classes.is_empty() {
                    println!("No classes");
                } else {
                    let formatter = ClassFormatter::new(ClassColumn::list(self.verbose));
                    println!("{}", formatter.format(&schedule.classes));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdWeek {
    pub week: Option<u32>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdWeek {
    pub const NAME: &str = "week";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("w")
            .about("List the classes of a week, grouped by day")
            .arg(ScheduleArgs::week())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            week: ScheduleArgs::get_week(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, timetable: &Timetable) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing classes of a week...");
        let week = self.week.unwrap_or_else(|| timetable.week_info().week);
        let schedule = timetable.week_schedule(week).await?;
        let stats = schedule.stats();

        if self.output_format == OutputFormat::Json {
            let json = serde_json::json!({
                "week": week,
                "entries": schedule.entries().collect::<Vec<_>>(),
                "stats": stats,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
            return Ok(());
        }

        println!("🗓️ {}", format!("Week {week}").bold());
        if schedule.is_empty() {
            println!("No classes");
            return Ok(());
        }

        let formatter = ClassFormatter::new(ClassColumn::list(self.verbose));
        for (day, classes) in schedule.iter().filter(|(_, a)| !a.is_empty()) {
            let minutes = stats.minutes_per_day[day.index()];
            println!(
                " {} {} {}",
                "►".green(),
                day.to_string().italic(),
                format!("({})", format_duration(minutes)).dimmed()
            );
            println!("{}", formatter.format(classes));
        }

        if let Some(busiest) = stats.busiest_day {
            println!(
                "{} classes, busiest on {}",
                stats.total_entries,
                busiest.to_string().bold()
            );
        }
        Ok(())
    }
}
