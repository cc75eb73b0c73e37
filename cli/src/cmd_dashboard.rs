// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use timetable_core::{ClassEntry, ClassStatus, NextClass, Timetable, WeekInfo};

use crate::arg::CommonArgs;
use crate::util::{OutputFormat, format_duration, progress_bar};

#[derive(Debug, Clone, Copy)]
pub struct CmdDashboard {
    pub output_format: OutputFormat,
}

impl Default for CmdDashboard {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
        }
    }
}

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the dashboard: the current, next and last class of today")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    /// Show the dashboard with today's classes.
    pub async fn run(self, timetable: &Timetable) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");

        let week = timetable.week_info();
        let today = timetable.today_schedule().await?;
        let status = today.status(timetable.now().time());
        let upcoming = match status.next {
            Some(_) => None,
            None => timetable.next_class().await?,
        };

        match self.output_format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "now": timetable.now(),
                    "day": today.day,
                    "week": week,
                    "status": status,
                    "upcoming": upcoming,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Table => {
                print_week(&week, timetable.config().total_weeks);
                print_status(&status);
                if let Some(upcoming) = &upcoming {
                    print_upcoming(upcoming);
                }
            }
        }
        Ok(())
    }
}

fn print_week(week: &WeekInfo, total_weeks: u32) {
    let source = match (week.is_calculated, week.semester_start) {
        (true, Some(start)) => format!("semester started {start}"),
        (false, _) if week.semester_start.is_none() => "no semester start set".to_string(),
        _ => "set manually".to_string(),
    };
    println!("🗓️ {} {}", format!("Week {}", week.week).bold(), source.italic());
    if week.is_beyond(total_weeks) {
        println!(
            "{} week {} is past the {} weeks of the semester",
            "Note:".yellow(),
            week.week,
            total_weeks
        );
    }
}

fn print_status(status: &ClassStatus<'_>) {
    if status.current.is_none() && status.next.is_none() && status.last.is_none() {
        println!("No classes today");
        return;
    }

    if let Some(current) = status.current {
        println!(" {} {}  {}", "►".green(), "Now ".bold(), describe(current));
        if let Some(progress) = status.progress {
            println!("        {}", progress_bar(progress, 20));
        }
    } else if status.is_break() {
        println!(" {} {}", "►".green(), "Break".bold());
    }

    if let Some(next) = status.next {
        println!(" {} {}  {}", "►".green(), "Next".bold(), describe(next));
    }

    if let Some(last) = status.last {
        println!(" {} {}  {}", "►".dimmed(), "Last".dimmed(), describe(last).dimmed());
    }
}

fn print_upcoming(upcoming: &NextClass) {
    let when = match upcoming.days_ahead {
        0 => "later today".to_string(),
        1 => "tomorrow".to_string(),
        n => format!("in {n} days, {}", upcoming.entry.day_of_week),
    };
    println!(
        " {} {}  {} ({})",
        "►".green(),
        "Upcoming".bold(),
        describe(&upcoming.entry),
        when.italic()
    );
}

fn describe(entry: &ClassEntry) -> String {
    let mut s = format!(
        "{}~{} {} ({})",
        entry.start_time,
        entry.end_time,
        entry.course_name,
        format_duration(entry.duration_minutes())
    );
    if let Some(location) = &entry.location {
        s.push_str(&format!(" @ {location}"));
    }
    s
}
