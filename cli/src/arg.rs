// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use timetable_core::{ClockTime, DayOfWeek, EntryId, Weeks};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduleArgs;

impl ScheduleArgs {
    pub fn day(required: bool) -> Arg {
        let arg = arg!(day: <DAY> "Day of the week, such as mon or 1")
            .value_parser(value_parser!(DayOfWeek));
        match required {
            true => arg,
            false => arg
                .required(false)
                .help("Day of the week, such as mon or 1 [default: today]"),
        }
    }

    pub fn get_day(matches: &ArgMatches) -> Option<DayOfWeek> {
        matches.get_one("day").copied()
    }

    pub fn week() -> Arg {
        arg!(-w --week <WEEK> "Teaching week [default: current week]")
            .value_parser(value_parser!(u32).range(1..))
    }

    pub fn get_week(matches: &ArgMatches) -> Option<u32> {
        matches.get_one("week").copied()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CandidateArgs;

impl CandidateArgs {
    pub fn start() -> Arg {
        arg!(start: <START> "Start time, HH:MM").value_parser(value_parser!(ClockTime))
    }

    pub fn get_start(matches: &ArgMatches) -> Option<ClockTime> {
        matches.get_one("start").copied()
    }

    pub fn end() -> Arg {
        arg!(end: <END> "End time, HH:MM").value_parser(value_parser!(ClockTime))
    }

    pub fn get_end(matches: &ArgMatches) -> Option<ClockTime> {
        matches.get_one("end").copied()
    }

    pub fn weeks() -> Arg {
        arg!(--weeks <WEEKS> "Weeks of the candidate, such as 1-16 or 1,3,5")
            .value_parser(value_parser!(Weeks))
            .default_value("all")
    }

    pub fn get_weeks(matches: &ArgMatches) -> Weeks {
        matches.get_one("weeks").cloned().unwrap_or_default()
    }

    pub fn exclude() -> Arg {
        arg!(--exclude <ID> "Ignore the entry with this id, when editing it")
    }

    pub fn get_exclude(matches: &ArgMatches) -> Option<EntryId> {
        matches.get_one::<String>("exclude").map(|a| a.as_str().into())
    }
}
