// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, error::Error};

use clap::{ArgGroup, ArgMatches, Command, arg};
use colored::{Color, Colorize};
use timetable_core::{Candidate, Conflict, EntryId, Timetable};

use crate::arg::{CandidateArgs, CommonArgs, ScheduleArgs};
use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdConflict {
    pub target: ConflictTarget,

    pub output_format: OutputFormat,
}

#[derive(Debug, Clone)]
pub enum ConflictTarget {
    /// Check a candidate range, optionally ignoring the entry being edited.
    Candidate {
        candidate: Candidate,
        exclude: Option<EntryId>,
    },

    /// Audit every pair of stored entries.
    All,
}

impl CmdConflict {
    pub const NAME: &str = "conflict";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check a time range against the schedule, or audit the whole schedule")
            .arg(ScheduleArgs::day(false).help("Day of the week, such as mon or 1"))
            .arg(CandidateArgs::start().required(false))
            .arg(CandidateArgs::end().required(false))
            .arg(CandidateArgs::weeks())
            .arg(CandidateArgs::exclude())
            .arg(
                arg!(--all "Audit every pair of stored entries instead")
                    .conflicts_with_all(["day", "start", "end", "weeks", "exclude"]),
            )
            .group(
                ArgGroup::new("target")
                    .args(["day", "all"])
                    .required(true),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let target = if matches.get_flag("all") {
            ConflictTarget::All
        } else {
            let (Some(day), Some(start), Some(end)) = (
                ScheduleArgs::get_day(matches),
                CandidateArgs::get_start(matches),
                CandidateArgs::get_end(matches),
            ) else {
                return Err("Day, start and end are required unless --all is given".into());
            };
            let weeks = CandidateArgs::get_weeks(matches);
            ConflictTarget::Candidate {
                candidate: Candidate::new(day, start, end, weeks)?,
                exclude: CandidateArgs::get_exclude(matches),
            }
        };

        Ok(Self {
            target,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, timetable: &Timetable) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking conflicts...");
        match self.target {
            ConflictTarget::Candidate { candidate, exclude } => {
                let report = timetable.check_conflict(&candidate, exclude.as_ref()).await?;
                match self.output_format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                    OutputFormat::Table if !report.has_conflict => {
                        println!("{}", "No conflict".green());
                    }
                    OutputFormat::Table => {
                        let n = report.conflicts.len();
                        println!("{}", format!("{n} conflict(s) found").red());
                        let columns = ConflictColumn::ALL;
                        let rows: Vec<ConflictRow<'_>> =
                            report.conflicts.iter().map(|a| (None, a)).collect();
                        println!("{}", Table::new(TableStyleBasic::new(), &columns, &rows));
                    }
                }
            }
            ConflictTarget::All => {
                let pairs = timetable.audit().await?;
                let rows: Vec<ConflictRow<'_>> =
                    pairs.iter().map(|(id, a)| (Some(id), a)).collect();
                let columns = [vec![ConflictColumn::With], ConflictColumn::ALL.to_vec()].concat();
                match self.output_format {
                    OutputFormat::Json => {
                        println!("{}", Table::new(TableStyleJson::new(), &columns, &rows));
                    }
                    OutputFormat::Table if rows.is_empty() => {
                        println!("{}", "No conflicts in the schedule".green());
                    }
                    OutputFormat::Table => {
                        println!("{}", format!("{} conflict(s) found", rows.len()).red());
                        println!("{}", Table::new(TableStyleBasic::new(), &columns, &rows));
                    }
                }
            }
        }
        Ok(())
    }
}

/// A conflict, paired with the other entry's id when auditing.
type ConflictRow<'a> = (Option<&'a EntryId>, &'a Conflict);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConflictColumn {
    With,
    Id,
    Day,
    TimeRange,
    Course,
    Weeks,
    Overlap,
}

impl ConflictColumn {
    const ALL: [ConflictColumn; 6] = [
        ConflictColumn::Id,
        ConflictColumn::Day,
        ConflictColumn::TimeRange,
        ConflictColumn::Course,
        ConflictColumn::Weeks,
        ConflictColumn::Overlap,
    ];
}

impl<'r> TableColumn<ConflictRow<'r>> for ConflictColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            ConflictColumn::With => "entry",
            ConflictColumn::Id => "conflicts_with",
            ConflictColumn::Day => "day",
            ConflictColumn::TimeRange => "time",
            ConflictColumn::Course => "course",
            ConflictColumn::Weeks => "weeks",
            ConflictColumn::Overlap => "overlap",
        }
        .into()
    }

    fn format<'a>(&self, row: &'a ConflictRow<'r>) -> Cow<'a, str> {
        let (with, conflict) = row;
        let entry = &conflict.entry;
        match self {
            ConflictColumn::With => with.map(|a| format!("#{a}")).unwrap_or_default().into(),
            ConflictColumn::Id => format!("#{}", entry.id).into(),
            ConflictColumn::Day => entry.day_of_week.short_name().into(),
            ConflictColumn::TimeRange => format!("{}~{}", entry.start_time, entry.end_time).into(),
            ConflictColumn::Course => entry.course_name.as_str().into(),
            ConflictColumn::Weeks => format!("weeks {}", conflict.weeks).into(),
            ConflictColumn::Overlap => format!("{}m", conflict.overlap_minutes).into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ConflictColumn::With | ConflictColumn::Id | ConflictColumn::Overlap => {
                PaddingDirection::Right
            }
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, _row: &ConflictRow<'r>) -> Option<Color> {
        match self {
            ConflictColumn::Overlap => Some(Color::Red),
            _ => None,
        }
    }
}
