// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf, sync::Arc};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use timetable_core::{APP_NAME, Timetable};
use tracing_subscriber::EnvFilter;

use crate::cmd_conflict::CmdConflict;
use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_layout::CmdLayout;
use crate::cmd_schedule::{CmdDay, CmdWeek};
use crate::config::{load_store, parse_config};

/// Run the timetable command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Where should I be right now? A class timetable in your terminal.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to dashboard
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/timetable/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/timetable/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdDashboard::command())
            .subcommand(CmdDay::command())
            .subcommand(CmdWeek::command())
            .subcommand(CmdConflict::command())
            .subcommand(CmdLayout::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdDashboard::NAME, matches)) => Dashboard(CmdDashboard::from(matches)),
            Some((CmdDay::NAME, matches)) => Day(CmdDay::from(matches)),
            Some((CmdWeek::NAME, matches)) => Week(CmdWeek::from(matches)),
            Some((CmdConflict::NAME, matches)) => Conflict(CmdConflict::from(matches)?),
            Some((CmdLayout::NAME, matches)) => Layout(CmdLayout::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches)?)
            }
            None => Dashboard(CmdDashboard::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the current, next and last class
    Dashboard(CmdDashboard),

    /// List the classes of a day
    Day(CmdDay),

    /// List the classes of a week
    Week(CmdWeek),

    /// Check a time range for conflicts, or audit the schedule
    Conflict(CmdConflict),

    /// Show grid positions of a day's classes
    Layout(CmdLayout),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Dashboard(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            Day(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            Week(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            Conflict(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            Layout(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run().await,
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Timetable) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let core_config = parse_config(config).await?;
        let store = load_store(&core_config).await?;
        let bus = store.bus().clone();
        let timetable = Timetable::new(core_config, Arc::new(store))?.with_bus(bus);

        f(&timetable).await
    }
}
