// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod arg;
mod class_formatter;
mod cli;
mod cmd_conflict;
mod cmd_dashboard;
mod cmd_generate_completion;
mod cmd_layout;
mod cmd_schedule;
mod config;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
