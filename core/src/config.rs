// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use jiff::civil::Date;

use crate::{GridConfig, Weeks};

/// The name of the timetable application.
pub const APP_NAME: &str = "timetable";

/// Configuration for the timetable core.
///
/// Passed by value into [`crate::Timetable`]; there is no global settings state.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Config {
    /// Path to the schedule file, JSON or TOML.
    #[serde(default)]
    pub schedule_path: Option<PathBuf>,

    /// First day of the semester, used to compute the current week.
    #[serde(default)]
    pub semester_start: Option<Date>,

    /// Manually pinned current week, taking precedence over `semester_start`.
    #[serde(default)]
    pub current_week: Option<u32>,

    /// Number of teaching weeks in the semester.
    #[serde(default = "default_total_weeks")]
    pub total_weeks: u32,

    /// Layout of the time grid.
    #[serde(default)]
    pub grid: GridConfig,
}

const fn default_total_weeks() -> u32 {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule_path: None,
            semester_start: None,
            current_week: None,
            total_weeks: default_total_weeks(),
            grid: GridConfig::default(),
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        // Normalize schedule path
        if let Some(path) = &self.schedule_path {
            self.schedule_path = Some(
                expand_path(path).map_err(|e| format!("Failed to expand schedule path: {e}"))?,
            );
        }

        if !(1..=Weeks::MAX_WEEK).contains(&self.total_weeks) {
            return Err(format!(
                "total_weeks must be between 1 and {}, got {}",
                Weeks::MAX_WEEK,
                self.total_weeks
            )
            .into());
        }

        if let Some(week) = self.current_week
            && !(1..=Weeks::MAX_WEEK).contains(&week)
        {
            return Err(format!(
                "current_week must be between 1 and {}, got {week}",
                Weeks::MAX_WEEK
            )
            .into());
        }

        self.grid.validate()?;
        Ok(())
    }

    /// Names of the settings that differ in `other`, grid fields as `grid.<field>`.
    pub fn changed_keys(&self, other: &Config) -> Vec<String> {
        let fields = [
            ("schedule_path", self.schedule_path != other.schedule_path),
            ("semester_start", self.semester_start != other.semester_start),
            ("current_week", self.current_week != other.current_week),
            ("total_weeks", self.total_weeks != other.total_weeks),
            ("grid.start_hour", self.grid.start_hour != other.grid.start_hour),
            ("grid.end_hour", self.grid.end_hour != other.grid.end_hour),
            ("grid.hour_height", self.grid.hour_height != other.grid.hour_height),
        ];
        fields
            .into_iter()
            .filter(|(_, changed)| *changed)
            .map(|(key, _)| key.to_string())
            .collect()
    }
}

/// Handle tilde (~) and environment variables in the path
pub(crate) fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

/// The user-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or("User-specific config directory not found".into())
}
