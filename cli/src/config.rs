// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path, path::PathBuf, str::FromStr};

use tokio::fs;

use timetable_core::{APP_NAME, Config as CoreConfig, MemoryStore, ScheduleFile, get_config_dir};

const TIMETABLE_CONFIG_ENV: &str = "TIMETABLE_CONFIG";
const TIMETABLE_DEV_ENV: &str = "TIMETABLE_DEV";

const TIMETABLE_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const TIMETABLE_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Locates and reads the configuration file.
///
/// The path comes from `--config`, then `TIMETABLE_CONFIG`, then the user
/// config directory. A relative `schedule_path` is resolved against the
/// directory of the configuration file.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(TIMETABLE_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({TIMETABLE_DEV_ENV} is set): config must be explicitly specified via --config or {TIMETABLE_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    let mut config = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()?
        .core;

    if let Some(schedule) = &config.schedule_path {
        let is_plain_relative = schedule.is_relative()
            && !schedule.starts_with("~")
            && !schedule.to_string_lossy().starts_with('$');
        if let Some(dir) = path.parent().filter(|_| is_plain_relative) {
            config.schedule_path = Some(dir.join(schedule));
        }
    }
    config.normalize()?;
    Ok(config)
}

/// Loads the schedule named by `config`, choosing the format by file extension.
///
/// Without a configured schedule, the store starts empty.
#[tracing::instrument(skip_all)]
pub async fn load_store(config: &CoreConfig) -> Result<MemoryStore, Box<dyn Error>> {
    let Some(path) = &config.schedule_path else {
        tracing::warn!("no schedule_path configured, starting with an empty schedule");
        return Ok(MemoryStore::default());
    };

    match ScheduleFormat::of(path) {
        ScheduleFormat::Json => Ok(MemoryStore::load_json(path).await?),
        ScheduleFormat::Toml => {
            let content = fs::read_to_string(path)
                .await
                .map_err(|e| format!("Failed to read schedule at {}: {}", path.display(), e))?;
            let file: ScheduleFile = toml::from_str(&content)?;
            tracing::debug!(count = file.entries.len(), "schedule loaded");
            Ok(MemoryStore::new(file.entries)?)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduleFormat {
    Json,
    Toml,
}

impl ScheduleFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|a| a.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ScheduleFormat::Toml,
            _ => ScheduleFormat::Json,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn is_dev_mode() -> Option<bool> {
    if let Ok(val) = std::env::var(TIMETABLE_DEV_ENV) {
        let lower = val.to_lowercase();
        if TIMETABLE_DEV_VALID_TRUE.contains(&lower.as_str()) {
            Some(true)
        } else if TIMETABLE_DEV_VALID_FALSE.contains(&lower.as_str()) {
            Some(false)
        } else {
            tracing::warn!(
                "Unrecognized value for {}: '{}'. Expected one of: {}. Treating as unset.",
                TIMETABLE_DEV_ENV,
                val,
                format!(
                    "true: {}, false: {}",
                    TIMETABLE_DEV_VALID_TRUE.join(", "),
                    TIMETABLE_DEV_VALID_FALSE.join(", ")
                )
            );
            None
        }
    } else {
        None
    }
}
