// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;
use serde::de;

use crate::TimetableError;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time of day with minute resolution, restricted to `00:00`-`23:59`.
///
/// Ordering follows the minute of day, which agrees with the lexicographic
/// order of the zero-padded `HH:MM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight, the first minute of the day.
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Creates a time from hour and minute.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimetableError> {
        if hour > 23 || minute > 59 {
            return Err(TimetableError::MalformedTime(format_time(hour, minute)));
        }
        Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Creates a time from the minute of day.
    pub fn from_minute_of_day(minutes: u16) -> Result<Self, TimetableError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimetableError::MalformedTime(format!("{minutes} minutes")));
        }
        Ok(Self(minutes))
    }

    /// The hour, `0..=23`.
    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    /// The minute, `0..=59`.
    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Minutes elapsed since midnight.
    pub fn minute_of_day(self) -> u16 {
        self.0
    }

    /// Seconds elapsed since midnight.
    pub fn second_of_day(self) -> u32 {
        u32::from(self.0) * 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

/// Truncates to the minute.
impl From<jiff::civil::Time> for ClockTime {
    fn from(t: jiff::civil::Time) -> Self {
        // jiff guarantees hour in 0..=23 and minute in 0..=59
        Self(t.hour() as u16 * 60 + t.minute() as u16)
    }
}

impl From<ClockTime> for jiff::civil::Time {
    fn from(t: ClockTime) -> Self {
        jiff::civil::Time::constant(t.hour() as i8, t.minute() as i8, 0, 0)
    }
}

impl serde::Serialize for ClockTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ClockTimeVisitor;

        impl de::Visitor<'_> for ClockTimeVisitor {
            type Value = ClockTime;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a wall-clock time like "08:00""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_time(value).map_err(|e| de::Error::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(ClockTimeVisitor)
    }
}

/// Parses a zero-padded `HH:MM` string.
pub fn parse_time(s: &str) -> Result<ClockTime, TimetableError> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(r"^(\d{2}):(\d{2})$").unwrap());

    let malformed = || TimetableError::MalformedTime(s.to_string());
    let caps = re.captures(s).ok_or_else(malformed)?;
    let hour: u8 = caps[1].parse().map_err(|_| malformed())?;
    let minute: u8 = caps[2].parse().map_err(|_| malformed())?;
    ClockTime::new(hour, minute).map_err(|_| malformed())
}

/// Formats hour and minute as `HH:MM`, zero-padding both fields.
pub fn format_time(hour: u8, minute: u8) -> String {
    format!("{hour:02}:{minute:02}")
}

/// Signed minutes from `start` to `end`, negative if `end` precedes `start`.
pub fn time_diff_minutes(start: ClockTime, end: ClockTime) -> i32 {
    i32::from(end.minute_of_day()) - i32::from(start.minute_of_day())
}
