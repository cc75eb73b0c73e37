// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::TimetableError;

/// Day of the week, numbered Monday = 1 through Sunday = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "i64", into = "u8")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DayOfWeek {
    /// Monday.
    #[cfg_attr(feature = "clap", clap(name = "mon", alias = "1"))]
    Monday = 1,

    /// Tuesday.
    #[cfg_attr(feature = "clap", clap(name = "tue", alias = "2"))]
    Tuesday = 2,

    /// Wednesday.
    #[cfg_attr(feature = "clap", clap(name = "wed", alias = "3"))]
    Wednesday = 3,

    /// Thursday.
    #[cfg_attr(feature = "clap", clap(name = "thu", alias = "4"))]
    Thursday = 4,

    /// Friday.
    #[cfg_attr(feature = "clap", clap(name = "fri", alias = "5"))]
    Friday = 5,

    /// Saturday.
    #[cfg_attr(feature = "clap", clap(name = "sat", alias = "6"))]
    Saturday = 6,

    /// Sunday.
    #[cfg_attr(feature = "clap", clap(name = "sun", alias = "7"))]
    Sunday = 7,
}

impl DayOfWeek {
    /// All days, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// The day number, `1..=7`.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based index, Monday = 0.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// The following day, wrapping Sunday to Monday.
    pub fn succ(self) -> Self {
        self.add_days(1)
    }

    /// The day `n` days later, wrapping around the week.
    pub fn add_days(self, n: usize) -> Self {
        Self::ALL[(self.index() + n) % 7]
    }

    /// The six days after this one, in cyclic order.
    pub fn following(self) -> impl Iterator<Item = DayOfWeek> {
        (1..7).map(move |offset| self.add_days(offset))
    }

    /// Short English name.
    pub fn short_name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Mon",
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
            DayOfWeek::Friday => "Fri",
            DayOfWeek::Saturday => "Sat",
            DayOfWeek::Sunday => "Sun",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

impl TryFrom<i64> for DayOfWeek {
    type Error = TimetableError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1..=7 => Ok(Self::ALL[(value - 1) as usize]),
            _ => Err(TimetableError::InvalidDayOfWeek(value)),
        }
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.number()
    }
}

impl From<jiff::civil::Weekday> for DayOfWeek {
    fn from(weekday: jiff::civil::Weekday) -> Self {
        // monday-one offset is always within 1..=7
        Self::ALL[(weekday.to_monday_one_offset() - 1) as usize]
    }
}
