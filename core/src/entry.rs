// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::{ClockTime, DayOfWeek, TimetableError};

/// Opaque identifier of a schedule entry, assigned by whoever stores it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for EntryId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for EntryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // exported schedules use integer ids, hand-written ones often use strings
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u64),
            Text(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Number(n) => n.into(),
            Repr::Text(s) => s.into(),
        })
    }
}

/// The set of week numbers in which an entry takes place.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "WeeksRepr", into = "Vec<u32>")]
pub enum Weeks {
    /// Every week, no restriction.
    #[default]
    All,

    /// Only the listed weeks. Never empty.
    Only(BTreeSet<u32>),
}

impl Weeks {
    /// The largest week number a week set may name.
    pub const MAX_WEEK: u32 = 100;

    /// Weeks `first..=last`.
    pub fn range(first: u32, last: u32) -> Self {
        Self::from_iter(first..=last)
    }

    /// Whether the entry takes place in `week`.
    pub fn contains(&self, week: u32) -> bool {
        match self {
            Weeks::All => true,
            Weeks::Only(set) => set.contains(&week),
        }
    }

    /// The weeks shared by both sets, or `None` if they are disjoint.
    pub fn overlap(&self, other: &Weeks) -> Option<Weeks> {
        match (self, other) {
            (Weeks::All, Weeks::All) => Some(Weeks::All),
            (Weeks::All, only @ Weeks::Only(_)) | (only @ Weeks::Only(_), Weeks::All) => {
                Some(only.clone())
            }
            (Weeks::Only(a), Weeks::Only(b)) => {
                let shared: BTreeSet<u32> = a.intersection(b).copied().collect();
                (!shared.is_empty()).then_some(Weeks::Only(shared))
            }
        }
    }
}

impl FromIterator<u32> for Weeks {
    /// An empty iterator yields [`Weeks::All`].
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let set: BTreeSet<u32> = iter.into_iter().collect();
        if set.is_empty() {
            Weeks::All
        } else {
            Weeks::Only(set)
        }
    }
}

impl fmt::Display for Weeks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = match self {
            Weeks::All => return f.write_str("all"),
            Weeks::Only(set) => set,
        };

        let mut runs: Vec<(u32, u32)> = Vec::new();
        for &week in set {
            match runs.last_mut() {
                Some((_, last)) if *last + 1 == week => *last = week,
                _ => runs.push((week, week)),
            }
        }

        let parts: Vec<String> = runs
            .into_iter()
            .map(|(first, last)| match first == last {
                true => first.to_string(),
                false => format!("{first}-{last}"),
            })
            .collect();
        f.write_str(&parts.join(","))
    }
}

/// Parses `"all"`, `"1-16"`, `"1,3,5-7"`; the empty string means every week.
impl FromStr for Weeks {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(Weeks::All);
        }

        let malformed = || TimetableError::MalformedWeeks(s.to_string());
        let week = |part: &str| {
            part.trim()
                .parse::<u32>()
                .ok()
                .filter(|a| is_valid_week(*a))
                .ok_or_else(malformed)
        };

        let mut set = BTreeSet::new();
        for part in s.split(',') {
            if let Some((first, last)) = part.split_once('-') {
                let (first, last) = (week(first)?, week(last)?);
                if first > last {
                    return Err(malformed());
                }
                set.extend(first..=last);
            } else {
                set.insert(week(part)?);
            }
        }
        Ok(Weeks::Only(set))
    }
}

fn is_valid_week(week: u32) -> bool {
    (1..=Weeks::MAX_WEEK).contains(&week)
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum WeeksRepr {
    List(Vec<u32>),
    Text(String),
}

impl TryFrom<WeeksRepr> for Weeks {
    type Error = TimetableError;

    fn try_from(repr: WeeksRepr) -> Result<Self, Self::Error> {
        match repr {
            WeeksRepr::List(list) => match list.iter().find(|a| !is_valid_week(**a)) {
                Some(week) => Err(TimetableError::MalformedWeeks(week.to_string())),
                None => Ok(Weeks::from_iter(list)),
            },
            WeeksRepr::Text(text) => text.parse(),
        }
    }
}

impl From<Weeks> for Vec<u32> {
    fn from(weeks: Weeks) -> Self {
        match weeks {
            Weeks::All => Vec::new(),
            Weeks::Only(set) => set.into_iter().collect(),
        }
    }
}

/// One scheduled occurrence of a course on a weekday, for a set of weeks.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClassEntry {
    /// Identifier assigned by the store.
    pub id: EntryId,

    /// The weekday the class takes place on.
    pub day_of_week: DayOfWeek,

    /// Start time, inclusive.
    pub start_time: ClockTime,

    /// End time, exclusive.
    pub end_time: ClockTime,

    /// Weeks in which the class takes place.
    #[serde(default)]
    pub weeks: Weeks,

    /// Name of the course.
    #[serde(default)]
    pub course_name: String,

    /// Teacher of the course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,

    /// Where the class takes place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Display color, such as `#6750A4`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ClassEntry {
    /// Creates an entry held every week, validating that `start < end`.
    pub fn new(
        id: impl Into<EntryId>,
        day_of_week: DayOfWeek,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Result<Self, TimetableError> {
        let entry = Self {
            id: id.into(),
            day_of_week,
            start_time,
            end_time,
            weeks: Weeks::All,
            course_name: String::new(),
            teacher: None,
            location: None,
            color: None,
            note: None,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Restricts the entry to the given weeks.
    pub fn with_weeks(mut self, weeks: Weeks) -> Self {
        self.weeks = weeks;
        self
    }

    /// Sets the course name.
    pub fn with_course_name(mut self, name: impl Into<String>) -> Self {
        self.course_name = name.into();
        self
    }

    /// Checks the `start_time < end_time` invariant.
    pub fn validate(&self) -> Result<(), TimetableError> {
        if self.start_time < self.end_time {
            Ok(())
        } else {
            Err(TimetableError::InvalidTimeRange {
                start: self.start_time,
                end: self.end_time,
            })
        }
    }

    /// Length of the class in minutes.
    pub fn duration_minutes(&self) -> i32 {
        crate::time_diff_minutes(self.start_time, self.end_time)
    }
}
