// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Debug;

use jiff::civil::DateTime;

use crate::{ClockTime, DayOfWeek};

/// Source of the reference instant, as local wall-clock time.
pub trait Clock: Debug + Send + Sync {
    /// The current local date and time.
    fn now(&self) -> DateTime;

    /// The current weekday.
    fn today(&self) -> DayOfWeek {
        self.now().weekday().into()
    }

    /// The current time of day, truncated to the minute.
    fn time_of_day(&self) -> ClockTime {
        self.now().time().into()
    }
}

/// The system clock in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        jiff::Zoned::now().datetime()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime);

impl Clock for FixedClock {
    fn now(&self) -> DateTime {
        self.0
    }
}
