// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::sync::Arc;

use jiff::civil::DateTime;

use crate::{
    Candidate, ClassEntry, ClassStatus, Clock, Config, Conflict, ConflictReport, DayOfWeek,
    EntryId, EventBus, Position, ScheduleEvent, ScheduleStore, SystemClock, TimetableError,
    WeekInfo, WeekSchedule, check_conflict, find_all_conflicts, find_next_occurrence,
};

/// Timetable application core: configuration, a schedule store and a clock.
#[derive(Debug, Clone)]
pub struct Timetable {
    now: DateTime,
    config: Config,
    store: Arc<dyn ScheduleStore>,
    clock: Arc<dyn Clock>,
    bus: EventBus,
}

impl Timetable {
    /// Creates a timetable reading the system clock.
    pub fn new(config: Config, store: Arc<dyn ScheduleStore>) -> Result<Self, Box<dyn Error>> {
        Self::with_clock(config, store, Arc::new(SystemClock))
    }

    /// Creates a timetable reading the given clock.
    pub fn with_clock(
        mut config: Config,
        store: Arc<dyn ScheduleStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        Ok(Self {
            now: clock.now(),
            config,
            store,
            clock,
            bus: EventBus::default(),
        })
    }

    /// The reference instant of this timetable.
    pub fn now(&self) -> DateTime {
        self.now
    }

    /// Refresh the reference instant from the clock.
    pub fn refresh_now(&mut self) {
        self.now = self.clock.now();
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Publishes settings changes on `bus`, typically the store's channel.
    pub fn with_bus(mut self, bus: EventBus) -> Self {
        self.bus = bus;
        self
    }

    /// The channel settings changes are published on.
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Replaces the configuration, returning the names of the changed settings.
    ///
    /// A [`ScheduleEvent::SettingsUpdated`] is published when anything changed.
    /// An invalid configuration is rejected and the current one kept.
    pub fn update_config(&mut self, mut config: Config) -> Result<Vec<String>, Box<dyn Error>> {
        config.normalize()?;
        let keys = self.config.changed_keys(&config);
        self.config = config;
        if !keys.is_empty() {
            tracing::info!(?keys, "settings updated");
            self.bus.publish(ScheduleEvent::SettingsUpdated { keys: keys.clone() });
        }
        Ok(keys)
    }

    /// The weekday of the reference instant.
    pub fn today(&self) -> DayOfWeek {
        self.now.weekday().into()
    }

    /// The teaching week of the reference instant.
    pub fn week_info(&self) -> WeekInfo {
        WeekInfo::resolve(&self.config, self.now.date())
    }

    /// Entries taking place in `week`, grouped by day.
    pub async fn week_schedule(&self, week: u32) -> Result<WeekSchedule, TimetableError> {
        let entries = self.store.list_entries(Some(week)).await?;
        Ok(WeekSchedule::from_entries(entries))
    }

    /// Entries of `day` in `week`, sorted by start time.
    pub async fn day_schedule(
        &self,
        day: DayOfWeek,
        week: u32,
    ) -> Result<DaySchedule, TimetableError> {
        let mut classes = self.store.list_entries_by_day(day, Some(week)).await?;
        classes.sort_by_key(|a| a.start_time);
        Ok(DaySchedule { day, week, classes })
    }

    /// Today's entries in the current week.
    pub async fn today_schedule(&self) -> Result<DaySchedule, TimetableError> {
        self.day_schedule(self.today(), self.week_info().week).await
    }

    /// The next class after the reference instant, looking into next week if needed.
    pub async fn next_class(&self) -> Result<Option<NextClass>, TimetableError> {
        let week = self.week_info().week;
        let this_week = self.week_schedule(week).await?;
        let next_week = match week.checked_add(1) {
            Some(next) => self.week_schedule(next).await?,
            None => WeekSchedule::default(),
        };

        tracing::debug!(week, "looking up next class");
        let at = self.now.time().into();
        let found = find_next_occurrence(&this_week, &next_week, self.today(), at);
        Ok(found.map(|a| NextClass {
            entry: a.entry.clone(),
            days_ahead: a.days_ahead,
            week: week.saturating_add(a.week_offset),
        }))
    }

    /// Checks a candidate range against every stored entry.
    pub async fn check_conflict(
        &self,
        candidate: &Candidate,
        exclude: Option<&EntryId>,
    ) -> Result<ConflictReport, TimetableError> {
        let entries = self.store.list_entries(None).await?;
        Ok(check_conflict(candidate, exclude, &entries))
    }

    /// Grid placement of the entries of `day` in `week`.
    pub async fn layout(
        &self,
        day: DayOfWeek,
        week: u32,
    ) -> Result<Vec<(ClassEntry, Position)>, TimetableError> {
        let schedule = self.day_schedule(day, week).await?;
        tracing::debug!(%day, week, count = schedule.classes.len(), "laying out day");
        Ok(schedule
            .layout(&self.config)
            .into_iter()
            .map(|(entry, position)| (entry.clone(), position))
            .collect())
    }

    /// Every pair of stored entries that conflict with each other.
    pub async fn audit(&self) -> Result<Vec<(EntryId, Conflict)>, TimetableError> {
        let entries = self.store.list_entries(None).await?;
        Ok(find_all_conflicts(&entries))
    }
}

/// One day's entries for a given week.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DaySchedule {
    /// The weekday.
    pub day: DayOfWeek,

    /// The teaching week.
    pub week: u32,

    /// Entries sorted by start time.
    pub classes: Vec<ClassEntry>,
}

impl DaySchedule {
    /// Current, next and last classes at `at`.
    pub fn status(&self, at: jiff::civil::Time) -> ClassStatus<'_> {
        ClassStatus::resolve(&self.classes, at)
    }

    /// Grid placement of each entry.
    pub fn layout(&self, config: &Config) -> Vec<(&ClassEntry, Position)> {
        self.classes
            .iter()
            .map(|a| (a, config.grid.position(a.start_time, a.end_time)))
            .collect()
    }
}

/// An upcoming class, possibly on a later day or in the next week.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NextClass {
    /// The entry.
    pub entry: ClassEntry,

    /// Days from today, `0..=7`.
    pub days_ahead: usize,

    /// The teaching week the class takes place in.
    pub week: u32,
}
