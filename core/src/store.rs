// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Debug;
use std::path::Path;

use async_trait::async_trait;
use tokio::{fs, sync::RwLock};

use crate::{
    Candidate, ClassEntry, DayOfWeek, EntryId, EventBus, ScheduleEvent, TimetableError,
    check_conflict, find_all_conflicts,
};

/// Where schedule entries come from.
///
/// Implementations return entries sorted by day, then by start time.
#[async_trait]
pub trait ScheduleStore: Debug + Send + Sync {
    /// Entries taking place in `week`, or every entry when `week` is `None`.
    async fn list_entries(&self, week: Option<u32>) -> Result<Vec<ClassEntry>, TimetableError>;

    /// Entries of one day taking place in `week`.
    async fn list_entries_by_day(
        &self,
        day: DayOfWeek,
        week: Option<u32>,
    ) -> Result<Vec<ClassEntry>, TimetableError> {
        let entries = self.list_entries(week).await?;
        Ok(entries.into_iter().filter(|a| a.day_of_week == day).collect())
    }
}

/// The on-disk layout of a schedule: a list of entries.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleFile {
    /// All entries of the schedule.
    #[serde(default)]
    pub entries: Vec<ClassEntry>,
}

impl ScheduleFile {
    /// Decodes a JSON schedule, either `{"entries": [...]}` or a bare array.
    pub fn from_json(s: &str) -> Result<Self, TimetableError> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            File(ScheduleFile),
            List(Vec<ClassEntry>),
        }

        Ok(match serde_json::from_str::<Repr>(s)? {
            Repr::File(file) => file,
            Repr::List(entries) => ScheduleFile { entries },
        })
    }
}

/// An in-memory store that rejects conflicting writes.
///
/// Data loaded up front is accepted even if it overlaps; such overlaps are
/// logged and can be listed with [`find_all_conflicts`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Vec<ClassEntry>>,
    bus: EventBus,
}

impl MemoryStore {
    /// Creates a store holding `entries`, which must be valid and have unique ids.
    pub fn new(entries: Vec<ClassEntry>) -> Result<Self, TimetableError> {
        for (i, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if entries.iter().skip(i + 1).any(|a| a.id == entry.id) {
                return Err(TimetableError::Duplicate(entry.id.clone()));
            }
        }

        let overlaps = find_all_conflicts(&entries);
        if !overlaps.is_empty() {
            tracing::warn!(count = overlaps.len(), "schedule contains conflicting entries");
        }

        Ok(Self {
            entries: RwLock::new(entries),
            bus: EventBus::default(),
        })
    }

    /// Loads a JSON schedule file.
    #[tracing::instrument]
    pub async fn load_json(path: &Path) -> Result<Self, TimetableError> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            TimetableError::Data(format!("Failed to read {}: {e}", path.display()))
        })?;
        let file = ScheduleFile::from_json(&content)?;
        tracing::debug!(count = file.entries.len(), "schedule loaded");
        Self::new(file.entries)
    }

    /// Publishes changes on `bus` instead of a private channel.
    pub fn with_bus(mut self, bus: EventBus) -> Self {
        self.bus = bus;
        self
    }

    /// The channel changes are published on.
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Adds an entry unless it conflicts with or duplicates an existing one.
    pub async fn add_entry(&self, entry: ClassEntry) -> Result<(), TimetableError> {
        entry.validate()?;
        let mut entries = self.entries.write().await;
        if entries.iter().any(|a| a.id == entry.id) {
            return Err(TimetableError::Duplicate(entry.id));
        }

        let report = check_conflict(&Candidate::from(&entry), None, &entries);
        if report.has_conflict {
            return Err(TimetableError::Conflict {
                id: entry.id,
                count: report.conflicts.len(),
            });
        }

        tracing::info!(id = %entry.id, day = %entry.day_of_week, "adding entry");
        entries.push(entry.clone());
        drop(entries);

        self.bus.publish(ScheduleEvent::EntryAdded { entry });
        Ok(())
    }

    /// Replaces the entry with the same id, checking conflicts against all others.
    pub async fn update_entry(&self, entry: ClassEntry) -> Result<(), TimetableError> {
        entry.validate()?;
        let mut entries = self.entries.write().await;
        let Some(index) = entries.iter().position(|a| a.id == entry.id) else {
            return Err(TimetableError::NotFound(entry.id));
        };

        let report = check_conflict(&Candidate::from(&entry), Some(&entry.id), &entries);
        if report.has_conflict {
            return Err(TimetableError::Conflict {
                id: entry.id,
                count: report.conflicts.len(),
            });
        }

        tracing::info!(id = %entry.id, "updating entry");
        entries[index] = entry.clone();
        drop(entries);

        self.bus.publish(ScheduleEvent::EntryUpdated { entry });
        Ok(())
    }

    /// Removes and returns the entry with `id`.
    pub async fn remove_entry(&self, id: &EntryId) -> Result<ClassEntry, TimetableError> {
        let mut entries = self.entries.write().await;
        let Some(index) = entries.iter().position(|a| &a.id == id) else {
            return Err(TimetableError::NotFound(id.clone()));
        };

        tracing::info!(%id, "removing entry");
        let removed = entries.remove(index);
        drop(entries);

        self.bus.publish(ScheduleEvent::EntryRemoved { id: id.clone() });
        Ok(removed)
    }
}

#[async_trait]
impl ScheduleStore for MemoryStore {
    async fn list_entries(&self, week: Option<u32>) -> Result<Vec<ClassEntry>, TimetableError> {
        let entries = self.entries.read().await;
        let mut list: Vec<ClassEntry> = entries
            .iter()
            .filter(|a| week.is_none_or(|w| a.weeks.contains(w)))
            .cloned()
            .collect();
        list.sort_by_key(|a| (a.day_of_week, a.start_time));
        Ok(list)
    }
}
