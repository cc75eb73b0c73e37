// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use tokio::sync::broadcast;

use crate::{ClassEntry, EntryId};

const DEFAULT_CAPACITY: usize = 64;

/// A change to the schedule or settings, delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScheduleEvent {
    /// An entry was added.
    EntryAdded {
        /// The new entry.
        entry: ClassEntry,
    },

    /// An entry was replaced.
    EntryUpdated {
        /// The entry after the update.
        entry: ClassEntry,
    },

    /// An entry was removed.
    EntryRemoved {
        /// Identifier of the removed entry.
        id: EntryId,
    },

    /// Settings changed.
    SettingsUpdated {
        /// Names of the changed settings.
        keys: Vec<String>,
    },
}

/// Typed publish/subscribe channel for [`ScheduleEvent`]s.
///
/// Cloning yields another handle to the same channel. Subscribers that fall
/// more than the capacity behind miss the oldest events.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ScheduleEvent>,
}

impl EventBus {
    /// Creates a channel buffering up to `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribes to events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ScheduleEvent> {
        self.sender.subscribe()
    }

    /// Publishes an event, returning how many subscribers will receive it.
    pub fn publish(&self, event: ScheduleEvent) -> usize {
        match self.sender.send(event) {
            Ok(n) => n,
            Err(broadcast::error::SendError(event)) => {
                tracing::debug!(?event, "no subscribers, event dropped");
                0
            }
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
