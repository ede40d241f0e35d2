//! Event — an immutable record of something that happened on the board.
//!
//! Events are produced when machines free up, favorites are toggled, the
//! board is refreshed, and sensor readings arrive. They feed the in-process
//! event bus and the SSE stream.

use serde::{Deserialize, Serialize};

use crate::id::{EventId, HallId};
use crate::time::{Timestamp, now};

/// What kind of thing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A machine crossed `done → available`.
    MachineAvailable,
    /// A hall was added to or removed from favorites.
    StarToggled,
    /// The sort mode was cycled.
    SortModeChanged,
    /// The refresh simulator changed one machine.
    BoardRefreshed,
    /// A sensor-feed reading was ingested.
    ReadingIngested,
}

/// A single event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub event_type: EventType,
    /// The hall the event concerns, when it concerns one.
    pub hall_id: Option<HallId>,
    /// Event-type specific payload.
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create a new event stamped with the current time.
    #[must_use]
    pub fn new(event_type: EventType, hall_id: Option<HallId>, data: serde_json::Value) -> Self {
        Self {
            id: EventId::new(),
            event_type,
            hall_id,
            data,
            timestamp: now(),
        }
    }
}
