//! Sensor-feed reading — the placeholder tuple for a future real feed.
//!
//! A reading reports one smart plug's name, address, current draw, and the
//! state its firmware believes the attached machine is in. Readings are
//! persisted and broadcast but never drive the transition engine.

use serde::{Deserialize, Serialize};

use crate::time::{Timestamp, now};

/// One `{name, ip, current, state}` tuple from a plug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlugReading {
    /// Plug display name (e.g. `"Washer 1"`).
    pub name: String,
    /// Plug network address.
    pub ip: String,
    /// Measured current draw, in amperes.
    pub current: f64,
    /// Free-form state label as reported by the plug firmware.
    pub state: String,
    /// When the reading was ingested.
    pub recorded_at: Timestamp,
}

impl PlugReading {
    /// Create a reading stamped with the current time.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ip: impl Into<String>,
        current: f64,
        state: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
            current,
            state: state.into(),
            recorded_at: now(),
        }
    }
}
