//! Machine — a washer or dryer with an occupancy status and optional countdown.
//!
//! The countdown is part of the status variant, so "a countdown exists if and
//! only if the machine is running or finishing" holds by construction rather
//! than by convention.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, WashboardError};
use crate::id::{HallId, MachineId};

/// Kind of laundry machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineType {
    Washer,
    Dryer,
}

impl std::fmt::Display for MachineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Washer => f.write_str("washer"),
            Self::Dryer => f.write_str("dryer"),
        }
    }
}

/// Remaining time on a running or finishing machine.
///
/// Two granularities coexist: a minute counter (the coarse clock shown to
/// users) and an optional second counter (the fine clock used for smooth
/// progress). When the second counter is present the minute counter is
/// derived from it: `minutes == ceil(seconds / 60)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    seconds: Option<u32>,
}

impl Countdown {
    /// A minute-only countdown.
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Self {
        Self {
            minutes,
            seconds: None,
        }
    }

    /// A second-precision countdown; the minute counter is derived.
    #[must_use]
    pub fn from_seconds(seconds: u32) -> Self {
        Self {
            minutes: seconds.div_ceil(60),
            seconds: Some(seconds),
        }
    }

    /// Remaining whole minutes (rounded up when second-precision).
    #[must_use]
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Remaining seconds, if this countdown carries the fine clock.
    #[must_use]
    pub fn seconds(&self) -> Option<u32> {
        self.seconds
    }

    /// Remaining time in seconds on whichever clock is authoritative.
    #[must_use]
    pub fn as_seconds(&self) -> u32 {
        self.seconds.unwrap_or(self.minutes * 60)
    }

    /// Whether the countdown has run out.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        match self.seconds {
            Some(seconds) => seconds == 0,
            None => self.minutes == 0,
        }
    }
}

/// Discrete occupancy status of a machine.
///
/// The two source vocabularies map onto this enum as follows:
///
/// | legacy label | unified variant | note                                  |
/// |--------------|-----------------|---------------------------------------|
/// | `available`  | `Available`     |                                       |
/// | `occupied`   | `Done`          | load finished, waiting for pickup     |
/// | `running`    | `Running`       |                                       |
/// | `offline`    | `Offline`       |                                       |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "countdown", rename_all = "lowercase")]
pub enum MachineStatus {
    /// Free to use; no countdown.
    Available,
    /// Mid-cycle; counts down toward [`Done`](Self::Done).
    Running(Countdown),
    /// Cycle finished; counts down the pickup window toward
    /// [`Available`](Self::Available).
    Done(Countdown),
    /// Unreachable or out of order; no countdown.
    Offline,
}

impl MachineStatus {
    /// Whether the machine can be used right now.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Borrow the countdown, when one exists.
    #[must_use]
    pub fn countdown(&self) -> Option<&Countdown> {
        match self {
            Self::Running(countdown) | Self::Done(countdown) => Some(countdown),
            Self::Available | Self::Offline => None,
        }
    }

    /// Ranking used by the legacy sort regime: `Available(0) < Done(1) <
    /// Running(2) < Offline(3)`.
    #[must_use]
    pub fn priority(&self) -> u8 {
        match self {
            Self::Available => 0,
            Self::Done(_) => 1,
            Self::Running(_) => 2,
            Self::Offline => 3,
        }
    }

    /// The label this status carries in the legacy vocabulary.
    #[must_use]
    pub fn legacy_label(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Done(_) => "occupied",
            Self::Running(_) => "running",
            Self::Offline => "offline",
        }
    }
}

impl std::fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => f.write_str("available"),
            Self::Running(_) => f.write_str("running"),
            Self::Done(_) => f.write_str("done"),
            Self::Offline => f.write_str("offline"),
        }
    }
}

/// A single washer or dryer inside a hall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: MachineId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MachineType,
    #[serde(flatten)]
    pub status: MachineStatus,
    pub hall_id: HallId,
}

impl Machine {
    /// Create a builder for constructing a [`Machine`].
    #[must_use]
    pub fn builder() -> MachineBuilder {
        MachineBuilder::default()
    }

    /// Remaining whole minutes, when the machine carries a countdown.
    #[must_use]
    pub fn remaining_minutes(&self) -> Option<u32> {
        self.status.countdown().map(Countdown::minutes)
    }

    /// Remaining seconds on the fine clock, when present.
    #[must_use]
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.status.countdown().and_then(Countdown::seconds)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`WashboardError::Validation`] when the id or name is empty.
    pub fn validate(&self) -> Result<(), WashboardError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Machine`].
#[derive(Debug, Default)]
pub struct MachineBuilder {
    id: Option<MachineId>,
    name: Option<String>,
    kind: Option<MachineType>,
    status: Option<MachineStatus>,
    hall_id: Option<HallId>,
}

impl MachineBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<MachineId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: MachineType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn status(mut self, status: MachineStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn hall_id(mut self, hall_id: impl Into<HallId>) -> Self {
        self.hall_id = Some(hall_id.into());
        self
    }

    /// Consume the builder, validate, and return a [`Machine`].
    ///
    /// # Errors
    ///
    /// Returns [`WashboardError::Validation`] if the id or name is missing
    /// or empty.
    pub fn build(self) -> Result<Machine, WashboardError> {
        let machine = Machine {
            id: self.id.unwrap_or_else(|| MachineId::new("")),
            name: self.name.unwrap_or_default(),
            kind: self.kind.unwrap_or(MachineType::Washer),
            status: self.status.unwrap_or(MachineStatus::Available),
            hall_id: self.hall_id.unwrap_or_else(|| HallId::new("")),
        };
        machine.validate()?;
        Ok(machine)
    }
}
