//! Sort selector — hall ordering for both regimes found in the wild.
//!
//! The modern regime orders halls by name or by available-machine counts;
//! the legacy regime orders by hall index or by one machine's status
//! priority, and additionally orders the machines inside each hall. Both
//! share the primary rule: starred halls always come first. Sorting is pure
//! and stable, so re-applying it with no state change is a no-op.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::hall::Hall;
use crate::machine::{Machine, MachineType};

/// Hall ordering used by the modern surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Hall display name, lexicographic.
    Name,
    /// Total available machines, descending; ties by name.
    AvailableFirst,
    /// Available washers, descending; ties by name.
    WasherFirst,
    /// Available dryers, descending; ties by name.
    DryerFirst,
}

impl SortMode {
    /// The next mode in the fixed cycle (wrapping).
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::Name => Self::AvailableFirst,
            Self::AvailableFirst => Self::WasherFirst,
            Self::WasherFirst => Self::DryerFirst,
            Self::DryerFirst => Self::Name,
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => f.write_str("default"),
            Self::AvailableFirst => f.write_str("available-first"),
            Self::WasherFirst => f.write_str("washer-first"),
            Self::DryerFirst => f.write_str("dryer-first"),
        }
    }
}

/// Hall ordering used by the legacy surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacySortKey {
    /// Numeric hall index.
    Hall,
    /// The hall's washer, by status priority then remaining time.
    Washer,
    /// The hall's dryer, by status priority then remaining time.
    Dryer,
}

impl LegacySortKey {
    /// The next key in the fixed cycle (wrapping).
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::Hall => Self::Washer,
            Self::Washer => Self::Dryer,
            Self::Dryer => Self::Hall,
        }
    }
}

impl std::fmt::Display for LegacySortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hall => f.write_str("hall"),
            Self::Washer => f.write_str("washer"),
            Self::Dryer => f.write_str("dryer"),
        }
    }
}

/// One interface over both sort regimes, selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "regime", content = "mode")]
pub enum SortRegime {
    Modern(SortMode),
    Legacy(LegacySortKey),
}

impl SortRegime {
    /// Cycle the current mode within its regime. Pure: the next mode is a
    /// function of the current one, with no hidden counter.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::Modern(mode) => Self::Modern(mode.cycle()),
            Self::Legacy(key) => Self::Legacy(key.cycle()),
        }
    }
}

impl std::fmt::Display for SortRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Modern(mode) => mode.fmt(f),
            Self::Legacy(key) => key.fmt(f),
        }
    }
}

/// Order halls in place under the given regime.
///
/// Starred halls sort before unstarred halls in every mode; the secondary
/// key depends on the mode. Under the legacy regime each hall's machine list
/// is also reordered by status priority then remaining time. The underlying
/// sort is stable, so equal halls keep their input order and re-sorting
/// sorted input changes nothing.
pub fn sort_halls(halls: &mut [Hall], regime: SortRegime) {
    halls.sort_by(|a, b| {
        b.is_starred
            .cmp(&a.is_starred)
            .then_with(|| secondary(a, b, regime))
    });
    if matches!(regime, SortRegime::Legacy(_)) {
        for hall in halls.iter_mut() {
            machine_order(&mut hall.machines);
        }
    }
}

fn secondary(a: &Hall, b: &Hall, regime: SortRegime) -> Ordering {
    match regime {
        SortRegime::Modern(SortMode::Name) => a.name.cmp(&b.name),
        SortRegime::Modern(SortMode::AvailableFirst) => b
            .available_total()
            .cmp(&a.available_total())
            .then_with(|| a.name.cmp(&b.name)),
        SortRegime::Modern(SortMode::WasherFirst) => b
            .available_count(MachineType::Washer)
            .cmp(&a.available_count(MachineType::Washer))
            .then_with(|| a.name.cmp(&b.name)),
        SortRegime::Modern(SortMode::DryerFirst) => b
            .available_count(MachineType::Dryer)
            .cmp(&a.available_count(MachineType::Dryer))
            .then_with(|| a.name.cmp(&b.name)),
        SortRegime::Legacy(LegacySortKey::Hall) => {
            a.number().unwrap_or(u32::MAX).cmp(&b.number().unwrap_or(u32::MAX))
        }
        SortRegime::Legacy(LegacySortKey::Washer) => {
            legacy_rank(a, MachineType::Washer).cmp(&legacy_rank(b, MachineType::Washer))
        }
        SortRegime::Legacy(LegacySortKey::Dryer) => {
            legacy_rank(a, MachineType::Dryer).cmp(&legacy_rank(b, MachineType::Dryer))
        }
    }
}

/// Legacy rank of a hall keyed on one machine kind: status priority first
/// (`available < occupied < running < offline`), then ascending remaining
/// time. Halls missing a machine of the kind sort last.
fn legacy_rank(hall: &Hall, kind: MachineType) -> (u8, u32) {
    hall.machine_of(kind).map_or((u8::MAX, u32::MAX), |machine| {
        (
            machine.status.priority(),
            machine
                .status
                .countdown()
                .map_or(0, crate::machine::Countdown::as_seconds),
        )
    })
}

/// Legacy per-machine ordering within a hall: status priority, then
/// ascending remaining time.
pub fn machine_order(machines: &mut [Machine]) {
    machines.sort_by(|a, b| {
        a.status
            .priority()
            .cmp(&b.status.priority())
            .then_with(|| {
                let left = a.status.countdown().map_or(0, |c| c.as_seconds());
                let right = b.status.countdown().map_or(0, |c| c.as_seconds());
                left.cmp(&right)
            })
    });
}
