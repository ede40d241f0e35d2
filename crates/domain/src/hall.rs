//! Hall — a physical location grouping one or more machines.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, WashboardError};
use crate::id::{HallId, MachineId};
use crate::machine::{Machine, MachineType};

/// A laundry hall: a named group of machines with a favorite flag.
///
/// A hall exclusively owns its machines; the order of the machine list is
/// not significant (washer-before-dryer is a view concern).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hall {
    pub id: HallId,
    pub name: String,
    pub is_starred: bool,
    pub machines: Vec<Machine>,
}

impl Hall {
    /// Create a builder for constructing a [`Hall`].
    #[must_use]
    pub fn builder() -> HallBuilder {
        HallBuilder::default()
    }

    /// Look up a machine by id.
    #[must_use]
    pub fn machine(&self, id: &MachineId) -> Option<&Machine> {
        self.machines.iter().find(|machine| machine.id == *id)
    }

    /// The first machine of the given kind, if any. The legacy layout has
    /// exactly one washer and one dryer per hall.
    #[must_use]
    pub fn machine_of(&self, kind: MachineType) -> Option<&Machine> {
        self.machines.iter().find(|machine| machine.kind == kind)
    }

    /// Count machines of the given kind that are currently available.
    #[must_use]
    pub fn available_count(&self, kind: MachineType) -> usize {
        self.machines
            .iter()
            .filter(|machine| machine.kind == kind && machine.status.is_available())
            .count()
    }

    /// Count all currently available machines.
    #[must_use]
    pub fn available_total(&self) -> usize {
        self.machines
            .iter()
            .filter(|machine| machine.status.is_available())
            .count()
    }

    /// The hall letter parsed from a `Hall <Letter><Number>` display name.
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        let suffix = self.name.strip_prefix("Hall ")?;
        suffix.chars().next().filter(char::is_ascii_uppercase)
    }

    /// The hall number parsed from a `Hall <Letter><Number>` display name.
    /// Used as the hall index by the legacy sort regime.
    #[must_use]
    pub fn number(&self) -> Option<u32> {
        let suffix = self.name.strip_prefix("Hall ")?;
        let digits: String = suffix.chars().skip(1).collect();
        digits.parse().ok()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`WashboardError::Validation`] when the id or name is empty,
    /// or when any owned machine fails validation.
    pub fn validate(&self) -> Result<(), WashboardError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        for machine in &self.machines {
            machine.validate()?;
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Hall`].
#[derive(Debug, Default)]
pub struct HallBuilder {
    id: Option<HallId>,
    name: Option<String>,
    is_starred: bool,
    machines: Vec<Machine>,
}

impl HallBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<HallId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn starred(mut self, is_starred: bool) -> Self {
        self.is_starred = is_starred;
        self
    }

    #[must_use]
    pub fn machine(mut self, machine: Machine) -> Self {
        self.machines.push(machine);
        self
    }

    /// Consume the builder, validate, and return a [`Hall`].
    ///
    /// # Errors
    ///
    /// Returns [`WashboardError::Validation`] if the id or name is missing
    /// or empty, or if any machine is invalid.
    pub fn build(self) -> Result<Hall, WashboardError> {
        let hall = Hall {
            id: self.id.unwrap_or_else(|| HallId::new("")),
            name: self.name.unwrap_or_default(),
            is_starred: self.is_starred,
            machines: self.machines,
        };
        hall.validate()?;
        Ok(hall)
    }
}
