//! Seed configuration — the fixed hall layout used when no snapshot exists.

use crate::hall::Hall;
use crate::machine::{Countdown, Machine, MachineStatus, MachineType};

fn machine(
    id: &str,
    name: &str,
    kind: MachineType,
    status: MachineStatus,
    hall_id: &str,
) -> Machine {
    Machine::builder()
        .id(id)
        .name(name)
        .kind(kind)
        .status(status)
        .hall_id(hall_id)
        .build()
        .expect("seed machine is valid")
}

/// The default six-hall board.
#[must_use]
pub fn default_halls() -> Vec<Hall> {
    use MachineStatus::{Available, Done, Running};
    use MachineType::{Dryer, Washer};

    vec![
        Hall::builder()
            .id("a1")
            .name("Hall A1")
            .machine(machine("a1-w", "Washer", Washer, Available, "a1"))
            .machine(machine(
                "a1-d",
                "Dryer",
                Dryer,
                Done(Countdown::from_minutes(1)),
                "a1",
            ))
            .build()
            .expect("seed hall is valid"),
        Hall::builder()
            .id("e1")
            .name("Hall E1")
            .starred(true)
            .machine(machine("e1-w", "Washer", Washer, Available, "e1"))
            .machine(machine(
                "e1-d",
                "Dryer",
                Dryer,
                Running(Countdown::from_minutes(35)),
                "e1",
            ))
            .build()
            .expect("seed hall is valid"),
        Hall::builder()
            .id("c1")
            .name("Hall C1")
            .starred(true)
            .machine(machine("c1-w", "Washer", Washer, Available, "c1"))
            .machine(machine("c1-d", "Dryer", Dryer, Available, "c1"))
            .build()
            .expect("seed hall is valid"),
        Hall::builder()
            .id("b2")
            .name("Hall B2")
            .machine(machine(
                "b2-w",
                "Washer",
                Washer,
                Running(Countdown::from_minutes(3)),
                "b2",
            ))
            .machine(machine("b2-d", "Dryer", Dryer, Available, "b2"))
            .build()
            .expect("seed hall is valid"),
        Hall::builder()
            .id("b1")
            .name("Hall B1")
            .machine(machine(
                "b1-w",
                "Washer",
                Washer,
                Running(Countdown::from_minutes(23)),
                "b1",
            ))
            .machine(machine(
                "b1-d",
                "Dryer",
                Dryer,
                Done(Countdown::from_minutes(14)),
                "b1",
            ))
            .build()
            .expect("seed hall is valid"),
        Hall::builder()
            .id("d1")
            .name("Hall D1")
            .machine(machine(
                "d1-w",
                "Washer",
                Washer,
                Running(Countdown::from_minutes(18)),
                "d1",
            ))
            .machine(machine(
                "d1-d",
                "Dryer",
                Dryer,
                Running(Countdown::from_minutes(42)),
                "d1",
            ))
            .build()
            .expect("seed hall is valid"),
    ]
}

/// The hall focused by default when no selection has been made yet.
#[must_use]
pub fn default_expanded_hall() -> crate::id::HallId {
    crate::id::HallId::new("a1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_seed_six_valid_halls() {
        let halls = default_halls();
        assert_eq!(halls.len(), 6);
        for hall in &halls {
            hall.validate().unwrap();
            assert_eq!(hall.machines.len(), 2);
        }
    }

    #[test]
    fn should_star_exactly_two_halls() {
        let halls = default_halls();
        let starred: Vec<&str> = halls
            .iter()
            .filter(|hall| hall.is_starred)
            .map(|hall| hall.id.as_str())
            .collect();
        assert_eq!(starred, vec!["e1", "c1"]);
    }

    #[test]
    fn should_point_default_selection_at_seeded_hall() {
        let halls = default_halls();
        let expanded = default_expanded_hall();
        assert!(halls.iter().any(|hall| hall.id == expanded));
    }

    #[test]
    fn should_keep_machine_hall_ids_consistent() {
        for hall in default_halls() {
            for machine in &hall.machines {
                assert_eq!(machine.hall_id, hall.id);
            }
        }
    }
}
