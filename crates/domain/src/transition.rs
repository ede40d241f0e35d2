//! Transition engine — one tick of countdown aging across the whole board.
//!
//! `tick` is pure and deterministic: it always advances exactly one tick
//! (one second of wall time in the reference schedule), and applying it N
//! times equals advancing the clock by N seconds. It never looks at the
//! favorite flag or the hall count; alert delivery is the caller's concern,
//! driven by the reported transitions.

use serde::{Deserialize, Serialize};

use crate::hall::Hall;
use crate::id::{HallId, MachineId};
use crate::machine::{Countdown, MachineStatus, MachineType};

/// Fixed pickup window a machine holds its load after the cycle ends.
pub const PICKUP_WINDOW_MINUTES: u32 = 15;
/// The same window on the fine clock.
pub const PICKUP_WINDOW_SECONDS: u32 = PICKUP_WINDOW_MINUTES * 60;

/// A machine that crossed `done → available` during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineAvailable {
    pub hall_id: HallId,
    pub hall_name: String,
    pub hall_starred: bool,
    pub machine_id: MachineId,
    pub machine_name: String,
    pub kind: MachineType,
}

/// Result of one tick: the replacement board plus the transitions that
/// freed a machine.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub halls: Vec<Hall>,
    pub newly_available: Vec<MachineAvailable>,
}

/// Advance every machine on the board by one tick.
///
/// Per machine:
/// - `Done` on the fine clock: seconds decrement by one (floored at zero),
///   minutes are re-derived; at zero the machine becomes `Available`.
/// - `Done` on the coarse clock: minutes decrement by one; at zero the
///   machine becomes `Available`.
/// - `Running` on either clock: the countdown decrements by one unit; when
///   it would run out the machine becomes `Done` holding the fixed pickup
///   window.
/// - `Available` and `Offline` machines are untouched.
#[must_use]
pub fn tick(halls: &[Hall]) -> TickOutcome {
    let mut newly_available = Vec::new();
    let halls = halls
        .iter()
        .map(|hall| {
            let mut next = hall.clone();
            for machine in &mut next.machines {
                let (status, freed) = tick_status(&machine.status);
                if freed {
                    newly_available.push(MachineAvailable {
                        hall_id: hall.id.clone(),
                        hall_name: hall.name.clone(),
                        hall_starred: hall.is_starred,
                        machine_id: machine.id.clone(),
                        machine_name: machine.name.clone(),
                        kind: machine.kind,
                    });
                }
                machine.status = status;
            }
            next
        })
        .collect();

    TickOutcome {
        halls,
        newly_available,
    }
}

/// Age a single status by one tick. Returns the replacement status and
/// whether the machine crossed `done → available`.
fn tick_status(status: &MachineStatus) -> (MachineStatus, bool) {
    match status {
        MachineStatus::Done(countdown) => match countdown.seconds() {
            Some(seconds) => {
                let remaining = seconds.saturating_sub(1);
                if remaining == 0 {
                    (MachineStatus::Available, true)
                } else {
                    (MachineStatus::Done(Countdown::from_seconds(remaining)), false)
                }
            }
            None => {
                let remaining = countdown.minutes().saturating_sub(1);
                if remaining == 0 {
                    (MachineStatus::Available, true)
                } else {
                    (MachineStatus::Done(Countdown::from_minutes(remaining)), false)
                }
            }
        },
        MachineStatus::Running(countdown) => match countdown.seconds() {
            Some(seconds) => {
                let remaining = seconds.saturating_sub(1);
                if remaining == 0 {
                    (
                        MachineStatus::Done(Countdown::from_seconds(PICKUP_WINDOW_SECONDS)),
                        false,
                    )
                } else {
                    (
                        MachineStatus::Running(Countdown::from_seconds(remaining)),
                        false,
                    )
                }
            }
            None => {
                let remaining = countdown.minutes().saturating_sub(1);
                if remaining == 0 {
                    (
                        MachineStatus::Done(Countdown::from_minutes(PICKUP_WINDOW_MINUTES)),
                        false,
                    )
                } else {
                    (
                        MachineStatus::Running(Countdown::from_minutes(remaining)),
                        false,
                    )
                }
            }
        },
        MachineStatus::Available => (MachineStatus::Available, false),
        MachineStatus::Offline => (MachineStatus::Offline, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{Machine, MachineType};

    fn board(status: MachineStatus, starred: bool) -> Vec<Hall> {
        vec![
            Hall::builder()
                .id("b1")
                .name("Hall B1")
                .starred(starred)
                .machine(
                    Machine::builder()
                        .id("b1-d")
                        .name("Dryer")
                        .kind(MachineType::Dryer)
                        .status(status)
                        .hall_id("b1")
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        ]
    }

    fn single_status(outcome: &TickOutcome) -> &MachineStatus {
        &outcome.halls[0].machines[0].status
    }

    #[test]
    fn should_free_done_machine_when_last_second_elapses() {
        let halls = board(MachineStatus::Done(Countdown::from_seconds(1)), false);
        let outcome = tick(&halls);
        assert_eq!(*single_status(&outcome), MachineStatus::Available);
        assert_eq!(outcome.newly_available.len(), 1);
        assert_eq!(outcome.newly_available[0].machine_id.as_str(), "b1-d");
    }

    #[test]
    fn should_decrement_seconds_and_rederive_minutes() {
        let halls = board(MachineStatus::Done(Countdown::from_seconds(61)), false);
        let outcome = tick(&halls);
        match single_status(&outcome) {
            MachineStatus::Done(countdown) => {
                assert_eq!(countdown.seconds(), Some(60));
                assert_eq!(countdown.minutes(), 1);
            }
            other => panic!("expected done, got {other}"),
        }
    }

    #[test]
    fn should_age_done_seconds_linearly_over_many_ticks() {
        let total = 125_u32;
        let steps = 60_u32;
        let mut halls = board(MachineStatus::Done(Countdown::from_seconds(total)), false);
        for _ in 0..steps {
            halls = tick(&halls).halls;
        }
        match &halls[0].machines[0].status {
            MachineStatus::Done(countdown) => {
                assert_eq!(countdown.seconds(), Some(total - steps));
                assert_eq!(countdown.minutes(), (total - steps).div_ceil(60));
            }
            other => panic!("expected done, got {other}"),
        }
    }

    #[test]
    fn should_free_minute_only_done_machine_after_one_tick() {
        let halls = board(MachineStatus::Done(Countdown::from_minutes(1)), false);
        let outcome = tick(&halls);
        assert_eq!(*single_status(&outcome), MachineStatus::Available);
        assert!(outcome.halls[0].machines[0].status.countdown().is_none());
    }

    #[test]
    fn should_finish_running_machine_into_pickup_window() {
        let halls = board(MachineStatus::Running(Countdown::from_minutes(1)), false);
        let outcome = tick(&halls);
        match single_status(&outcome) {
            MachineStatus::Done(countdown) => {
                assert_eq!(countdown.minutes(), PICKUP_WINDOW_MINUTES);
            }
            other => panic!("expected done, got {other}"),
        }
        assert!(outcome.newly_available.is_empty());
    }

    #[test]
    fn should_finish_fine_clock_running_machine_into_pickup_window() {
        let halls = board(MachineStatus::Running(Countdown::from_seconds(1)), false);
        let outcome = tick(&halls);
        match single_status(&outcome) {
            MachineStatus::Done(countdown) => {
                assert_eq!(countdown.seconds(), Some(PICKUP_WINDOW_SECONDS));
                assert_eq!(countdown.minutes(), PICKUP_WINDOW_MINUTES);
            }
            other => panic!("expected done, got {other}"),
        }
    }

    #[test]
    fn should_leave_available_and_offline_machines_untouched() {
        for status in [MachineStatus::Available, MachineStatus::Offline] {
            let halls = board(status.clone(), true);
            let outcome = tick(&halls);
            assert_eq!(*single_status(&outcome), status);
            assert!(outcome.newly_available.is_empty());
        }
    }

    #[test]
    fn should_report_transitions_regardless_of_star_state() {
        for starred in [false, true] {
            let halls = board(MachineStatus::Done(Countdown::from_minutes(1)), starred);
            let outcome = tick(&halls);
            assert_eq!(outcome.newly_available.len(), 1);
            assert_eq!(outcome.newly_available[0].hall_starred, starred);
        }
    }

    #[test]
    fn should_tick_every_hall_independently() {
        let mut halls = board(MachineStatus::Done(Countdown::from_seconds(2)), false);
        halls.extend(board(MachineStatus::Running(Countdown::from_minutes(5)), true));
        let outcome = tick(&halls);
        assert_eq!(outcome.halls.len(), 2);
        match &outcome.halls[1].machines[0].status {
            MachineStatus::Running(countdown) => assert_eq!(countdown.minutes(), 4),
            other => panic!("expected running, got {other}"),
        }
    }
}
