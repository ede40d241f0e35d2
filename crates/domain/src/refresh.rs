//! Refresh policy — how one machine advances on a simulated external update.
//!
//! The random selection of hall and machine lives in the application layer
//! (where an RNG can be injected); this module is only the deterministic
//! policy table applied to the chosen machine.

use crate::machine::{Countdown, MachineStatus};
use crate::transition::PICKUP_WINDOW_SECONDS;

/// Cycle length assigned when a refresh starts an idle machine. The policy
/// table leaves this open; a countdown is required for a running machine.
pub const DEFAULT_CYCLE_MINUTES: u32 = 45;

/// Outcome of the 80/20 draw taken when an available machine is refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleRoll {
    /// 80%: the machine starts a cycle.
    Start,
    /// 20%: the machine drops off the network.
    Drop,
}

/// Advance a single machine's status per the refresh policy table.
///
/// | current            | next                                   |
/// |--------------------|----------------------------------------|
/// | running            | done, full pickup window               |
/// | done, remaining    | unchanged                              |
/// | done, expired      | available                              |
/// | available          | running (80%) / offline (20%)          |
/// | offline            | available                              |
#[must_use]
pub fn advance(status: &MachineStatus, idle_roll: IdleRoll) -> MachineStatus {
    match status {
        MachineStatus::Running(_) => {
            MachineStatus::Done(Countdown::from_seconds(PICKUP_WINDOW_SECONDS))
        }
        MachineStatus::Done(countdown) => {
            if countdown.is_expired() {
                MachineStatus::Available
            } else {
                MachineStatus::Done(*countdown)
            }
        }
        MachineStatus::Available => match idle_roll {
            IdleRoll::Start => {
                MachineStatus::Running(Countdown::from_minutes(DEFAULT_CYCLE_MINUTES))
            }
            IdleRoll::Drop => MachineStatus::Offline,
        },
        MachineStatus::Offline => MachineStatus::Available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_move_running_machine_into_full_pickup_window() {
        let next = advance(
            &MachineStatus::Running(Countdown::from_minutes(23)),
            IdleRoll::Start,
        );
        match next {
            MachineStatus::Done(countdown) => {
                assert_eq!(countdown.minutes(), 15);
                assert_eq!(countdown.seconds(), Some(900));
            }
            other => panic!("expected done, got {other}"),
        }
    }

    #[test]
    fn should_leave_done_machine_with_time_left_unchanged() {
        let status = MachineStatus::Done(Countdown::from_minutes(14));
        assert_eq!(advance(&status, IdleRoll::Start), status);
    }

    #[test]
    fn should_free_done_machine_with_expired_countdown() {
        let status = MachineStatus::Done(Countdown::from_seconds(0));
        assert_eq!(advance(&status, IdleRoll::Drop), MachineStatus::Available);
    }

    #[test]
    fn should_start_idle_machine_on_start_roll() {
        let next = advance(&MachineStatus::Available, IdleRoll::Start);
        match next {
            MachineStatus::Running(countdown) => {
                assert_eq!(countdown.minutes(), DEFAULT_CYCLE_MINUTES);
            }
            other => panic!("expected running, got {other}"),
        }
    }

    #[test]
    fn should_drop_idle_machine_on_drop_roll() {
        assert_eq!(
            advance(&MachineStatus::Available, IdleRoll::Drop),
            MachineStatus::Offline
        );
    }

    #[test]
    fn should_bring_offline_machine_back_as_available() {
        assert_eq!(
            advance(&MachineStatus::Offline, IdleRoll::Start),
            MachineStatus::Available
        );
        assert_eq!(
            advance(&MachineStatus::Offline, IdleRoll::Drop),
            MachineStatus::Available
        );
    }
}
