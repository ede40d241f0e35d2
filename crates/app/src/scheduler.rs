//! Periodic tick driver.
//!
//! A single task advances the board on a fixed cadence. Each tick runs to
//! completion before the next one is awaited, so ticks never overlap even
//! when one of them runs long.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::ports::{BoardRepository, EventPublisher, Notifier};
use crate::services::board_service::BoardService;

/// Drive the board clock forever, one tick per `period`.
///
/// Missed deadlines are not replayed: if a tick overruns, the next one is
/// simply rescheduled a full period later.
pub async fn run<R, N, P>(service: Arc<BoardService<R, N, P>>, period: Duration)
where
    R: BoardRepository,
    N: Notifier,
    P: EventPublisher,
{
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // the first interval tick fires immediately; skip it so the board ages
    // only after a full period has elapsed
    interval.tick().await;

    tracing::info!(period_secs = period.as_secs_f64(), "board clock started");
    loop {
        interval.tick().await;
        service.tick().await;
    }
}
