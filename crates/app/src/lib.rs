//! # washboard-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound):
//!   - `BoardRepository` — load/save the full hall snapshot
//!   - `ReadingRepository` — persist and list sensor-feed readings
//!   - `Notifier` — authorization prompt + user-visible alerts
//!   - `EventPublisher` — fan events out to subscribers
//! - Provide the **board service**: the single owner of the hall snapshot,
//!   executing every mutation (tick, star toggle, refresh, sort cycle, hall
//!   select) to completion one at a time
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Provide the **scheduler** loop that drives the tick at a fixed period
//!
//! ## Dependency rule
//! Depends on `washboard-domain` only (plus `tokio::sync`/`tokio::time` for
//! channels and the scheduler). Never imports adapter crates; adapters
//! depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod scheduler;
pub mod services;
