//! # washboard-domain
//!
//! Pure domain model for the washboard laundry-hall tracker.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Machines** (washers/dryers with an occupancy status and an
//!   optional countdown) and **Halls** (groups of machines with a favorite
//!   flag)
//! - The **transition engine** — one tick of countdown aging and the
//!   resulting status changes
//! - The **sort/view selector** — both hall-ordering regimes and the
//!   focused-hall rule
//! - The **refresh policy** — how a single machine advances on a simulated
//!   external update
//! - Define **Events** (state-change records) and **Readings** (the
//!   sensor-feed placeholder tuple)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod event;
pub mod hall;
pub mod machine;
pub mod reading;
pub mod refresh;
pub mod seed;
pub mod sort;
pub mod transition;
pub mod view;
