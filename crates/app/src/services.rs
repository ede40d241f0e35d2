//! Application services — the use-case layer over the ports.

pub mod alert_gate;
pub mod board_service;
