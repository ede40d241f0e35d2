//! # washboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for the laundry board
//!   (`/api/board`, `/api/halls/{id}/star`, `/api/readings`, …)
//! - Stream live board events over **Server-Sent Events**
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `washboard-app` (for port traits and services) and
//! `washboard-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
