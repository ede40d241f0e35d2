//! # washboard-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `washboard-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `washboard-app` (for port traits) and `washboard-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod board_repo;
pub mod error;
pub mod pool;
pub mod reading_repo;
