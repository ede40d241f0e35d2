//! Storage port — persistence traits for the board snapshot and readings.
//!
//! The board is persisted as one whole snapshot under a fixed key: every
//! mutation writes the full hall collection back, so load/save is the
//! entire contract. Readings are append-only.

use std::future::Future;

use washboard_domain::error::WashboardError;
use washboard_domain::hall::Hall;
use washboard_domain::reading::PlugReading;

/// Load/save the full hall collection.
pub trait BoardRepository {
    /// Load the stored snapshot, or `None` when nothing (usable) is stored.
    fn load(&self) -> impl Future<Output = Result<Option<Vec<Hall>>, WashboardError>> + Send;

    /// Replace the stored snapshot with the given hall collection.
    fn save(&self, halls: &[Hall]) -> impl Future<Output = Result<(), WashboardError>> + Send;
}

/// Persist and query sensor-feed readings.
pub trait ReadingRepository {
    /// Append a reading.
    fn insert(
        &self,
        reading: PlugReading,
    ) -> impl Future<Output = Result<PlugReading, WashboardError>> + Send;

    /// The latest known reading for each plug name.
    fn latest(&self) -> impl Future<Output = Result<Vec<PlugReading>, WashboardError>> + Send;
}

impl<T: BoardRepository + Send + Sync> BoardRepository for std::sync::Arc<T> {
    fn load(&self) -> impl Future<Output = Result<Option<Vec<Hall>>, WashboardError>> + Send {
        (**self).load()
    }

    fn save(&self, halls: &[Hall]) -> impl Future<Output = Result<(), WashboardError>> + Send {
        (**self).save(halls)
    }
}

impl<T: ReadingRepository + Send + Sync> ReadingRepository for std::sync::Arc<T> {
    fn insert(
        &self,
        reading: PlugReading,
    ) -> impl Future<Output = Result<PlugReading, WashboardError>> + Send {
        (**self).insert(reading)
    }

    fn latest(&self) -> impl Future<Output = Result<Vec<PlugReading>, WashboardError>> + Send {
        (**self).latest()
    }
}
