//! `SQLite` implementation of [`BoardRepository`].
//!
//! The whole hall collection is stored as one JSON document under a fixed
//! key. Save replaces the document atomically; load returns `None` for a
//! missing row and an error for a row that no longer parses, leaving the
//! caller to reseed.

use sqlx::{Row, SqlitePool};

use washboard_app::ports::BoardRepository;
use washboard_domain::error::WashboardError;
use washboard_domain::hall::Hall;

use crate::error::StorageError;

const SNAPSHOT_KEY: &str = "board";

const UPSERT: &str = r"
    INSERT INTO board_snapshots (key, halls, updated_at)
    VALUES (?, ?, ?)
    ON CONFLICT(key) DO UPDATE SET halls = excluded.halls, updated_at = excluded.updated_at
";

const SELECT: &str = "SELECT halls FROM board_snapshots WHERE key = ?";

/// `SQLite`-backed board snapshot repository.
pub struct SqliteBoardRepository {
    pool: SqlitePool,
}

impl SqliteBoardRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl BoardRepository for SqliteBoardRepository {
    async fn load(&self) -> Result<Option<Vec<Hall>>, WashboardError> {
        let row = sqlx::query(SELECT)
            .bind(SNAPSHOT_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let halls_json: String = row.try_get("halls").map_err(StorageError::from)?;
        let halls: Vec<Hall> =
            serde_json::from_str(&halls_json).map_err(StorageError::from)?;
        Ok(Some(halls))
    }

    async fn save(&self, halls: &[Hall]) -> Result<(), WashboardError> {
        let halls_json = serde_json::to_string(halls).map_err(StorageError::from)?;

        sqlx::query(UPSERT)
            .bind(SNAPSHOT_KEY)
            .bind(&halls_json)
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
