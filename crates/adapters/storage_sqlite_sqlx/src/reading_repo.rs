//! `SQLite` implementation of [`ReadingRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use washboard_app::ports::ReadingRepository;
use washboard_domain::error::WashboardError;
use washboard_domain::reading::PlugReading;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(PlugReading);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let name: String = row.try_get("name")?;
        let ip: String = row.try_get("ip")?;
        let current: f64 = row.try_get("current")?;
        let state: String = row.try_get("state")?;
        let recorded_at_str: String = row.try_get("recorded_at")?;

        let recorded_at = chrono::DateTime::parse_from_rfc3339(&recorded_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(PlugReading {
            name,
            ip,
            current,
            state,
            recorded_at,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO plug_readings (name, ip, current, state, recorded_at)
    VALUES (?, ?, ?, ?, ?)
";

// One row per plug name: its most recent reading.
const SELECT_LATEST: &str = r"
    SELECT name, ip, current, state, MAX(recorded_at) AS recorded_at
    FROM plug_readings
    GROUP BY name
    ORDER BY name
";

/// `SQLite`-backed reading repository.
pub struct SqliteReadingRepository {
    pool: SqlitePool,
}

impl SqliteReadingRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReadingRepository for SqliteReadingRepository {
    async fn insert(&self, reading: PlugReading) -> Result<PlugReading, WashboardError> {
        sqlx::query(INSERT)
            .bind(&reading.name)
            .bind(&reading.ip)
            .bind(reading.current)
            .bind(&reading.state)
            .bind(reading.recorded_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(reading)
    }

    async fn latest(&self) -> Result<Vec<PlugReading>, WashboardError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_LATEST)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteReadingRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteReadingRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_readings() {
        let repo = setup().await;
        let latest = repo.latest().await.unwrap();
        assert!(latest.is_empty());
    }

    #[tokio::test]
    async fn should_insert_and_list_reading() {
        let repo = setup().await;
        let reading = PlugReading::new("Washer 1", "192.168.1.10", 5.2, "running");

        repo.insert(reading.clone()).await.unwrap();

        let latest = repo.latest().await.unwrap();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].name, "Washer 1");
        assert_eq!(latest[0].ip, "192.168.1.10");
        assert_eq!(latest[0].state, "running");
    }

    #[tokio::test]
    async fn should_keep_only_most_recent_reading_per_plug() {
        let repo = setup().await;

        let mut first = PlugReading::new("Washer 1", "192.168.1.10", 5.2, "running");
        first.recorded_at = chrono::DateTime::parse_from_rfc3339("2026-01-01T10:00:00Z")
            .unwrap()
            .to_utc();
        let mut second = PlugReading::new("Washer 1", "192.168.1.10", 0.1, "available");
        second.recorded_at = chrono::DateTime::parse_from_rfc3339("2026-01-01T11:00:00Z")
            .unwrap()
            .to_utc();

        repo.insert(first).await.unwrap();
        repo.insert(second).await.unwrap();

        let latest = repo.latest().await.unwrap();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].state, "available");
    }

    #[tokio::test]
    async fn should_report_one_row_per_plug() {
        let repo = setup().await;
        repo.insert(PlugReading::new("Dryer 1", "192.168.1.11", 3.0, "running"))
            .await
            .unwrap();
        repo.insert(PlugReading::new("Washer 1", "192.168.1.10", 0.1, "available"))
            .await
            .unwrap();

        let latest = repo.latest().await.unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].name, "Dryer 1");
        assert_eq!(latest[1].name, "Washer 1");
    }
}
