/// Database layer for the cutecats core
///
/// Manages the SQLite connection pool and schema migrations for the
/// favorites and uploads tables.

pub mod models;

use crate::error::{CatError, CatResult};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool};
use std::path::Path;
use std::time::Duration;

/// Create a SQLite connection pool and bring the schema up to date
pub async fn connect(path: &Path) -> CatResult<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5)),
    )
    .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run migrations, embedded at compile time from ./migrations
pub async fn run_migrations(pool: &SqlitePool) -> CatResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| CatError::Internal(format!("migration failed: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn connect_creates_database_and_schema() {
        let dir = tempdir().unwrap();
        let pool = connect(&dir.path().join("cats.sqlite")).await.unwrap();

        // Both tables exist after migration
        sqlx::query("SELECT id FROM favorite_cats LIMIT 1")
            .fetch_optional(&pool)
            .await
            .unwrap();
        sqlx::query("SELECT id FROM user_uploads LIMIT 1")
            .fetch_optional(&pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn connect_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("cats.sqlite");
        connect(&nested).await.unwrap();
        assert!(nested.exists());
    }
}
