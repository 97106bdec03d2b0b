/// Uploads store
use crate::{db::models::UserUpload, error::CatResult};
use sqlx::{Row, SqlitePool};
use tokio::sync::watch;

/// Manager for the `user_uploads` table
pub struct UploadStore {
    db: SqlitePool,
    uploads_tx: watch::Sender<Vec<UserUpload>>,
}

impl UploadStore {
    /// Create a new uploads store, publishing the current persisted state
    pub async fn new(db: SqlitePool) -> CatResult<Self> {
        let uploads = Self::load(&db).await?;
        let (uploads_tx, _) = watch::channel(uploads);

        Ok(Self { db, uploads_tx })
    }

    /// Observe all uploads, newest first
    pub fn observe(&self) -> watch::Receiver<Vec<UserUpload>> {
        self.uploads_tx.subscribe()
    }

    /// Insert an upload record and return it with its assigned id
    pub async fn insert(&self, file_path: &str, created_at: i64) -> CatResult<UserUpload> {
        let row = sqlx::query(
            "INSERT INTO user_uploads (file_path, created_at)
             VALUES (?1, ?2)
             RETURNING id",
        )
        .bind(file_path)
        .bind(created_at)
        .fetch_one(&self.db)
        .await?;

        let id: i64 = row.try_get("id")?;

        self.refresh().await?;

        Ok(UserUpload {
            id,
            file_path: file_path.to_string(),
            created_at,
        })
    }

    async fn load(db: &SqlitePool) -> CatResult<Vec<UserUpload>> {
        let uploads = sqlx::query_as::<_, UserUpload>(
            "SELECT id, file_path, created_at FROM user_uploads
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(db)
        .await?;

        Ok(uploads)
    }

    async fn refresh(&self) -> CatResult<()> {
        let uploads = Self::load(&self.db).await?;
        self.uploads_tx.send_replace(uploads);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use tempfile::tempdir;

    async fn store() -> (tempfile::TempDir, UploadStore) {
        let dir = tempdir().unwrap();
        let pool = db::connect(&dir.path().join("cats.sqlite")).await.unwrap();
        let store = UploadStore::new(pool).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let (_dir, store) = store().await;

        let first = store.insert("/uploads/upload_1.jpg", 1_000).await.unwrap();
        let second = store.insert("/uploads/upload_2.jpg", 2_000).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn observe_emits_newest_first() {
        let (_dir, store) = store().await;
        let uploads = store.observe();

        store.insert("/uploads/upload_old.jpg", 1_000).await.unwrap();
        store.insert("/uploads/upload_new.jpg", 2_000).await.unwrap();

        let current = uploads.borrow().clone();
        assert_eq!(current.len(), 2);
        assert_eq!(current[0].file_path, "/uploads/upload_new.jpg");
        assert_eq!(current[1].file_path, "/uploads/upload_old.jpg");
    }
}
