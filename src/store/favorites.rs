/// Favorites store
use crate::{
    db::models::FavoriteRow,
    error::CatResult,
    remote::dto::CatImage,
};
use sqlx::SqlitePool;
use std::collections::HashSet;
use tokio::sync::watch;

/// Manager for the `favorite_cats` table
///
/// The database is the single source of truth. Observers subscribe to the
/// full favorites list or to the derived id set; both views are refreshed
/// from the same reload, so they cannot diverge.
pub struct FavoriteStore {
    db: SqlitePool,
    favorites_tx: watch::Sender<Vec<CatImage>>,
    ids_tx: watch::Sender<HashSet<String>>,
}

impl FavoriteStore {
    /// Create a new favorites store, publishing the current persisted state
    pub async fn new(db: SqlitePool) -> CatResult<Self> {
        let favorites = Self::load(&db).await?;
        let ids = favorites.iter().map(|cat| cat.id.clone()).collect();

        let (favorites_tx, _) = watch::channel(favorites);
        let (ids_tx, _) = watch::channel(ids);

        Ok(Self {
            db,
            favorites_tx,
            ids_tx,
        })
    }

    /// Observe the full favorites list, newest id first
    ///
    /// The receiver holds the current list immediately and is notified on
    /// every subsequent change.
    pub fn observe(&self) -> watch::Receiver<Vec<CatImage>> {
        self.favorites_tx.subscribe()
    }

    /// Observe the set of favorited ids, for O(1) membership checks
    pub fn observe_ids(&self) -> watch::Receiver<HashSet<String>> {
        self.ids_tx.subscribe()
    }

    /// Insert a favorite; an existing record with the same id is replaced
    pub async fn insert(&self, image: &CatImage) -> CatResult<()> {
        let row = FavoriteRow::from_image(image)?;

        sqlx::query(
            "INSERT OR REPLACE INTO favorite_cats (id, url, breeds, width, height)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&row.id)
        .bind(&row.url)
        .bind(&row.breeds)
        .bind(row.width)
        .bind(row.height)
        .execute(&self.db)
        .await?;

        self.refresh().await
    }

    /// Delete a favorite by id; a no-op when the id is absent
    pub async fn delete(&self, id: &str) -> CatResult<()> {
        sqlx::query("DELETE FROM favorite_cats WHERE id = ?1")
            .bind(id)
            .execute(&self.db)
            .await?;

        self.refresh().await
    }

    async fn load(db: &SqlitePool) -> CatResult<Vec<CatImage>> {
        let rows: Vec<FavoriteRow> = sqlx::query_as(
            "SELECT id, url, breeds, width, height FROM favorite_cats ORDER BY id DESC",
        )
        .fetch_all(db)
        .await?;

        let mut images = Vec::with_capacity(rows.len());
        for row in rows {
            images.push(row.into_image()?);
        }
        Ok(images)
    }

    /// Reload the table and publish to both channels
    async fn refresh(&self) -> CatResult<()> {
        let favorites = Self::load(&self.db).await?;
        let ids: HashSet<String> = favorites.iter().map(|cat| cat.id.clone()).collect();

        self.favorites_tx.send_replace(favorites);
        self.ids_tx.send_replace(ids);

        Ok(())
    }
}
