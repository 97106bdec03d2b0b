/// Repository composing the remote client and the local store
use crate::{
    db::models::UserUpload,
    error::CatResult,
    remote::{CatImage, ImageSource},
    store::{FavoriteStore, UploadStore},
};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::watch;

/// Single access point for catalog pages, favorites, and uploads
///
/// Pure composition: holds no state of its own, forwards every call to the
/// underlying source or store exactly once.
pub struct CatRepository {
    source: Arc<dyn ImageSource>,
    favorites: Arc<FavoriteStore>,
    uploads: Arc<UploadStore>,
}

impl CatRepository {
    /// Create a new repository over the given source and stores
    pub fn new(
        source: Arc<dyn ImageSource>,
        favorites: Arc<FavoriteStore>,
        uploads: Arc<UploadStore>,
    ) -> Self {
        Self {
            source,
            favorites,
            uploads,
        }
    }

    /// Fetch a page of catalog records from the network
    pub async fn fetch_network_images(&self, page: u32, limit: u32) -> CatResult<Vec<CatImage>> {
        self.source.fetch_page(page, limit).await
    }

    /// Observe the full favorites list
    pub fn observe_favorites(&self) -> watch::Receiver<Vec<CatImage>> {
        self.favorites.observe()
    }

    /// Observe the set of favorited ids
    pub fn observe_favorite_ids(&self) -> watch::Receiver<HashSet<String>> {
        self.favorites.observe_ids()
    }

    /// Persist a record as a favorite
    pub async fn add_favorite(&self, cat: &CatImage) -> CatResult<()> {
        self.favorites.insert(cat).await
    }

    /// Remove a favorite by id
    pub async fn remove_favorite(&self, id: &str) -> CatResult<()> {
        self.favorites.delete(id).await
    }

    /// Observe all user uploads, newest first
    pub fn observe_uploads(&self) -> watch::Receiver<Vec<UserUpload>> {
        self.uploads.observe()
    }

    /// Persist an upload record for an already-copied file
    pub async fn save_upload(&self, file_path: &str, created_at: i64) -> CatResult<UserUpload> {
        self.uploads.insert(file_path, created_at).await
    }
}
