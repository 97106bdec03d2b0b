/// Application context and dependency construction
use crate::{
    config::AppConfig,
    db,
    error::CatResult,
    feed::FeedController,
    remote::{CatApiClient, ImageSource},
    repository::CatRepository,
    store::{FavoriteStore, UploadStore},
    uploads::UploadImporter,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::info;

/// Application context holding all shared services
///
/// Everything is constructed once, here, and passed down explicitly; there
/// are no process-wide singletons.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub db: SqlitePool,
    pub repository: Arc<CatRepository>,
    pub feed: FeedController,
}

impl AppContext {
    /// Create a new application context from configuration
    pub async fn new(config: AppConfig) -> CatResult<Self> {
        config.validate()?;

        Self::ensure_directories(&config).await?;

        let db = db::connect(&config.storage.database).await?;
        info!(database = %config.storage.database.display(), "database ready");

        let source: Arc<dyn ImageSource> = Arc::new(CatApiClient::new(&config.api)?);
        let favorites = Arc::new(FavoriteStore::new(db.clone()).await?);
        let uploads = Arc::new(UploadStore::new(db.clone()).await?);
        let repository = Arc::new(CatRepository::new(source, favorites, uploads));

        let importer = UploadImporter::new(config.storage.uploads_directory.clone());
        let feed = FeedController::new(Arc::clone(&repository), importer, config.api.page_size);

        Ok(Self {
            config: Arc::new(config),
            db,
            repository,
            feed,
        })
    }

    /// Ensure required directories exist
    async fn ensure_directories(config: &AppConfig) -> CatResult<()> {
        let dirs = [
            &config.storage.data_directory,
            &config.storage.uploads_directory,
        ];

        for dir in dirs {
            if !dir.exists() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }

        Ok(())
    }
}
