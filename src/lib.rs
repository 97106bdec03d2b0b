/// cutecats - headless client core for a paginated cat-image feed
///
/// Fetches paginated image records from the public cat-image catalog,
/// persists favorites and user uploads in a local SQLite store, and drives
/// a reactive feed state machine for a presentation layer to render.

pub mod config;
pub mod context;
pub mod db;
pub mod error;
pub mod feed;
pub mod logging;
pub mod remote;
pub mod repository;
pub mod store;
pub mod uploads;

pub use config::AppConfig;
pub use context::AppContext;
pub use db::models::UserUpload;
pub use error::{CatError, CatResult};
pub use feed::{FeedController, FeedSnapshot};
pub use remote::{Breed, CatApiClient, CatImage, ImageSource};
pub use repository::CatRepository;
pub use store::{FavoriteStore, UploadStore};
pub use uploads::UploadImporter;
