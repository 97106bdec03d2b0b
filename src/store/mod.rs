/// Local persistent store
///
/// Two managers over a shared SQLite pool: favorites and user uploads.
/// Every mutation republishes the full table contents through a watch
/// channel, so any number of observers always see the current state.

pub mod favorites;
pub mod uploads;

pub use favorites::FavoriteStore;
pub use uploads::UploadStore;
