/// Feed controller implementation
use crate::{
    db::models::UserUpload,
    error::CatResult,
    feed::snapshot::FeedSnapshot,
    remote::CatImage,
    repository::CatRepository,
    uploads::UploadImporter,
};
use chrono::Utc;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Mutable controller state, serialized behind one lock
#[derive(Default)]
struct FeedState {
    /// Accumulated, unfiltered list of every fetched record, append-only
    master: Vec<CatImage>,
    /// Next page index to request
    cursor: u32,
    end_reached: bool,
    error: Option<String>,
    is_loading_initial: bool,
    is_loading_more: bool,
    is_search_visible: bool,
    search_query: String,
    in_flight: bool,
    fetch: Option<JoinHandle<()>>,
}

impl FeedState {
    /// Displayed list: master-list records whose breed names contain the
    /// query, case-insensitively. A blank query shows everything.
    fn filtered(&self) -> Vec<CatImage> {
        let query = self.search_query.trim();
        if query.is_empty() {
            return self.master.clone();
        }

        let needle = query.to_lowercase();
        self.master
            .iter()
            .filter(|cat| {
                cat.breeds
                    .iter()
                    .any(|breed| breed.name.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            images: self.filtered(),
            is_loading_initial: self.is_loading_initial,
            is_loading_more: self.is_loading_more,
            error: self.error.clone(),
            end_reached: self.end_reached,
            is_search_visible: self.is_search_visible,
            search_query: self.search_query.clone(),
        }
    }
}

struct FeedInner {
    repository: Arc<CatRepository>,
    importer: UploadImporter,
    page_size: u32,
    state: Mutex<FeedState>,
    snapshot_tx: watch::Sender<FeedSnapshot>,
    favorite_ids: watch::Receiver<HashSet<String>>,
}

impl FeedInner {
    fn publish(&self, state: &FeedState) {
        self.snapshot_tx.send_replace(state.snapshot());
    }

    async fn report_error(&self, message: String) {
        let mut state = self.state.lock().await;
        state.error = Some(message);
        self.publish(&state);
    }

    /// Rejoin the serialized state context with a completed fetch
    async fn apply_fetch(&self, page: u32, result: CatResult<Vec<CatImage>>) {
        let mut state = self.state.lock().await;
        state.in_flight = false;
        state.is_loading_initial = false;
        state.is_loading_more = false;

        match result {
            Ok(images) if images.is_empty() => {
                debug!(page, "feed exhausted");
                state.end_reached = true;
            }
            Ok(images) => {
                debug!(page, count = images.len(), "page applied");
                state.master.extend(images);
                state.cursor = page + 1;
            }
            Err(e) => {
                warn!(page, error = %e, "page fetch failed");
                state.error = Some(format!("Failed to load cats: {}", e));
            }
        }

        self.publish(&state);
    }
}

/// Drives the image feed: pagination, favorites, search, uploads
///
/// All state mutations are serialized through one async lock, and every
/// change is published as an immutable [`FeedSnapshot`]. Cheap to clone;
/// clones share the same state.
#[derive(Clone)]
pub struct FeedController {
    inner: Arc<FeedInner>,
}

impl FeedController {
    /// Create a controller and start loading the first page
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(repository: Arc<CatRepository>, importer: UploadImporter, page_size: u32) -> Self {
        let (snapshot_tx, _) = watch::channel(FeedSnapshot::default());
        let favorite_ids = repository.observe_favorite_ids();

        let controller = Self {
            inner: Arc::new(FeedInner {
                repository,
                importer,
                page_size,
                state: Mutex::new(FeedState::default()),
                snapshot_tx,
                favorite_ids,
            }),
        };

        let initial = controller.clone();
        tokio::spawn(async move {
            initial.load_next_page().await;
        });

        controller
    }

    /// Observe feed snapshots
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.inner.snapshot_tx.subscribe()
    }

    /// Observe the full favorites list
    pub fn favorites(&self) -> watch::Receiver<Vec<CatImage>> {
        self.inner.repository.observe_favorites()
    }

    /// Observe the set of favorited ids
    pub fn favorite_ids(&self) -> watch::Receiver<HashSet<String>> {
        self.inner.repository.observe_favorite_ids()
    }

    /// Observe user uploads, newest first
    pub fn uploads(&self) -> watch::Receiver<Vec<UserUpload>> {
        self.inner.repository.observe_uploads()
    }

    /// Request the next page of the feed
    ///
    /// Ignored while a fetch is already in flight or once the feed is
    /// exhausted. A failed fetch leaves the cursor untouched, so calling
    /// this again retries the same page.
    pub async fn load_next_page(&self) {
        let inner = &self.inner;
        let mut state = inner.state.lock().await;

        if state.in_flight {
            debug!("load ignored, fetch already in flight");
            return;
        }
        if state.end_reached {
            debug!("load ignored, feed exhausted");
            return;
        }

        let initial = state.master.is_empty();
        state.is_loading_initial = initial;
        state.is_loading_more = !initial;
        state.error = None;
        state.in_flight = true;

        let page = state.cursor;
        let limit = inner.page_size;
        let task_inner = Arc::clone(inner);
        state.fetch = Some(tokio::spawn(async move {
            let result = task_inner.repository.fetch_network_images(page, limit).await;
            task_inner.apply_fetch(page, result).await;
        }));

        inner.publish(&state);
    }

    /// Toggle the favorite status of a record
    ///
    /// Membership is read from the store's reactive id set; the snapshot is
    /// not touched on success. The displayed state updates once the id
    /// stream re-emits.
    pub async fn toggle_favorite(&self, cat: &CatImage) {
        let is_favorite = self.inner.favorite_ids.borrow().contains(&cat.id);

        let result = if is_favorite {
            self.inner.repository.remove_favorite(&cat.id).await
        } else {
            self.inner.repository.add_favorite(cat).await
        };

        if let Err(e) = result {
            warn!(id = %cat.id, error = %e, "favorite toggle failed");
            self.inner
                .report_error(format!("Could not update favorites: {}", e))
                .await;
        }
    }

    /// Update the search query and recompute the displayed list
    ///
    /// Filtering is a synchronous view over already-fetched records; it
    /// never resets pagination or touches the network.
    pub async fn set_search_query(&self, query: impl Into<String>) {
        let mut state = self.inner.state.lock().await;
        state.search_query = query.into();
        self.inner.publish(&state);
    }

    /// Flip search-bar visibility; hiding it clears the query
    pub async fn toggle_search_visibility(&self) {
        let mut state = self.inner.state.lock().await;
        state.is_search_visible = !state.is_search_visible;
        if !state.is_search_visible {
            state.search_query.clear();
        }
        self.inner.publish(&state);
    }

    /// Copy a picked image into app-private storage and persist it
    ///
    /// The metadata row is only written after the copy has succeeded.
    pub async fn submit_upload(&self, source: &Path) {
        if let Err(e) = self.import_and_save(source).await {
            warn!(source = %source.display(), error = %e, "upload failed");
            self.inner
                .report_error(format!("Could not save upload: {}", e))
                .await;
        }
    }

    async fn import_and_save(&self, source: &Path) -> CatResult<UserUpload> {
        let destination = self.inner.importer.import(source).await?;
        let created_at = Utc::now().timestamp_millis();
        self.inner
            .repository
            .save_upload(destination.to_string_lossy().as_ref(), created_at)
            .await
    }

    /// Cancel any in-flight fetch and clear the loading flags
    ///
    /// An aborted fetch never reaches the state lock, so the master list
    /// is left exactly as it was.
    pub async fn shutdown(&self) {
        let mut state = self.inner.state.lock().await;
        if let Some(handle) = state.fetch.take() {
            handle.abort();
        }
        state.in_flight = false;
        state.is_loading_initial = false;
        state.is_loading_more = false;
        self.inner.publish(&state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::dto::Breed;

    fn cat(id: &str, breed: &str) -> CatImage {
        CatImage {
            id: id.to_string(),
            url: format!("https://example.com/{}.jpg", id),
            breeds: vec![Breed {
                name: breed.to_string(),
                temperament: None,
                origin: None,
            }],
            width: None,
            height: None,
        }
    }

    #[test]
    fn filter_matches_breed_substring_case_insensitively() {
        let state = FeedState {
            master: vec![cat("1", "Siamese"), cat("2", "Persian")],
            search_query: "sia".to_string(),
            ..FeedState::default()
        };

        let filtered = state.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn blank_query_shows_the_whole_master_list() {
        let state = FeedState {
            master: vec![cat("1", "Siamese"), cat("2", "Persian")],
            search_query: "   ".to_string(),
            ..FeedState::default()
        };

        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn records_without_breeds_never_match_a_query() {
        let mut no_breeds = cat("3", "x");
        no_breeds.breeds.clear();

        let state = FeedState {
            master: vec![no_breeds],
            search_query: "sia".to_string(),
            ..FeedState::default()
        };

        assert!(state.filtered().is_empty());
    }
}
