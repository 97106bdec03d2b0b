/// Upload file import
use crate::error::{CatError, CatResult};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Copies picked image files into the app-private uploads directory
///
/// The copy must complete, and the destination must exist, before the
/// caller persists any metadata row pointing at it. A persisted path never
/// references a missing file.
#[derive(Clone)]
pub struct UploadImporter {
    uploads_dir: PathBuf,
}

impl UploadImporter {
    /// Create a new importer rooted at `uploads_dir`
    pub fn new(uploads_dir: PathBuf) -> Self {
        Self { uploads_dir }
    }

    /// Copy `source` into the uploads directory and return the new path
    ///
    /// Files are named `upload_<epoch_millis>.<ext>`; a numeric suffix is
    /// appended when two imports land in the same millisecond.
    pub async fn import(&self, source: &Path) -> CatResult<PathBuf> {
        fs::create_dir_all(&self.uploads_dir).await.map_err(|e| {
            CatError::Storage(format!(
                "failed to create uploads directory {}: {}",
                self.uploads_dir.display(),
                e
            ))
        })?;

        let extension = source
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("jpg");
        let destination = self.next_destination(extension).await;

        fs::copy(source, &destination).await.map_err(|e| {
            CatError::Storage(format!("failed to copy {}: {}", source.display(), e))
        })?;

        // The metadata insert is gated on the copied file actually existing.
        if !fs::try_exists(&destination).await? {
            return Err(CatError::Storage(format!(
                "copied file missing: {}",
                destination.display()
            )));
        }

        debug!(destination = %destination.display(), "upload imported");

        Ok(destination)
    }

    async fn next_destination(&self, extension: &str) -> PathBuf {
        let millis = Utc::now().timestamp_millis();
        let mut candidate = self.uploads_dir.join(format!("upload_{}.{}", millis, extension));

        let mut suffix = 1;
        while candidate.exists() {
            candidate = self
                .uploads_dir
                .join(format!("upload_{}_{}.{}", millis, suffix, extension));
            suffix += 1;
        }

        candidate
    }
}
