/// Database row models
use crate::error::{CatError, CatResult};
use crate::remote::dto::{Breed, CatImage};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in the `favorite_cats` table
///
/// Breeds are stored as JSON-encoded text, the same shape the remote API
/// returns them in.
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteRow {
    pub id: String,
    pub url: String,
    pub breeds: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

impl FavoriteRow {
    /// Build a row from a catalog record
    pub fn from_image(image: &CatImage) -> CatResult<Self> {
        let breeds = serde_json::to_string(&image.breeds)
            .map_err(|e| CatError::Internal(format!("failed to encode breeds: {}", e)))?;

        Ok(Self {
            id: image.id.clone(),
            url: image.url.clone(),
            breeds,
            width: image.width,
            height: image.height,
        })
    }

    /// Convert the row back into a catalog record
    pub fn into_image(self) -> CatResult<CatImage> {
        let breeds: Vec<Breed> = if self.breeds.is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&self.breeds)
                .map_err(|e| CatError::Decode(format!("invalid breeds column: {}", e)))?
        };

        Ok(CatImage {
            id: self.id,
            url: self.url,
            breeds,
            width: self.width,
            height: self.height,
        })
    }
}

/// Row in the `user_uploads` table
///
/// `created_at` is epoch milliseconds; the synthetic id is assigned by
/// SQLite on insert.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct UserUpload {
    pub id: i64,
    pub file_path: String,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> CatImage {
        CatImage {
            id: "abc".to_string(),
            url: "https://cdn2.thecatapi.com/images/abc.jpg".to_string(),
            breeds: vec![Breed {
                name: "Siamese".to_string(),
                temperament: Some("Active, Agile".to_string()),
                origin: Some("Thailand".to_string()),
            }],
            width: Some(1200),
            height: Some(800),
        }
    }

    #[test]
    fn favorite_row_round_trips_breeds() {
        let image = sample_image();
        let row = FavoriteRow::from_image(&image).unwrap();
        let back = row.into_image().unwrap();
        assert_eq!(back, image);
    }

    #[test]
    fn empty_breeds_column_decodes_as_empty_list() {
        let row = FavoriteRow {
            id: "abc".to_string(),
            url: "https://example.com/abc.jpg".to_string(),
            breeds: String::new(),
            width: None,
            height: None,
        };
        let image = row.into_image().unwrap();
        assert!(image.breeds.is_empty());
    }
}
