/// Data transfer objects for the remote catalog API
use serde::{Deserialize, Serialize};

/// A cat image record from the catalog
///
/// The same shape is persisted for favorites, so the struct doubles as the
/// domain model. Unknown response fields are ignored; the API may omit
/// `breeds` and the dimensions entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatImage {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub breeds: Vec<Breed>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

/// Breed descriptor attached to an image record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breed {
    pub name: String,
    pub temperament: Option<String>,
    pub origin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_payload() {
        let body = r#"[
            {
                "id": "MTY3ODIyMQ",
                "url": "https://cdn2.thecatapi.com/images/MTY3ODIyMQ.jpg",
                "breeds": [
                    {"name": "Siamese", "temperament": "Active", "origin": "Thailand"}
                ],
                "width": 1204,
                "height": 1445
            }
        ]"#;

        let images: Vec<CatImage> = serde_json::from_str(body).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].id, "MTY3ODIyMQ");
        assert_eq!(images[0].breeds[0].name, "Siamese");
        assert_eq!(images[0].width, Some(1204));
    }

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"[
            {
                "id": "abc",
                "url": "https://example.com/abc.jpg",
                "breeds": [{"name": "Persian", "wikipedia_url": "https://en.wikipedia.org/wiki/Persian_cat"}],
                "width": 10,
                "height": 20,
                "categories": [{"id": 1, "name": "hats"}]
            }
        ]"#;

        let images: Vec<CatImage> = serde_json::from_str(body).unwrap();
        assert_eq!(images[0].breeds[0].name, "Persian");
        assert_eq!(images[0].breeds[0].temperament, None);
    }

    #[test]
    fn missing_breeds_and_dimensions_decode_with_defaults() {
        let body = r#"[{"id": "abc", "url": "https://example.com/abc.jpg"}]"#;

        let images: Vec<CatImage> = serde_json::from_str(body).unwrap();
        assert!(images[0].breeds.is_empty());
        assert_eq!(images[0].width, None);
        assert_eq!(images[0].height, None);
    }
}
