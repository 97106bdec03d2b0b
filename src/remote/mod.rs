/// Remote catalog client
///
/// Talks to the public cat-image API: a single paginated search endpoint
/// returning JSON arrays of image records.

pub mod client;
pub mod dto;

pub use client::{CatApiClient, ImageSource};
pub use dto::{Breed, CatImage};
