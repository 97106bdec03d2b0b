/// Immutable feed state for the presentation layer
use crate::remote::CatImage;
use serde::Serialize;

/// Everything a feed screen needs to render at one instant
///
/// `images` is the currently displayed (filtered) list; the unfiltered
/// master list stays inside the controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedSnapshot {
    pub images: Vec<CatImage>,
    pub is_loading_initial: bool,
    pub is_loading_more: bool,
    pub error: Option<String>,
    pub end_reached: bool,
    pub is_search_visible: bool,
    pub search_query: String,
}
