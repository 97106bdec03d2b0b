/// Feed state machine
///
/// Owns the pagination cursor, the accumulated master list, and the search
/// filter, and publishes immutable snapshots for the presentation layer.

pub mod controller;
pub mod snapshot;

pub use controller::FeedController;
pub use snapshot::FeedSnapshot;
