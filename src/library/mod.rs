// Episode library module
// This module holds the episode model and feed parsing

pub mod episode;
pub mod feed;

pub use episode::Episode;
pub use feed::{parse_feed, sort_latest_first};
