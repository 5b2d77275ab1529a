//! Small command-line helpers around third-party HTTP APIs: upcoming CS2
//! matches from an ICS proxy feed, and Giphy GIF search.

pub mod config;
pub mod error;
pub mod feed;
pub mod giphy;
pub mod http;
pub mod logging;
pub mod matches;

pub use config::Config;
pub use error::{Error, Result};
pub use feed::{fetch_feed, upcoming_matches, FeedQuery};
pub use giphy::{GifResult, GiphyClient};
pub use matches::{filter_matches, filter_matches_at, Match};
