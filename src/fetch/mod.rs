//! Fetch Module
//!
//! Loading stories for a search term and feeding them into the store.
//!
//! ## Responsibilities
//! - Define the network port (`StorySource`)
//! - Talk to the search endpoint over HTTP (`HttpStorySource`)
//! - Serve canned stories for offline runs (`StaticStorySource`)
//! - Drive FetchInit → FetchSuccess / FetchFailure (`StoryFetcher`)
//!
//! ## Ordering
//! Requests are never cancelled or de-duplicated. With the default
//! `StaleResponsePolicy::Apply`, whichever response completes last owns the
//! store, even if it answers an older search term.

mod fetcher;
mod http;
mod fixture;

pub use fetcher::{FetchOutcome, StoryFetcher};
pub use fixture::{initial_stories, StaticStorySource};
pub use http::{parse_stories, HttpStorySource};

use async_trait::async_trait;

use crate::error::Result;
use crate::story::Story;

/// Network port returning the stories that match a query
#[async_trait]
pub trait StorySource: Send + Sync {
    /// Fetch stories for `query` (never called with an empty query)
    async fn fetch(&self, query: &str) -> Result<Vec<Story>>;
}
