//! Story fetcher
//!
//! One request per search-term change, reported to the store as
//! FetchInit followed by FetchSuccess or FetchFailure.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

use super::StorySource;
use crate::config::StaleResponsePolicy;
use crate::error::StoriesError;
use crate::store::{StoriesAction, StoryStore};

/// What a call to `StoryFetcher::search` ended up doing
#[derive(Debug)]
pub enum FetchOutcome {
    /// Empty term, no request issued
    Skipped,

    /// Stories were stored
    Loaded { generation: u64, count: usize },

    /// The request failed and the store was marked as errored
    Failed { generation: u64, error: StoriesError },

    /// A newer request was issued meanwhile; the response was dropped
    Stale { generation: u64, latest: u64 },
}

/// Drives a `StorySource` and records the results in a `StoryStore`
///
/// Cloning is cheap; clones share the request generation counter, so
/// searches spawned from different clones still see each other.
#[derive(Clone)]
pub struct StoryFetcher {
    store: StoryStore,
    source: Arc<dyn StorySource>,
    policy: StaleResponsePolicy,
    generation: Arc<AtomicU64>,
}

impl StoryFetcher {
    pub fn new(store: StoryStore, source: Arc<dyn StorySource>, policy: StaleResponsePolicy) -> Self {
        Self {
            store,
            source,
            policy,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Generation of the most recently issued request (0 before any)
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn store(&self) -> &StoryStore {
        &self.store
    }

    /// Fetch stories for `term`
    ///
    /// An empty term issues no request and leaves the store untouched.
    pub async fn search(&self, term: &str) -> FetchOutcome {
        match self.begin(term) {
            Some(generation) => self.finish(generation, term).await,
            None => FetchOutcome::Skipped,
        }
    }

    /// Start a search on a tokio task and return without waiting for it
    ///
    /// FetchInit is dispatched before this returns, so the store already
    /// reports loading. Must be called from within a tokio runtime.
    pub fn spawn_search(&self, term: impl Into<String>) -> JoinHandle<FetchOutcome> {
        let term = term.into();
        let generation = self.begin(&term);
        let fetcher = self.clone();

        tokio::spawn(async move {
            match generation {
                Some(generation) => fetcher.finish(generation, &term).await,
                None => FetchOutcome::Skipped,
            }
        })
    }

    /// Claim a generation and mark the store as loading
    fn begin(&self, term: &str) -> Option<u64> {
        if term.is_empty() {
            tracing::debug!("Empty search term, skipping fetch");
            return None;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.store.dispatch(StoriesAction::FetchInit);
        tracing::info!(generation, query = term, "Fetching stories");
        Some(generation)
    }

    async fn finish(&self, generation: u64, term: &str) -> FetchOutcome {
        let result = self.source.fetch(term).await;

        let latest = self.latest_generation();
        if self.policy == StaleResponsePolicy::Discard && generation != latest {
            tracing::info!(generation, latest, query = term, "Discarding stale response");
            return FetchOutcome::Stale { generation, latest };
        }

        match result {
            Ok(stories) => {
                let count = stories.len();
                tracing::info!(generation, count, query = term, "Fetched stories");
                self.store.dispatch(StoriesAction::FetchSuccess(stories));
                FetchOutcome::Loaded { generation, count }
            }
            Err(error) => {
                tracing::warn!(generation, query = term, error = %error, "Fetch failed");
                self.store.dispatch(StoriesAction::FetchFailure);
                FetchOutcome::Failed { generation, error }
            }
        }
    }
}
