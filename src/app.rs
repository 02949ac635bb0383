//! App Module
//!
//! Wires the persisted search term, the store, and the fetcher together.
//!
//! ## Responsibilities
//! - Load the search term from storage on startup
//! - Refetch whenever the term changes (persisting it first)
//! - Dismiss stories
//! - Expose the filtered view of the current state

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::config::Config;
use crate::error::Result;
use crate::fetch::{FetchOutcome, StoryFetcher, StorySource};
use crate::filter::filter_stories;
use crate::storage::{KeyValueStorage, PersistedValue, SearchTerm};
use crate::store::{StoriesAction, StoriesState, StoryStore};
use crate::story::{Story, StoryId};

/// What should be on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    /// A fetch is in flight; the list is hidden
    Loading,

    /// The last fetch failed; whatever stories remain are still listed
    Error,

    /// Stories are ready to show
    Ready,
}

/// Snapshot of everything a front end needs to render
#[derive(Debug, Clone, PartialEq)]
pub struct AppView {
    pub status: ViewStatus,
    pub search_term: String,
    pub stories: Vec<Story>,
}

impl AppView {
    /// Build the view of `state` as filtered by `search_term`
    pub fn from_state(state: &StoriesState, search_term: &str) -> Self {
        let status = if state.is_loading {
            ViewStatus::Loading
        } else if state.is_error {
            ViewStatus::Error
        } else {
            ViewStatus::Ready
        };

        let stories = match status {
            ViewStatus::Loading => Vec::new(),
            _ => filter_stories(&state.items, search_term).into_iter().cloned().collect(),
        };

        Self {
            status,
            search_term: search_term.to_string(),
            stories,
        }
    }
}

/// The application core, minus any rendering
pub struct App {
    config: Config,
    search_term: SearchTerm,
    store: StoryStore,
    fetcher: StoryFetcher,
}

impl App {
    /// Build the app; loads the search term but does not fetch yet
    pub fn new(config: Config, storage: Arc<dyn KeyValueStorage>, source: Arc<dyn StorySource>) -> Result<Self> {
        config.validate()?;

        let search_term = SearchTerm::load(
            PersistedValue::new(storage),
            config.search_key.clone(),
            &config.default_search_term,
        );
        let store = StoryStore::new();
        let fetcher = StoryFetcher::new(store.clone(), source, config.stale_response_policy);

        tracing::info!(search_term = search_term.value(), "App initialized");

        Ok(Self {
            config,
            search_term,
            store,
            fetcher,
        })
    }

    /// Fetch stories for the current search term
    pub async fn refresh(&self) -> FetchOutcome {
        self.fetcher.search(self.search_term.value()).await
    }

    /// Change the search term, persist it, and refetch
    pub async fn set_search_term(&mut self, term: impl Into<String>) -> FetchOutcome {
        self.search_term.set(term);
        self.refresh().await
    }

    /// Start fetching for the current search term without waiting
    pub fn spawn_refresh(&self) -> JoinHandle<FetchOutcome> {
        self.fetcher.spawn_search(self.search_term.value())
    }

    /// Change and persist the search term, then fetch on a tokio task
    ///
    /// The store is already loading when this returns. Searches submitted
    /// back to back overlap, so the stale response policy decides which
    /// response lands.
    pub fn submit_search_term(&mut self, term: impl Into<String>) -> JoinHandle<FetchOutcome> {
        self.search_term.set(term);
        self.spawn_refresh()
    }

    /// Dismiss one story
    pub fn remove_story(&self, id: impl Into<StoryId>) {
        self.store.dispatch(StoriesAction::RemoveStory(id.into()));
    }

    /// Stories matching the current search term
    pub fn visible_stories(&self) -> Vec<Story> {
        self.store
            .read(|state| filter_stories(&state.items, self.search_term.value()).into_iter().cloned().collect())
    }

    pub fn view(&self) -> AppView {
        self.store
            .read(|state| AppView::from_state(state, self.search_term.value()))
    }

    pub fn search_term(&self) -> &str {
        self.search_term.value()
    }

    pub fn store(&self) -> &StoryStore {
        &self.store
    }

    /// Fetcher handle, for spawning searches without borrowing the app
    pub fn fetcher(&self) -> &StoryFetcher {
        &self.fetcher
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
