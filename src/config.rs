//! Configuration for Hacker Stories
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, StoriesError};

/// Main configuration for a Hacker Stories instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for persisted values
    /// Internal structure:
    ///   {data_dir}/
    ///     └── storage.json     (key/value store, one JSON object)
    pub data_dir: PathBuf,

    /// Storage key holding the last-used search term
    pub search_key: String,

    /// Search term used when nothing has been persisted yet
    pub default_search_term: String,

    // -------------------------------------------------------------------------
    // Fetch Configuration
    // -------------------------------------------------------------------------
    /// Search endpoint; the term is sent as the `query` parameter
    pub api_endpoint: String,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// What to do with a response that completes after a newer search started
    pub stale_response_policy: StaleResponsePolicy,

    /// Simulated latency of the offline story source (milliseconds)
    pub static_delay_ms: u64,
}

/// Handling of responses for superseded search terms
///
/// No request is ever cancelled. The policy only decides whether a late
/// response may still overwrite the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResponsePolicy {
    /// Every completed fetch is applied, so the last one to finish wins
    /// even if it was issued for an older term.
    #[default]
    Apply,

    /// Responses whose request generation is older than the newest issued
    /// request are dropped.
    Discard,
}

impl Config {
    /// File name of the key/value store inside `data_dir`
    pub const STORAGE_FILENAME: &'static str = "storage.json";

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the key/value store file
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(Self::STORAGE_FILENAME)
    }

    /// Reject configurations that cannot work at all
    pub fn validate(&self) -> Result<()> {
        if self.search_key.is_empty() {
            return Err(StoriesError::Config("search key must not be empty".to_string()));
        }
        if self.api_endpoint.is_empty() {
            return Err(StoriesError::Config("API endpoint must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./hacker_stories_data"),
            search_key: "search".to_string(),
            default_search_term: "React".to_string(),
            api_endpoint: "https://hn.algolia.com/api/v1/search".to_string(),
            user_agent: format!("hacker-stories/{}", crate::VERSION),
            stale_response_policy: StaleResponsePolicy::Apply,
            static_delay_ms: 2000,
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for persisted values)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the storage key for the search term
    pub fn search_key(mut self, key: impl Into<String>) -> Self {
        self.config.search_key = key.into();
        self
    }

    /// Set the search term used before anything is persisted
    pub fn default_search_term(mut self, term: impl Into<String>) -> Self {
        self.config.default_search_term = term.into();
        self
    }

    /// Set the search endpoint
    pub fn api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.api_endpoint = endpoint.into();
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the stale response policy
    pub fn stale_response_policy(mut self, policy: StaleResponsePolicy) -> Self {
        self.config.stale_response_policy = policy;
        self
    }

    /// Set the offline source delay (in milliseconds)
    pub fn static_delay_ms(mut self, ms: u64) -> Self {
        self.config.static_delay_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
