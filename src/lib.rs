//! # Hacker Stories
//!
//! Fetch stories for a search term, filter them by title, dismiss the ones
//! you don't care about, and remember the last search between runs.
//!
//! - Reducer-driven story store with subscriber notifications
//! - Search term persisted through an injected key/value storage port
//! - Async fetch through an injected story source (HTTP or offline)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                           App                                │
//! │          (search term → fetch → store → filter)              │
//! └──────┬──────────────────────┬─────────────────────┬─────────┘
//!        │                      │                     │
//!        ▼                      ▼                     ▼
//! ┌─────────────┐       ┌──────────────┐       ┌─────────────┐
//! │ SearchTerm  │       │ StoryFetcher │──────▶│ StoryStore  │
//! │ (persisted) │       │   (async)    │       │  (reducer)  │
//! └──────┬──────┘       └──────┬───────┘       └──────┬──────┘
//!        │                     │                      │
//!        ▼                     ▼                      ▼
//! ┌─────────────┐       ┌──────────────┐       ┌─────────────┐
//! │ KeyValue    │       │ StorySource  │       │   filter    │
//! │ Storage     │       │ (HTTP/static)│       │  (by title) │
//! └─────────────┘       └──────────────┘       └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod story;
pub mod storage;
pub mod store;
pub mod fetch;
pub mod filter;
pub mod app;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoriesError, Result};
pub use config::{Config, StaleResponsePolicy};
pub use app::{App, AppView, ViewStatus};
pub use story::{Story, StoryId};
pub use filter::filter_stories;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Hacker Stories
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
