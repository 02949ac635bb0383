//! Storage Module
//!
//! Key/value persistence for values that must survive a restart.
//!
//! ## Responsibilities
//! - Define the storage port (`KeyValueStorage`) injected into the app
//! - Provide in-memory and JSON-file adapters
//! - Wrap the port in fire-and-forget semantics (`PersistedValue`)
//! - Keep the search term in sync with storage (`SearchTerm`)
//!
//! ## File Format
//! ```text
//! {data_dir}/storage.json
//! {
//!   "search": "React"
//! }
//! ```
//!
//! The file is rewritten in full on every `set`, through a temporary file
//! and a rename, so a crash never leaves a half-written object behind.

mod file;
mod memory;
mod persisted;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use persisted::{PersistedValue, SearchTerm};

use crate::error::Result;

/// Storage port for string values keyed by name
///
/// Implementations write synchronously: when `set` returns `Ok`, the value
/// is visible to any later `get`, including one from a new process.
pub trait KeyValueStorage: Send + Sync {
    /// Read a value, `Ok(None)` if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
