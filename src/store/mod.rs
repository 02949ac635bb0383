//! Store Module
//!
//! Story list state and the reducer that drives it.
//!
//! ## Responsibilities
//! - Hold the fetched stories plus loading/error flags
//! - Apply actions through a pure reducer
//! - Notify subscribers after every transition
//!
//! ## Transitions
//! ```text
//!   idle ──FetchInit──▶ loading ──FetchSuccess(list)──▶ idle
//!                          │
//!                          └──FetchFailure──▶ error ──FetchInit──▶ loading
//!
//!   RemoveStory(id) is valid in every state and only touches `items`.
//! ```

mod action;
mod reducer;
mod store;

pub use action::{RawAction, StoriesAction};
pub use reducer::{reduce, StoriesState};
pub use store::{StoryStore, SubscriptionId};
