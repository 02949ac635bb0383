//! Stories reducer
//!
//! `(state, action) -> state`. No I/O, no logging, no clocks.

use super::StoriesAction;
use crate::story::Story;

/// Fetched stories plus request status
///
/// `is_loading` and `is_error` are never both set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoriesState {
    /// Stories in server order
    pub items: Vec<Story>,

    /// A fetch is in flight
    pub is_loading: bool,

    /// The last fetch failed
    pub is_error: bool,
}

/// Apply one action
pub fn reduce(state: StoriesState, action: StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit => StoriesState {
            is_loading: true,
            is_error: false,
            ..state
        },
        StoriesAction::FetchSuccess(items) => StoriesState {
            items,
            is_loading: false,
            is_error: false,
        },
        StoriesAction::FetchFailure => StoriesState {
            is_loading: false,
            is_error: true,
            ..state
        },
        StoriesAction::RemoveStory(id) => {
            let mut items = state.items;
            items.retain(|story| story.id != id);
            StoriesState { items, ..state }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::StoryId;

    fn seeded() -> StoriesState {
        StoriesState {
            items: vec![Story::new(0u64, "React"), Story::new(1u64, "Redux")],
            is_loading: false,
            is_error: false,
        }
    }

    #[test]
    fn init_keeps_items_and_clears_error() {
        let state = StoriesState {
            is_error: true,
            ..seeded()
        };
        let next = reduce(state, StoriesAction::FetchInit);
        assert!(next.is_loading);
        assert!(!next.is_error);
        assert_eq!(next.items.len(), 2);
    }

    #[test]
    fn failure_after_init_keeps_items() {
        let before = seeded();
        let next = reduce(reduce(before.clone(), StoriesAction::FetchInit), StoriesAction::FetchFailure);
        assert!(!next.is_loading);
        assert!(next.is_error);
        assert_eq!(next.items, before.items);
    }

    #[test]
    fn success_replaces_items() {
        let payload = vec![Story::new("abc", "Rust")];
        let next = reduce(
            reduce(seeded(), StoriesAction::FetchInit),
            StoriesAction::FetchSuccess(payload.clone()),
        );
        assert!(!next.is_loading);
        assert!(!next.is_error);
        assert_eq!(next.items, payload);
    }

    #[test]
    fn remove_present_id() {
        let next = reduce(seeded(), StoriesAction::RemoveStory(StoryId::from("0")));
        assert_eq!(next.items, vec![Story::new(1u64, "Redux")]);
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let next = reduce(seeded(), StoriesAction::RemoveStory(StoryId::from("99")));
        assert_eq!(next, seeded());
    }

    #[test]
    fn remove_leaves_flags_alone() {
        let loading = reduce(seeded(), StoriesAction::FetchInit);
        let next = reduce(loading, StoriesAction::RemoveStory(StoryId::from("1")));
        assert!(next.is_loading);
        assert_eq!(next.items.len(), 1);
    }
}
