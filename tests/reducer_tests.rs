//! Tests for the stories reducer and store
//!
//! These tests verify:
//! - Fetch lifecycle transitions (init → success / failure)
//! - Story removal by id
//! - The loading/error exclusivity invariant
//! - Untyped action dispatch

use hacker_stories::store::{reduce, RawAction, StoriesAction, StoriesState, StoryStore};
use hacker_stories::{StoriesError, Story, StoryId};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn stories(titles: &[&str]) -> Vec<Story> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| Story::new(i as u64, *title))
        .collect()
}

fn loaded(titles: &[&str]) -> StoriesState {
    reduce(StoriesState::default(), StoriesAction::FetchSuccess(stories(titles)))
}

fn all_actions() -> Vec<StoriesAction> {
    vec![
        StoriesAction::FetchInit,
        StoriesAction::FetchSuccess(stories(&["a", "b"])),
        StoriesAction::FetchFailure,
        StoriesAction::RemoveStory(StoryId::from("0")),
        StoriesAction::RemoveStory(StoryId::from("missing")),
    ]
}

// =============================================================================
// Fetch Lifecycle Tests
// =============================================================================

#[test]
fn test_init_then_success_yields_payload() {
    let payload = stories(&["React", "Redux"]);

    let state = reduce(StoriesState::default(), StoriesAction::FetchInit);
    assert!(state.is_loading);
    assert!(state.items.is_empty());

    let state = reduce(state, StoriesAction::FetchSuccess(payload.clone()));
    assert!(!state.is_loading);
    assert!(!state.is_error);
    assert_eq!(state.items, payload);
}

#[test]
fn test_init_then_failure_keeps_previous_items() {
    let before = loaded(&["React", "Redux"]);

    let state = reduce(before.clone(), StoriesAction::FetchInit);
    let state = reduce(state, StoriesAction::FetchFailure);

    assert!(!state.is_loading);
    assert!(state.is_error);
    assert_eq!(state.items, before.items);
}

#[test]
fn test_success_after_failure_clears_error() {
    let state = reduce(loaded(&["a"]), StoriesAction::FetchFailure);
    let state = reduce(state, StoriesAction::FetchInit);
    let state = reduce(state, StoriesAction::FetchSuccess(stories(&["b"])));

    assert!(!state.is_error);
    assert_eq!(state.items[0].title, "b");
}

#[test]
fn test_loading_and_error_never_both_set() {
    // Every two-step sequence of actions from every reachable start state.
    let starts = vec![
        StoriesState::default(),
        reduce(StoriesState::default(), StoriesAction::FetchInit),
        reduce(loaded(&["a"]), StoriesAction::FetchFailure),
    ];

    for start in starts {
        for first in all_actions() {
            for second in all_actions() {
                let state = reduce(reduce(start.clone(), first.clone()), second);
                assert!(
                    !(state.is_loading && state.is_error),
                    "invalid state {:?}",
                    state
                );
            }
        }
    }
}

// =============================================================================
// Removal Tests
// =============================================================================

#[test]
fn test_remove_present_id_shrinks_by_one() {
    let before = loaded(&["React", "Redux", "Rust"]);

    let after = reduce(before.clone(), StoriesAction::RemoveStory(StoryId::from("1")));

    assert_eq!(after.items.len(), before.items.len() - 1);
    assert!(after.items.iter().all(|s| s.id.as_str() != "1"));
    assert_eq!(after.items[0].title, "React");
    assert_eq!(after.items[1].title, "Rust");
}

#[test]
fn test_remove_absent_id_is_noop() {
    let before = loaded(&["React", "Redux"]);
    let after = reduce(before.clone(), StoriesAction::RemoveStory(StoryId::from("42")));
    assert_eq!(after, before);
}

#[test]
fn test_remove_matches_numeric_and_string_ids() {
    let before = loaded(&["React"]);
    let after = reduce(before, StoriesAction::RemoveStory(StoryId::from(0u64)));
    assert!(after.items.is_empty());
}

// =============================================================================
// Store Dispatch Tests
// =============================================================================

#[test]
fn test_store_dispatch_raw_json_actions() {
    let store = StoryStore::new();

    let actions: Vec<RawAction> = serde_json::from_value(json!([
        { "type": "STORIES_FETCH_INIT" },
        { "type": "STORIES_FETCH_SUCCESS", "payload": [
            { "objectID": 0, "title": "React", "url": "https://reactjs.org/", "author": "Jordan Walke", "num_comments": 3, "points": 4 },
            { "objectID": 1, "title": "Redux", "url": "https://redux.js.org/", "author": "Dan Abramov, Andrew Clark", "num_comments": 2, "points": 5 }
        ]},
        { "type": "REMOVE_STORY", "payload": { "objectID": 0, "title": "React" } }
    ]))
    .unwrap();

    for action in actions {
        store.dispatch_raw(action).unwrap();
    }

    let state = store.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].title, "Redux");
    assert_eq!(state.items[0].points, 5);
}

#[test]
fn test_store_rejects_unrecognized_action() {
    let store = StoryStore::new();
    let before = store.state();

    let err = store
        .dispatch_raw(RawAction::new("STORIES_FETCH_MAYBE", None))
        .unwrap_err();

    assert!(matches!(err, StoriesError::UnrecognizedAction(_)));
    assert_eq!(store.state(), before);
}
