//! Tests for the search filter
//!
//! These tests verify:
//! - Case-insensitive substring matching on titles
//! - Stable ordering
//! - Empty term and no-match behavior

use hacker_stories::{filter_stories, Story};

// =============================================================================
// Helper Functions
// =============================================================================

fn catalogue() -> Vec<Story> {
    [
        "React",
        "Redux",
        "Rust 1.0 released",
        "Show HN: a reducer in Rust",
        "",
        "ÉCOLE Polytechnique",
        "react-native tips",
    ]
    .iter()
    .enumerate()
    .map(|(i, title)| Story::new(i as u64, *title))
    .collect()
}

/// Reference predicate the filter must agree with
fn naive_matches(story: &Story, term: &str) -> bool {
    story.title.to_lowercase().contains(&term.to_lowercase())
}

// =============================================================================
// Filter Tests
// =============================================================================

#[test]
fn test_filter_example_from_app() {
    let items = vec![Story::new(0u64, "React"), Story::new(1u64, "Redux")];
    let visible = filter_stories(&items, "Red");
    assert_eq!(visible, vec![&Story::new(1u64, "Redux")]);
}

#[test]
fn test_filter_agrees_with_reference_for_many_terms() {
    let items = catalogue();
    let terms = ["r", "RE", "rust", "RUST", "x", "show hn", "école", "native", "zzz", " "];

    for term in terms {
        let visible = filter_stories(&items, term);
        let expected: Vec<&Story> = items.iter().filter(|s| naive_matches(s, term)).collect();
        assert_eq!(visible, expected, "term {:?}", term);
    }
}

#[test]
fn test_filter_preserves_order() {
    let items = catalogue();
    let visible = filter_stories(&items, "re");

    let positions: Vec<usize> = visible
        .iter()
        .map(|v| items.iter().position(|s| s.id == v.id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn test_filter_empty_term_returns_everything() {
    let items = catalogue();
    let visible: Vec<Story> = filter_stories(&items, "").into_iter().cloned().collect();
    assert_eq!(visible, items);
}

#[test]
fn test_filter_no_match_is_empty() {
    let items = catalogue();
    assert!(filter_stories(&items, "Angular").is_empty());
}

#[test]
fn test_filter_empty_list() {
    assert!(filter_stories(&[], "React").is_empty());
    assert!(filter_stories(&[], "").is_empty());
}
