//! Search filter
//!
//! Derives the visible stories from the full list and the search term.

use crate::story::Story;

/// Stories whose title contains `term`, ignoring case, in input order
///
/// An empty term matches everything.
pub fn filter_stories<'a>(items: &'a [Story], term: &str) -> Vec<&'a Story> {
    if term.is_empty() {
        return items.iter().collect();
    }

    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|story| story.title.to_lowercase().contains(&needle))
        .collect()
}
