//! Offline story source
//!
//! Returns a fixed list after a delay, standing in for the network.

use std::time::Duration;

use async_trait::async_trait;

use super::StorySource;
use crate::error::Result;
use crate::story::{Story, StoryId};

/// The two stories the app ships with
pub fn initial_stories() -> Vec<Story> {
    vec![
        Story {
            id: StoryId::from(0u64),
            title: "React".to_string(),
            url: "https://reactjs.org/".to_string(),
            author: "Jordan Walke".to_string(),
            num_comments: 3,
            points: 4,
        },
        Story {
            id: StoryId::from(1u64),
            title: "Redux".to_string(),
            url: "https://redux.js.org/".to_string(),
            author: "Dan Abramov, Andrew Clark".to_string(),
            num_comments: 2,
            points: 5,
        },
    ]
}

/// Story source that ignores the query
pub struct StaticStorySource {
    stories: Vec<Story>,
    delay: Duration,
}

impl StaticStorySource {
    /// Serve `initial_stories()` after `delay`
    pub fn new(delay: Duration) -> Self {
        Self::with_stories(initial_stories(), delay)
    }

    pub fn with_stories(stories: Vec<Story>, delay: Duration) -> Self {
        Self { stories, delay }
    }
}

#[async_trait]
impl StorySource for StaticStorySource {
    async fn fetch(&self, _query: &str) -> Result<Vec<Story>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.stories.clone())
    }
}
