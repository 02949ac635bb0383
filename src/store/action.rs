//! Action definitions
//!
//! Typed actions for the reducer, plus the untyped `{ type, payload }` form
//! they take when they arrive as JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StoriesError};
use crate::story::{Story, StoryId};

/// Everything that can change the story list
#[derive(Debug, Clone, PartialEq)]
pub enum StoriesAction {
    /// A fetch has been issued
    FetchInit,

    /// A fetch completed with these stories
    FetchSuccess(Vec<Story>),

    /// A fetch failed in transport or decoding
    FetchFailure,

    /// The user dismissed a story
    RemoveStory(StoryId),
}

impl StoriesAction {
    pub const FETCH_INIT: &'static str = "STORIES_FETCH_INIT";
    pub const FETCH_SUCCESS: &'static str = "STORIES_FETCH_SUCCESS";
    pub const FETCH_FAILURE: &'static str = "STORIES_FETCH_FAILURE";
    pub const REMOVE_STORY: &'static str = "REMOVE_STORY";
    /// Older name for a successful load, from before loading flags existed
    pub const SET_STORIES: &'static str = "SET_STORIES";

    /// Wire name of the action
    pub fn type_name(&self) -> &'static str {
        match self {
            StoriesAction::FetchInit => Self::FETCH_INIT,
            StoriesAction::FetchSuccess(_) => Self::FETCH_SUCCESS,
            StoriesAction::FetchFailure => Self::FETCH_FAILURE,
            StoriesAction::RemoveStory(_) => Self::REMOVE_STORY,
        }
    }
}

/// An action as it appears on the wire: `{ "type": ..., "payload": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub action_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl RawAction {
    pub fn new(action_type: impl Into<String>, payload: Option<Value>) -> Self {
        Self {
            action_type: action_type.into(),
            payload,
        }
    }

    fn invalid(&self, reason: impl Into<String>) -> StoriesError {
        StoriesError::InvalidPayload {
            action: self.action_type.clone(),
            reason: reason.into(),
        }
    }

    fn take_payload(&mut self) -> Result<Value> {
        match self.payload.take() {
            Some(payload) => Ok(payload),
            None => Err(self.invalid("missing payload")),
        }
    }
}

impl TryFrom<RawAction> for StoriesAction {
    type Error = StoriesError;

    fn try_from(mut raw: RawAction) -> Result<Self> {
        let action_type = raw.action_type.clone();
        match action_type.as_str() {
            Self::FETCH_INIT => Ok(StoriesAction::FetchInit),
            Self::FETCH_FAILURE => Ok(StoriesAction::FetchFailure),
            Self::FETCH_SUCCESS | Self::SET_STORIES => {
                let payload = raw.take_payload()?;
                let stories = serde_json::from_value(payload).map_err(|e| raw.invalid(e.to_string()))?;
                Ok(StoriesAction::FetchSuccess(stories))
            }
            Self::REMOVE_STORY => {
                // The payload is either the dismissed story or just its id.
                let payload = raw.take_payload()?;
                let id_value = match payload {
                    Value::Object(mut story) => story
                        .remove("objectID")
                        .ok_or_else(|| raw.invalid("story has no objectID"))?,
                    other => other,
                };
                let id = serde_json::from_value(id_value).map_err(|e| raw.invalid(e.to_string()))?;
                Ok(StoriesAction::RemoveStory(id))
            }
            other => Err(StoriesError::UnrecognizedAction(other.to_string())),
        }
    }
}

impl From<StoriesAction> for RawAction {
    fn from(action: StoriesAction) -> Self {
        let action_type = action.type_name();
        let payload = match action {
            StoriesAction::FetchInit | StoriesAction::FetchFailure => None,
            StoriesAction::FetchSuccess(stories) => serde_json::to_value(stories).ok(),
            StoriesAction::RemoveStory(id) => Some(Value::String(id.as_str().to_string())),
        };
        RawAction::new(action_type, payload)
    }
}
