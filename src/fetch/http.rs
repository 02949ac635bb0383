//! HTTP story source
//!
//! `GET {endpoint}?query={term}` against the search API, decoding the
//! `hits` array of the JSON body.

use async_trait::async_trait;
use reqwest::{header, Client, Url};
use serde::Deserialize;

use super::StorySource;
use crate::config::Config;
use crate::error::{Result, StoriesError};
use crate::story::Story;

#[derive(Debug, Deserialize)]
struct SearchResponseDto {
    hits: Vec<Story>,
}

/// Story source backed by a reqwest client
pub struct HttpStorySource {
    client: Client,
    endpoint: Url,
}

impl HttpStorySource {
    /// Build a source for `endpoint`
    ///
    /// # Errors
    ///
    /// Returns `StoriesError::Config` for an unparsable endpoint and
    /// `StoriesError::Http` when the client cannot be constructed.
    pub fn new(endpoint: &str, user_agent: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| StoriesError::Config(format!("invalid API endpoint {endpoint:?}: {e}")))?;
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client, endpoint })
    }

    /// Build a source from the endpoint and user agent in `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_endpoint, &config.user_agent)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl StorySource for HttpStorySource {
    async fn fetch(&self, query: &str) -> Result<Vec<Story>> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("query", query)])
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoriesError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!(bytes = body.len(), query, "Received search response");
        parse_stories(&body)
    }
}

/// Decode a search response body into stories
pub fn parse_stories(body: &[u8]) -> Result<Vec<Story>> {
    let decoded: SearchResponseDto = serde_json::from_slice(body)
        .map_err(|e| StoriesError::Decode(format!("invalid search payload: {e}")))?;
    Ok(decoded.hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hits() {
        let body = br#"{
            "hits": [
                {"objectID": "1", "title": "Rust 1.0", "url": "https://rust-lang.org", "author": "steveklabnik", "num_comments": 10, "points": 200},
                {"objectID": "2", "title": null, "url": null, "author": "pg", "num_comments": null, "points": 1}
            ],
            "nbHits": 2
        }"#;
        let stories = parse_stories(body).unwrap();
        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0].title, "Rust 1.0");
        assert_eq!(stories[0].num_comments, 10);
        assert_eq!(stories[1].title, "");
    }

    #[test]
    fn missing_hits_is_decode_error() {
        let err = parse_stories(br#"{"stories": []}"#).unwrap_err();
        assert!(matches!(err, StoriesError::Decode(_)));
    }

    #[test]
    fn garbage_is_decode_error() {
        assert!(matches!(parse_stories(b"<html>"), Err(StoriesError::Decode(_))));
    }

    #[test]
    fn rejects_bad_endpoint() {
        let result = HttpStorySource::new("not a url", "test");
        assert!(matches!(result, Err(StoriesError::Config(_))));
    }
}
