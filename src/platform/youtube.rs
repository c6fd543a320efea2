//! YouTube Data API v3 implementation of [`DataApi`]

use crate::error::RycError;
use crate::platform::api::{DataApi, VideoSearch};
use crate::platform::client::{ApiClient, HttpClientConfig};
use crate::platform::models::{CommentThreadListResponse, SearchListResponse};
use async_trait::async_trait;
use tracing::debug;

/// Data API client bound to one API key
#[derive(Debug)]
pub struct YouTubeDataApi {
    client: ApiClient,
}

impl YouTubeDataApi {
    /// Create a client against the public endpoint
    pub fn new(api_key: &str) -> Result<Self, RycError> {
        Self::with_config(api_key, HttpClientConfig::default())
    }

    /// Create a client with custom HTTP configuration
    pub fn with_config(api_key: &str, config: HttpClientConfig) -> Result<Self, RycError> {
        Ok(Self {
            client: ApiClient::with_config(api_key, config)?,
        })
    }
}

#[async_trait]
impl DataApi for YouTubeDataApi {
    async fn search_channels(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<SearchListResponse, RycError> {
        let params = [
            ("part", "snippet".to_string()),
            ("q", query.to_string()),
            ("type", "channel".to_string()),
            ("maxResults", max_results.to_string()),
        ];
        self.client.get_json("search", &params).await
    }

    async fn search_videos(
        &self,
        search: &VideoSearch<'_>,
    ) -> Result<SearchListResponse, RycError> {
        let mut params = vec![
            ("part", "id".to_string()),
            ("channelId", search.channel_id.to_string()),
            ("maxResults", search.max_results.to_string()),
            ("order", search.order.as_api_param().to_string()),
        ];
        if let Some(token) = search.page_token {
            params.push(("pageToken", token.to_string()));
        }
        self.client.get_json("search", &params).await
    }

    async fn comment_threads(
        &self,
        video_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<CommentThreadListResponse, RycError> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("videoId", video_id.to_string()),
            ("maxResults", max_results.to_string()),
        ];
        if let Some(token) = page_token {
            debug!("Requesting comment page {} for {}", token, video_id);
            params.push(("pageToken", token.to_string()));
        }
        self.client.get_json("commentThreads", &params).await
    }
}
