//! Remote operations the collector depends on

use crate::error::RycError;
use crate::platform::models::{CommentThreadListResponse, SearchListResponse};
use async_trait::async_trait;

/// Sort order for channel video searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoOrder {
    /// Most viewed first
    #[default]
    Popularity,
    /// Most recently published first
    Date,
}

impl VideoOrder {
    /// Value of the `order` query parameter
    pub fn as_api_param(&self) -> &'static str {
        match self {
            VideoOrder::Popularity => "viewCount",
            VideoOrder::Date => "date",
        }
    }
}

/// Parameters of one page of a channel video search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSearch<'a> {
    pub channel_id: &'a str,
    pub order: VideoOrder,
    pub max_results: u32,
    pub page_token: Option<&'a str>,
}

/// The three Data API calls used by ryc. Each call is one HTTP request.
#[async_trait]
pub trait DataApi: Send + Sync {
    /// `search.list` with `type=channel`, using `query` as search text
    async fn search_channels(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<SearchListResponse, RycError>;

    /// `search.list` scoped to a channel, `part=id`
    async fn search_videos(&self, search: &VideoSearch<'_>)
        -> Result<SearchListResponse, RycError>;

    /// `commentThreads.list` for a video
    async fn comment_threads(
        &self,
        video_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<CommentThreadListResponse, RycError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_order_param() {
        assert_eq!(VideoOrder::Popularity.as_api_param(), "viewCount");
        assert_eq!(VideoOrder::Date.as_api_param(), "date");
        assert_eq!(VideoOrder::default(), VideoOrder::Popularity);
    }
}
