//! In-memory [`DataApi`] for tests

use crate::error::RycError;
use crate::platform::{
    CommentThread, CommentThreadListResponse, DataApi, ResourceId, SearchListResponse,
    SearchResult, VideoSearch,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Fake API serving canned channels, videos and comments.
///
/// Page tokens are the decimal offset of the next item. An empty video ID
/// stands for a non-video search hit.
#[derive(Default)]
pub(crate) struct FakeApi {
    channels: HashMap<String, String>,
    videos: HashMap<String, Vec<String>>,
    comments: HashMap<String, Vec<String>>,
    fail_search: bool,
    fail_comments_from: HashMap<String, usize>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, handle: &str, channel_id: &str) -> Self {
        self.channels
            .insert(handle.to_string(), channel_id.to_string());
        self
    }

    pub fn with_videos(mut self, channel_id: &str, video_ids: Vec<String>) -> Self {
        self.videos.insert(channel_id.to_string(), video_ids);
        self
    }

    pub fn with_comments(mut self, video_id: &str, comments: Vec<String>) -> Self {
        self.comments.insert(video_id.to_string(), comments);
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    /// Fail comment requests for `video_id` whose offset is at least `offset`
    pub fn failing_comments_from(mut self, video_id: &str, offset: usize) -> Self {
        self.fail_comments_from.insert(video_id.to_string(), offset);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn server_error() -> RycError {
        RycError::Api {
            status: 500,
            message: "Backend Error".to_string(),
        }
    }
}

fn page_bounds(len: usize, page_token: Option<&str>, max_results: u32) -> (usize, usize) {
    let start = page_token
        .and_then(|token| token.parse().ok())
        .unwrap_or(0usize)
        .min(len);
    let end = (start + max_results as usize).min(len);
    (start, end)
}

fn next_page(end: usize, len: usize) -> Option<String> {
    (end < len).then(|| end.to_string())
}

#[async_trait]
impl DataApi for FakeApi {
    async fn search_channels(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<SearchListResponse, RycError> {
        self.record(format!("search_channels({}, {})", query, max_results));
        if self.fail_search {
            return Err(Self::server_error());
        }

        let items = self
            .channels
            .get(query)
            .map(|channel_id| SearchResult {
                id: ResourceId {
                    kind: Some("youtube#channel".to_string()),
                    channel_id: Some(channel_id.clone()),
                    video_id: None,
                },
            })
            .into_iter()
            .collect();

        Ok(SearchListResponse {
            items,
            next_page_token: None,
        })
    }

    async fn search_videos(
        &self,
        search: &VideoSearch<'_>,
    ) -> Result<SearchListResponse, RycError> {
        self.record(format!(
            "search_videos({}, {}, {}, {:?})",
            search.channel_id,
            search.order.as_api_param(),
            search.max_results,
            search.page_token
        ));
        if self.fail_search {
            return Err(Self::server_error());
        }

        let all = self
            .videos
            .get(search.channel_id)
            .cloned()
            .unwrap_or_default();
        let (start, end) = page_bounds(all.len(), search.page_token, search.max_results);

        let items = all[start..end]
            .iter()
            .map(|video_id| SearchResult {
                id: if video_id.is_empty() {
                    ResourceId {
                        kind: Some("youtube#playlist".to_string()),
                        ..Default::default()
                    }
                } else {
                    ResourceId {
                        kind: Some("youtube#video".to_string()),
                        channel_id: None,
                        video_id: Some(video_id.clone()),
                    }
                },
            })
            .collect();

        Ok(SearchListResponse {
            items,
            next_page_token: next_page(end, all.len()),
        })
    }

    async fn comment_threads(
        &self,
        video_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<CommentThreadListResponse, RycError> {
        self.record(format!(
            "comment_threads({}, {}, {:?})",
            video_id, max_results, page_token
        ));

        let all = self.comments.get(video_id).cloned().unwrap_or_default();
        let (start, end) = page_bounds(all.len(), page_token, max_results);

        if let Some(&fail_from) = self.fail_comments_from.get(video_id) {
            if start >= fail_from {
                return Err(Self::server_error());
            }
        }

        Ok(CommentThreadListResponse {
            items: all[start..end]
                .iter()
                .map(|text| CommentThread::with_text(text.as_str()))
                .collect(),
            next_page_token: next_page(end, all.len()),
        })
    }
}

/// `n` distinct 11-character video IDs
pub(crate) fn video_ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("vid{:08}", i)).collect()
}

/// `n` distinct comment texts
pub(crate) fn comments(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("comment {}", i)).collect()
}
