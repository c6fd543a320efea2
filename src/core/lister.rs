//! Channel video listing

use crate::error::RycError;
use crate::platform::{next_token, DataApi, VideoOrder, VideoSearch};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Largest page the search endpoint returns
pub const SEARCH_PAGE_SIZE: u32 = 50;

/// Upper bound for videos per channel run
pub const MAX_CHANNEL_VIDEOS: u32 = 100;

/// List up to `max_videos` video IDs of a channel, in API order.
///
/// Follows `nextPageToken` until enough IDs are gathered or results run out.
/// Non-video hits are skipped and repeated IDs are kept once.
pub async fn list_channel_videos(
    api: &dyn DataApi,
    channel_id: &str,
    max_videos: u32,
    order: VideoOrder,
) -> Result<Vec<String>, RycError> {
    let wanted = max_videos.min(MAX_CHANNEL_VIDEOS) as usize;
    info!(
        "Listing up to {} videos of {} by {:?}",
        wanted, channel_id, order
    );

    let mut video_ids = Vec::with_capacity(wanted);
    let mut seen = HashSet::new();
    let mut page_token: Option<String> = None;

    while video_ids.len() < wanted {
        let remaining = (wanted - video_ids.len()) as u32;
        let search = VideoSearch {
            channel_id,
            order,
            max_results: remaining.min(SEARCH_PAGE_SIZE),
            page_token: page_token.as_deref(),
        };
        let response = api.search_videos(&search).await?;
        debug!("Video search page returned {} items", response.items.len());

        for item in response.items {
            let Some(video_id) = item.id.video_id else {
                debug!("Skipping non-video search hit: {:?}", item.id.kind);
                continue;
            };
            if !seen.insert(video_id.clone()) {
                warn!("Duplicate video {} in search results", video_id);
                continue;
            }
            video_ids.push(video_id);
            if video_ids.len() >= wanted {
                break;
            }
        }

        match next_token(response.next_page_token) {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    info!("Found {} videos", video_ids.len());
    Ok(video_ids)
}
