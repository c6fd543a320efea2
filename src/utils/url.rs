//! URL utilities for extracting video IDs

use regex::Regex;
use std::sync::LazyLock;

/// Matches the `v=` query parameter followed by an 11-character video ID
static VIDEO_ID_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v=([a-zA-Z0-9_-]{11})").expect("valid video id pattern"));

/// Base URL of a watch page
pub const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Extract the video ID from a watch URL.
///
/// Only the `v=` query form is recognized; anything else yields `None`.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PARAM
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Watch URL for a video ID
pub fn watch_url(video_id: &str) -> String {
    format!("{}{}", WATCH_URL, video_id)
}
