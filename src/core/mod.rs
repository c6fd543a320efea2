//! Core collection functionality

pub mod collector;
pub mod harvester;
pub mod lister;
pub mod progress;
pub mod resolver;
pub mod sanitize;

#[cfg(test)]
pub(crate) mod testing;

pub use collector::{CollectionOutcome, CommentCollector, Termination, COMMENT_PAGE_SIZE};
pub use harvester::{
    ChannelReport, ChannelRequest, HarvestEvent, HarvestOptions, Harvester,
    DEFAULT_VIDEO_MAX_COMMENTS,
};
pub use lister::{list_channel_videos, MAX_CHANNEL_VIDEOS, SEARCH_PAGE_SIZE};
pub use progress::{Progress, ProgressCallback};
pub use resolver::resolve_channel_id;
pub use sanitize::sanitize_comment;

pub use crate::platform::VideoOrder;
