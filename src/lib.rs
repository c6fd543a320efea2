//! # ryc - Rust YouTube Comments
//!
//! Collects the comments of a single video, or of the videos of a whole
//! channel, through the YouTube Data API v3.
//!
//! ## Features
//!
//! - Channel handle resolution and video listing by date or popularity
//! - Paginated comment collection with a per-video cap
//! - Removal of embedded timestamp/link markup from comment text
//! - One text file per video, flushed page by page
//! - Zip archive of a channel run
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ryc::{ChannelRequest, Harvester, VideoOrder, YouTubeDataApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = YouTubeDataApi::new("API_KEY")?;
//!     let harvester = Harvester::new(Arc::new(api)).with_output_dir("./comments");
//!
//!     let request = ChannelRequest::new("@channel")
//!         .with_max_videos(5)
//!         .with_max_comments(200)
//!         .with_order(VideoOrder::Date);
//!     let report = harvester.harvest_channel(&request).await?;
//!     println!("Archive: {:?}", report.archive);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod platform;
pub mod utils;

// Re-export main types
pub use crate::core::{
    ChannelReport, ChannelRequest, CollectionOutcome, CommentCollector, HarvestEvent,
    HarvestOptions, Harvester, Progress, Termination, VideoOrder,
};
pub use error::RycError;
pub use platform::{DataApi, YouTubeDataApi};

/// Result type alias for ryc operations
pub type Result<T> = std::result::Result<T, RycError>;
