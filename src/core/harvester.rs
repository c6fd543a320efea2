//! Channel and video collection runs

use crate::core::collector::{CollectionOutcome, CommentCollector};
use crate::core::lister::list_channel_videos;
use crate::core::progress::{Progress, ProgressCallback};
use crate::core::resolver::resolve_channel_id;
use crate::error::RycError;
use crate::platform::{DataApi, VideoOrder};
use crate::utils::{build_archive_async, extract_video_id, DEFAULT_ARCHIVE_NAME};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Comments collected per video in video mode unless told otherwise
pub const DEFAULT_VIDEO_MAX_COMMENTS: u64 = 5000;

/// Run configuration
#[derive(Debug, Clone)]
pub struct HarvestOptions {
    /// Directory receiving comment files and the archive
    pub output_dir: PathBuf,
    /// File name of the channel-mode archive
    pub archive_name: String,
    /// Pause between two videos of a channel run
    pub video_delay: Duration,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
            video_delay: Duration::from_secs(2),
        }
    }
}

/// Parameters of a channel run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRequest {
    pub handle: String,
    pub order: VideoOrder,
    pub max_videos: u32,
    pub max_comments_per_video: u64,
}

impl ChannelRequest {
    pub fn new(handle: &str) -> Self {
        Self {
            handle: handle.to_string(),
            order: VideoOrder::Popularity,
            max_videos: 20,
            max_comments_per_video: 2000,
        }
    }

    pub fn with_order(mut self, order: VideoOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_max_videos(mut self, max_videos: u32) -> Self {
        self.max_videos = max_videos;
        self
    }

    pub fn with_max_comments(mut self, max_comments: u64) -> Self {
        self.max_comments_per_video = max_comments;
        self
    }
}

/// Result of a channel run
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelReport {
    pub channel_id: String,
    pub videos: Vec<CollectionOutcome>,
    /// `None` when the channel had no videos
    pub archive: Option<PathBuf>,
}

impl ChannelReport {
    /// Comments collected across all videos
    pub fn total_comments(&self) -> u64 {
        self.videos.iter().map(|v| v.count).sum()
    }
}

/// Milestones of a run, in the order they happen
#[derive(Debug, Clone, PartialEq)]
pub enum HarvestEvent {
    ChannelResolved {
        handle: String,
        channel_id: String,
    },
    VideosListed {
        video_ids: Vec<String>,
    },
    VideoStarted {
        index: usize,
        total: usize,
        video_id: String,
        max_comments: u64,
    },
    VideoCompleted(CollectionOutcome),
    ArchiveCreated {
        path: PathBuf,
    },
}

type EventCallback = Arc<dyn Fn(&HarvestEvent) + Send + Sync>;

/// Drives resolution, listing, collection and archiving
pub struct Harvester {
    api: Arc<dyn DataApi>,
    options: HarvestOptions,
    progress_callback: Option<ProgressCallback>,
    event_callback: Option<EventCallback>,
}

impl Harvester {
    /// Create a harvester with default options
    pub fn new(api: Arc<dyn DataApi>) -> Self {
        Self {
            api,
            options: HarvestOptions::default(),
            progress_callback: None,
            event_callback: None,
        }
    }

    /// Replace all options
    pub fn with_options(mut self, options: HarvestOptions) -> Self {
        self.options = options;
        self
    }

    /// Set output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.output_dir = dir.into();
        self
    }

    /// Set archive file name
    pub fn with_archive_name(mut self, name: &str) -> Self {
        self.options.archive_name = name.to_string();
        self
    }

    /// Set pause between videos
    pub fn with_video_delay(mut self, delay: Duration) -> Self {
        self.options.video_delay = delay;
        self
    }

    /// Set progress callback
    pub fn with_progress(mut self, callback: impl Fn(&Progress) + Send + Sync + 'static) -> Self {
        self.progress_callback = Some(Arc::new(callback));
        self
    }

    /// Set event callback
    pub fn with_events(mut self, callback: impl Fn(&HarvestEvent) + Send + Sync + 'static) -> Self {
        self.event_callback = Some(Arc::new(callback));
        self
    }

    /// Collect comments of the videos of a channel and archive the files.
    ///
    /// Any error ends the run. Files of videos completed before the error stay
    /// on disk, but no archive is built.
    pub async fn harvest_channel(&self, request: &ChannelRequest) -> Result<ChannelReport, RycError> {
        let channel_id = resolve_channel_id(self.api.as_ref(), &request.handle).await?;
        info!("Channel {} resolved to {}", request.handle, channel_id);
        self.emit(HarvestEvent::ChannelResolved {
            handle: request.handle.clone(),
            channel_id: channel_id.clone(),
        });

        let video_ids = list_channel_videos(
            self.api.as_ref(),
            &channel_id,
            request.max_videos,
            request.order,
        )
        .await?;
        self.emit(HarvestEvent::VideosListed {
            video_ids: video_ids.clone(),
        });

        let collector = self.collector();
        let total = video_ids.len();
        let mut videos = Vec::with_capacity(total);

        for (index, video_id) in video_ids.iter().enumerate() {
            if index > 0 && !self.options.video_delay.is_zero() {
                debug!("Sleeping {:?} before next video", self.options.video_delay);
                tokio::time::sleep(self.options.video_delay).await;
            }

            self.emit(HarvestEvent::VideoStarted {
                index,
                total,
                video_id: video_id.clone(),
                max_comments: request.max_comments_per_video,
            });
            let outcome = collector
                .collect(video_id, request.max_comments_per_video)
                .await?;
            self.emit(HarvestEvent::VideoCompleted(outcome.clone()));
            videos.push(outcome);
        }

        let archive = if videos.is_empty() {
            info!("No videos collected, skipping archive");
            None
        } else {
            let files = videos.iter().map(|v| v.path.clone()).collect();
            let archive_path = self.options.output_dir.join(&self.options.archive_name);
            let path = build_archive_async(files, archive_path).await?;
            self.emit(HarvestEvent::ArchiveCreated { path: path.clone() });
            Some(path)
        };

        Ok(ChannelReport {
            channel_id,
            videos,
            archive,
        })
    }

    /// Collect comments of the video a watch URL points to
    pub async fn harvest_video(
        &self,
        video_url: &str,
        max_comments: u64,
    ) -> Result<CollectionOutcome, RycError> {
        let video_id = extract_video_id(video_url)
            .ok_or_else(|| RycError::InvalidUrl(video_url.to_string()))?;
        info!("Video ID found: {}", video_id);

        self.emit(HarvestEvent::VideoStarted {
            index: 0,
            total: 1,
            video_id: video_id.clone(),
            max_comments,
        });
        let outcome = self.collector().collect(&video_id, max_comments).await?;
        self.emit(HarvestEvent::VideoCompleted(outcome.clone()));

        Ok(outcome)
    }

    fn collector(&self) -> CommentCollector {
        CommentCollector::new(self.api.clone())
            .with_output_dir(self.options.output_dir.clone())
            .with_progress_callback(self.progress_callback.clone())
    }

    fn emit(&self, event: HarvestEvent) {
        if let Some(callback) = &self.event_callback {
            callback(&event);
        }
    }
}
