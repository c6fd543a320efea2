//! Paginated comment collection for a single video

use crate::core::progress::{Progress, ProgressCallback};
use crate::core::sanitize::{sanitize_comment, single_line};
use crate::error::RycError;
use crate::platform::{next_token, DataApi};
use crate::utils::comments_file_path;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

/// Largest page the commentThreads endpoint returns
pub const COMMENT_PAGE_SIZE: u32 = 100;

/// Why a collection job stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The requested maximum was reached
    Capped,
    /// The video has no more comment pages
    Exhausted,
}

/// Result of a finished collection job
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionOutcome {
    pub video_id: String,
    /// Comment file, one comment per line
    pub path: PathBuf,
    /// Number of comments written
    pub count: u64,
    pub termination: Termination,
}

/// Collects top-level comments of a video into `<output_dir>/<video_id>.txt`
pub struct CommentCollector {
    api: Arc<dyn DataApi>,
    output_dir: PathBuf,
    progress_callback: Option<ProgressCallback>,
}

impl CommentCollector {
    /// Create a collector writing into the current directory
    pub fn new(api: Arc<dyn DataApi>) -> Self {
        Self {
            api,
            output_dir: PathBuf::from("."),
            progress_callback: None,
        }
    }

    /// Set output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set progress callback
    pub fn with_progress(mut self, callback: impl Fn(&Progress) + Send + Sync + 'static) -> Self {
        self.progress_callback = Some(Arc::new(callback));
        self
    }

    pub(crate) fn with_progress_callback(mut self, callback: Option<ProgressCallback>) -> Self {
        self.progress_callback = callback;
        self
    }

    /// Collect at most `max_comments` comments of `video_id`.
    ///
    /// The file is truncated first and flushed after every page. If a page
    /// request fails the error is returned and the lines written so far stay
    /// on disk.
    pub async fn collect(
        &self,
        video_id: &str,
        max_comments: u64,
    ) -> Result<CollectionOutcome, RycError> {
        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = comments_file_path(&self.output_dir, video_id);
        info!(
            "Collecting up to {} comments of {} into {:?}",
            max_comments, video_id, path
        );

        let mut writer = BufWriter::new(File::create(&path).await?);
        let mut progress = Progress::new(video_id, max_comments);
        let mut collected: u64 = 0;
        let mut page_token: Option<String> = None;

        let termination = loop {
            if collected >= max_comments {
                break Termination::Capped;
            }

            let page_size = (max_comments - collected).min(COMMENT_PAGE_SIZE as u64) as u32;
            let page = self
                .api
                .comment_threads(video_id, page_size, page_token.as_deref())
                .await?;
            debug!(
                "Page of {} threads for {} ({} collected so far)",
                page.items.len(),
                video_id,
                collected
            );

            for thread in &page.items {
                let comment = single_line(&sanitize_comment(thread.text_display()));
                writer.write_all(comment.as_bytes()).await?;
                writer.write_all(b"\n").await?;

                collected += 1;
                progress.update(collected);
                self.report(&progress);

                if collected >= max_comments {
                    break;
                }
            }
            writer.flush().await?;

            if collected >= max_comments {
                break Termination::Capped;
            }
            match next_token(page.next_page_token) {
                Some(token) => page_token = Some(token),
                None => break Termination::Exhausted,
            }
        };

        writer.flush().await?;
        info!(
            "Collected {} comments of {} ({:?})",
            collected, video_id, termination
        );

        Ok(CollectionOutcome {
            video_id: video_id.to_string(),
            path,
            count: collected,
            termination,
        })
    }

    fn report(&self, progress: &Progress) {
        if let Some(callback) = &self.progress_callback {
            callback(progress);
        }
    }
}
