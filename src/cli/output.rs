//! Output formatting and progress display

use crate::cli::args::VerbosityLevel;
use crate::core::progress::{format_duration, Progress};
use crate::core::{ChannelReport, CollectionOutcome, HarvestEvent, Termination};
use crate::error::RycError;
use crate::utils::watch_url;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";

/// Output formatter for ryc
pub struct OutputFormatter {
    verbosity: VerbosityLevel,
    show_progress: bool,
    progress_bar: Mutex<Option<ProgressBar>>,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(verbosity: VerbosityLevel) -> Self {
        Self {
            verbosity,
            show_progress: true,
            progress_bar: Mutex::new(None),
        }
    }

    /// Enable or disable progress bars
    pub fn with_progress_bars(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    /// Start a progress bar for one video
    pub fn start_progress(&self, video_id: &str, target: u64) -> Option<ProgressBar> {
        if self.verbosity == VerbosityLevel::Quiet || !self.show_progress {
            return None;
        }

        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let progress_bar = ProgressBar::new(target);
        progress_bar.set_style(style);
        progress_bar.set_message(video_id.to_string());

        if let Ok(mut slot) = self.progress_bar.lock() {
            if let Some(previous) = slot.replace(progress_bar.clone()) {
                previous.finish_and_clear();
            }
        }
        Some(progress_bar)
    }

    /// Update progress bar
    pub fn update_progress(&self, progress: &Progress) {
        if let Ok(slot) = self.progress_bar.lock() {
            if let Some(progress_bar) = slot.as_ref() {
                progress_bar.set_length(progress.target);
                progress_bar.set_position(progress.collected.min(progress.target));
                if self.verbosity == VerbosityLevel::Verbose {
                    progress_bar.set_message(verbose_message(progress));
                }
            }
        }
    }

    /// Remove the current progress bar
    pub fn finish_progress(&self) {
        if let Ok(mut slot) = self.progress_bar.lock() {
            if let Some(progress_bar) = slot.take() {
                progress_bar.finish_and_clear();
            }
        }
    }

    fn has_progress_bar(&self) -> bool {
        self.progress_bar
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    /// Print info message
    pub fn info(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            println!("{} {}", "ℹ".blue(), message);
        }
    }

    /// Print success message
    pub fn success(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            println!("{} {}", "✔".green().bold(), message);
        }
    }

    /// Print warning message
    pub fn warning(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            eprintln!("{} {}", "⚠".yellow(), message);
        }
    }

    /// Print error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✖".red().bold(), message);
    }

    /// Print debug message
    pub fn debug(&self, message: &str) {
        if self.verbosity == VerbosityLevel::Verbose {
            println!("{} {}", "·".dimmed(), message);
        }
    }

    /// Render a run milestone
    pub fn handle_event(&self, event: &HarvestEvent) {
        match event {
            HarvestEvent::ChannelResolved { handle, channel_id } => {
                self.info(&format!("Channel {} found: {}", handle, channel_id));
            }
            HarvestEvent::VideosListed { video_ids } => {
                self.info(&format!("Videos found: {}", video_ids.len()));
                self.debug(&video_ids.join(", "));
            }
            HarvestEvent::VideoStarted {
                index,
                total,
                video_id,
                max_comments,
            } => {
                self.info(&format!(
                    "Collecting comments of video {}/{}: {}",
                    index + 1,
                    total,
                    video_id
                ));
                self.debug(&watch_url(video_id));
                self.start_progress(video_id, *max_comments);
            }
            HarvestEvent::VideoCompleted(outcome) => {
                self.finish_progress();
                self.print_video_result(outcome);
            }
            HarvestEvent::ArchiveCreated { path } => {
                self.debug(&format!("Archive written to {}", path.display()));
            }
        }
    }

    /// Print the result line of one video
    pub fn print_video_result(&self, outcome: &CollectionOutcome) {
        let reason = match outcome.termination {
            Termination::Capped => "limit reached",
            Termination::Exhausted => "all comments",
        };
        self.success(&format!(
            "Collected {} comments for video {} ({})",
            outcome.count, outcome.video_id, reason
        ));
    }

    /// Print the summary of a channel run
    pub fn print_channel_summary(&self, report: &ChannelReport, duration: Duration) {
        if self.verbosity == VerbosityLevel::Quiet {
            return;
        }

        println!();
        self.success(&format!(
            "Collection finished: {} comments from {} videos in {}",
            report.total_comments(),
            report.videos.len(),
            format_duration(duration)
        ));
        match &report.archive {
            Some(path) => println!("📦 Archive: {}", path.display()),
            None => self.warning("The channel returned no videos; no archive was created"),
        }
    }

    /// Print the summary of a video run
    pub fn print_video_summary(&self, outcome: &CollectionOutcome, duration: Duration) {
        if self.verbosity == VerbosityLevel::Quiet {
            return;
        }

        println!();
        println!("💾 Comments file: {}", outcome.path.display());
        println!("⏱️  Time: {}", format_duration(duration));
    }
}

/// Progress bar message in verbose mode
fn verbose_message(progress: &Progress) -> String {
    format!(
        "{} {}% {} ETA {}",
        progress.video_id,
        progress.percent(),
        progress.rate_string(),
        progress.eta_string()
    )
}

/// User-facing text for a failed run
pub fn describe_error(error: &RycError) -> String {
    match error {
        RycError::MissingCredential => {
            "Please provide your YouTube API key (--api-key or YOUTUBE_API_KEY).".to_string()
        }
        RycError::ChannelNotFound(handle) => {
            format!("Could not find a channel for the handle {}.", handle)
        }
        RycError::InvalidUrl(_) => format!(
            "Invalid URL! Make sure it looks like {}",
            watch_url("xxxxxxxxxxx")
        ),
        other => format!("Collection failed: {}", other),
    }
}

/// Create a progress callback for the harvester
pub fn create_progress_callback(
    formatter: Arc<OutputFormatter>,
) -> impl Fn(&Progress) + Send + Sync + 'static {
    move |progress: &Progress| {
        formatter.update_progress(progress);
    }
}

/// Create an event callback for the harvester
pub fn create_event_callback(
    formatter: Arc<OutputFormatter>,
) -> impl Fn(&HarvestEvent) + Send + Sync + 'static {
    move |event: &HarvestEvent| {
        formatter.handle_event(event);
    }
}
