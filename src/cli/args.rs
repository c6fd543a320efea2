//! Command line argument parsing

use crate::core::{
    ChannelRequest, HarvestOptions, VideoOrder, DEFAULT_VIDEO_MAX_COMMENTS, MAX_CHANNEL_VIDEOS,
};
use crate::platform::{HttpClientConfig, DEFAULT_API_BASE};
use crate::utils::DEFAULT_ARCHIVE_NAME;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Rust YouTube Comments - collect the comments of a video or a whole channel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Directory for comment files and the archive
    #[arg(short, long, value_name = "DIR", default_value = ".", global = true)]
    pub output: PathBuf,

    /// Archive file name (channel mode)
    #[arg(long, value_name = "NAME", default_value = DEFAULT_ARCHIVE_NAME, global = true)]
    pub archive_name: String,

    /// HTTP timeout (e.g., 30s, 1m)
    #[arg(long, value_name = "DURATION", default_value = "30s", global = true)]
    pub timeout: humantime::Duration,

    /// Override User-Agent header
    #[arg(long, value_name = "USER_AGENT", global = true)]
    pub user_agent: Option<String>,

    /// Proxy URL (http/https/socks)
    #[arg(long, value_name = "URL", global = true)]
    pub proxy: Option<String>,

    /// API base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE, hide = true, global = true)]
    pub api_base_url: String,

    /// Disable progress output
    #[arg(long, global = true)]
    pub no_progress: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (only errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Collection mode
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Collect comments of the videos of a channel and zip the results
    Channel {
        /// Channel handle, e.g. @name
        handle: String,

        /// Video ordering
        #[arg(long, value_enum, default_value = "popularity")]
        order: OrderArg,

        /// Number of videos to collect
        #[arg(long, default_value = "20", value_parser = clap::value_parser!(u32).range(1..=MAX_CHANNEL_VIDEOS as i64))]
        max_videos: u32,

        /// Number of comments per video
        #[arg(long, default_value = "2000", value_parser = clap::value_parser!(u64).range(10..=5000))]
        max_comments: u64,

        /// Pause between videos (e.g., 2s, 500ms)
        #[arg(long, value_name = "DURATION", default_value = "2s")]
        delay: humantime::Duration,
    },

    /// Collect comments of a single video
    Video {
        /// Watch URL, e.g. https://www.youtube.com/watch?v=xxxxxxxxxxx
        url: String,

        /// Number of comments to collect
        #[arg(long, default_value_t = DEFAULT_VIDEO_MAX_COMMENTS, value_parser = clap::value_parser!(u64).range(1..=5000))]
        max_comments: u64,
    },
}

/// Video ordering in channel mode
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OrderArg {
    /// Most viewed first
    Popularity,
    /// Most recent first
    Date,
}

impl From<OrderArg> for VideoOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Popularity => VideoOrder::Popularity,
            OrderArg::Date => VideoOrder::Date,
        }
    }
}

impl Args {
    /// Get HTTP timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        self.timeout.into()
    }

    /// API key, empty when none was given
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }

    /// HTTP client configuration
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            base_url: self.api_base_url.clone(),
            timeout: self.timeout_duration(),
            user_agent: self.user_agent.clone(),
            proxy_url: self.proxy.clone(),
        }
    }

    /// Harvest options
    pub fn harvest_options(&self) -> HarvestOptions {
        let video_delay = match &self.command {
            Command::Channel { delay, .. } => (*delay).into(),
            Command::Video { .. } => Duration::ZERO,
        };
        HarvestOptions {
            output_dir: self.output.clone(),
            archive_name: self.archive_name.clone(),
            video_delay,
        }
    }

    /// Collection run selected by the subcommand
    pub fn run_mode(&self) -> RunMode<'_> {
        match &self.command {
            Command::Channel {
                handle,
                order,
                max_videos,
                max_comments,
                ..
            } => RunMode::Channel(
                ChannelRequest::new(handle)
                    .with_order((*order).into())
                    .with_max_videos(*max_videos)
                    .with_max_comments(*max_comments),
            ),
            Command::Video { url, max_comments } => RunMode::Video {
                url,
                max_comments: *max_comments,
            },
        }
    }

    /// Get output verbosity level
    pub fn verbosity_level(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else if self.verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }
}

/// Core parameters of a collection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode<'a> {
    Channel(ChannelRequest),
    Video { url: &'a str, max_comments: u64 },
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbosityLevel {
    /// Quiet (only errors)
    Quiet,
    /// Normal
    Normal,
    /// Verbose (debug info)
    Verbose,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("ryc").chain(args.iter().copied()))
    }

    #[test]
    fn test_channel_defaults() {
        let args = parse(&["--api-key", "k", "channel", "@rustlang"]).unwrap();

        assert_eq!(
            args.command,
            Command::Channel {
                handle: "@rustlang".to_string(),
                order: OrderArg::Popularity,
                max_videos: 20,
                max_comments: 2000,
                delay: humantime::Duration::from(Duration::from_secs(2)),
            }
        );
        assert_eq!(args.output, PathBuf::from("."));
        assert_eq!(args.archive_name, "comentarios_coletados.zip");
        assert_eq!(args.api_base_url, DEFAULT_API_BASE);
        assert_eq!(args.timeout_duration(), Duration::from_secs(30));
        assert_eq!(args.verbosity_level(), VerbosityLevel::Normal);
    }

    #[test]
    fn test_run_mode_channel() {
        let args = parse(&[
            "channel",
            "@rustlang",
            "--order",
            "date",
            "--max-videos",
            "5",
            "--max-comments",
            "100",
        ])
        .unwrap();

        let RunMode::Channel(request) = args.run_mode() else {
            panic!("expected channel mode");
        };
        assert_eq!(request.handle, "@rustlang");
        assert_eq!(request.order, VideoOrder::Date);
        assert_eq!(request.max_videos, 5);
        assert_eq!(request.max_comments_per_video, 100);
    }

    #[test]
    fn test_channel_ranges() {
        assert!(parse(&["channel", "@x", "--max-videos", "0"]).is_err());
        assert!(parse(&["channel", "@x", "--max-videos", "101"]).is_err());
        assert!(parse(&["channel", "@x", "--max-videos", "100"]).is_ok());
        assert!(parse(&["channel", "@x", "--max-comments", "9"]).is_err());
        assert!(parse(&["channel", "@x", "--max-comments", "5001"]).is_err());
    }

    #[test]
    fn test_video_defaults() {
        let args = parse(&["video", "https://www.youtube.com/watch?v=dQw4w9WgXcQ"]).unwrap();

        assert_eq!(
            args.command,
            Command::Video {
                url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
                max_comments: 5000,
            }
        );
        assert_eq!(
            args.run_mode(),
            RunMode::Video {
                url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                max_comments: 5000,
            }
        );
        assert_eq!(args.harvest_options().video_delay, Duration::ZERO);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&[
            "video",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "-o",
            "/tmp/out",
            "--quiet",
            "--timeout",
            "1m",
        ])
        .unwrap();

        assert_eq!(args.output, PathBuf::from("/tmp/out"));
        assert_eq!(args.verbosity_level(), VerbosityLevel::Quiet);
        assert_eq!(args.http_config().timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_harvest_options() {
        let args = parse(&[
            "channel",
            "@x",
            "--delay",
            "500ms",
            "--archive-name",
            "x.zip",
            "--output",
            "out",
        ])
        .unwrap();

        let options = args.harvest_options();
        assert_eq!(options.video_delay, Duration::from_millis(500));
        assert_eq!(options.archive_name, "x.zip");
        assert_eq!(options.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_http_config() {
        let args = parse(&[
            "--proxy",
            "http://proxy:8080",
            "--user-agent",
            "Custom Agent",
            "video",
            "u",
        ])
        .unwrap();

        let config = args.http_config();
        assert_eq!(config.proxy_url.as_deref(), Some("http://proxy:8080"));
        assert_eq!(config.user_agent.as_deref(), Some("Custom Agent"));
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(parse(&["-v", "-q", "video", "u"]).is_err());
        let args = parse(&["-v", "video", "u"]).unwrap();
        assert_eq!(args.verbosity_level(), VerbosityLevel::Verbose);
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(parse(&["--api-key", "k"]).is_err());
    }
}
