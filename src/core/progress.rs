//! Progress tracking for comment collection

use std::sync::Arc;
use std::time::{Duration, Instant};

/// Callback receiving progress updates
pub type ProgressCallback = Arc<dyn Fn(&Progress) + Send + Sync>;

/// Progress information for one collection job
#[derive(Debug, Clone)]
pub struct Progress {
    /// Video being collected
    pub video_id: String,
    /// Requested maximum number of comments
    pub target: u64,
    /// Number of comments written so far
    pub collected: u64,
    /// `collected / target`, clamped to 0.0..=1.0
    pub fraction: f64,
    /// Comments per second
    pub rate: Option<f64>,
    /// Estimated time until the cap is reached
    pub eta: Option<Duration>,
    /// Time when collection started
    pub start_time: Instant,
}

impl Progress {
    /// Create a new progress tracker
    pub fn new(video_id: &str, target: u64) -> Self {
        Self {
            video_id: video_id.to_string(),
            target,
            collected: 0,
            fraction: 0.0,
            rate: None,
            eta: None,
            start_time: Instant::now(),
        }
    }

    /// Update progress with the new collected count
    pub fn update(&mut self, collected: u64) {
        self.collected = collected;
        self.fraction = if self.target > 0 {
            (collected as f64 / self.target as f64).min(1.0)
        } else {
            1.0
        };

        let elapsed = self.start_time.elapsed();
        if elapsed.as_millis() > 0 {
            let rate = collected as f64 / elapsed.as_secs_f64();
            self.rate = Some(rate);

            if rate > 0.0 && self.target > collected {
                let remaining = self.target - collected;
                self.eta = Some(Duration::from_secs_f64(remaining as f64 / rate));
            } else {
                self.eta = None;
            }
        }
    }

    /// Fraction as a whole percentage
    pub fn percent(&self) -> u64 {
        (self.fraction * 100.0).round() as u64
    }

    /// Get human-readable rate string
    pub fn rate_string(&self) -> String {
        match self.rate {
            Some(rate) => format!("{:.1} comments/s", rate),
            None => "Unknown".to_string(),
        }
    }

    /// Get human-readable ETA string
    pub fn eta_string(&self) -> String {
        match self.eta {
            Some(eta) => format_duration(eta),
            None => "Unknown".to_string(),
        }
    }
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    if total_seconds < 60 {
        format!("{}s", total_seconds)
    } else if total_seconds < 3600 {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        if seconds == 0 {
            format!("{}m", minutes)
        } else {
            format!("{}m {}s", minutes, seconds)
        }
    } else {
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        if minutes == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, minutes)
        }
    }
}
