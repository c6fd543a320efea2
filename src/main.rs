//! Main entry point for ryc CLI

use anyhow::Context;
use clap::Parser;
use ryc::cli::output::{create_event_callback, create_progress_callback, describe_error};
use ryc::cli::{Args, OutputFormatter, RunMode, VerbosityLevel};
use ryc::{Harvester, RycError, YouTubeDataApi};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    init_logging(args.verbose)?;
    debug!(
        "Starting ryc: output={}, archive={}, timeout={}",
        args.output.display(),
        args.archive_name,
        args.timeout
    );

    let formatter = Arc::new(
        OutputFormatter::new(args.verbosity_level()).with_progress_bars(!args.no_progress),
    );

    if let Err(e) = run(&args, formatter.clone()).await {
        formatter.finish_progress();
        error!("Run failed: {}", e);
        formatter.error(&describe_error(&e));
        std::process::exit(1);
    }

    Ok(())
}

/// Run the selected collection mode
async fn run(args: &Args, formatter: Arc<OutputFormatter>) -> Result<(), RycError> {
    let api = YouTubeDataApi::with_config(args.api_key(), args.http_config())?;

    let mut harvester = Harvester::new(Arc::new(api))
        .with_options(args.harvest_options())
        .with_events(create_event_callback(formatter.clone()));

    if !args.no_progress && args.verbosity_level() != VerbosityLevel::Quiet {
        harvester = harvester.with_progress(create_progress_callback(formatter.clone()));
    }

    let start_time = Instant::now();

    match args.run_mode() {
        RunMode::Channel(request) => {
            info!("Collecting channel {}", request.handle);
            let report = harvester.harvest_channel(&request).await?;
            formatter.print_channel_summary(&report, start_time.elapsed());
        }
        RunMode::Video { url, max_comments } => {
            info!("Collecting video {}", url);
            let outcome = harvester.harvest_video(url, max_comments).await?;
            formatter.print_video_summary(&outcome, start_time.elapsed());
        }
    }

    Ok(())
}

/// Initialize logging system
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "ryc=debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}
