//! Gesture drive application: replay hand landmarks, drive a vehicle.

use anyhow::Result;
use clap::Parser;
use gesture_drive::app::DriveApp;
use gesture_drive::config::Config;
use gesture_drive::source::{LandmarkSource, ReplaySource};
use log::{info, warn};
use std::io::{self, BufReader};
use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN_REQUESTED: AtomicBool = AtomicBool::new(false);

extern "C" fn handle_sigint(_sig: libc::c_int) {
    SHUTDOWN_REQUESTED.store(true, Ordering::SeqCst);
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark capture to replay (JSON lines, '-' for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Vehicle base URL (overrides the config file)
    #[arg(short, long)]
    url: Option<String>,

    /// Per-send timeout in milliseconds (overrides the config file)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Control variant: direction, finger-count or pinch (overrides the config file)
    #[arg(long)]
    variant: Option<String>,

    /// Replay pacing in frames per second, 0 for unpaced (overrides the config file)
    #[arg(long)]
    fps: Option<u32>,

    /// Log commands instead of sending them
    #[arg(long)]
    dry_run: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Gesture Drive");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Apply command line overrides
    if let Some(url) = args.url {
        config.vehicle.base_url = url;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.vehicle.send_timeout_ms = timeout_ms;
    }
    if let Some(variant) = args.variant {
        config.control.variant = variant;
    }
    if let Some(fps) = args.fps {
        config.replay.fps = fps;
    }

    // Open the landmark source
    let source: Box<dyn LandmarkSource> = if args.input == "-" {
        info!("Replaying landmark frames from stdin");
        Box::new(ReplaySource::new(BufReader::new(io::stdin())))
    } else {
        info!("Replaying landmark frames from: {}", args.input);
        Box::new(ReplaySource::from_path(&args.input)?)
    };

    let transport = config.create_transport(args.dry_run);

    // Stop cleanly on Ctrl-C
    unsafe {
        libc::signal(libc::SIGINT, handle_sigint as libc::sighandler_t);
    }

    // Create and run application
    let mut app = DriveApp::new(&config, source, transport)?;
    let summary = app.run_until(&SHUTDOWN_REQUESTED)?;

    info!(
        "Processed {} frames: {} sent, {} suppressed, {} failed",
        summary.frames, summary.sent, summary.suppressed, summary.failed
    );

    Ok(())
}
