//! Gesture Mouse - webcam-driven virtual mouse
//!
//! Tracks one hand through a webcam and steers the system cursor with the
//! index finger; pinching index and middle fingertips clicks.

use gesture_mouse::actuator::cursor::{CursorActuator, ScreenSize};
use gesture_mouse::actuator::system::{DryRunCursor, SystemCursor};
use gesture_mouse::app::cli::{Cli, Commands, ConfigAction};
use gesture_mouse::app::config::Config;
use gesture_mouse::capture::camera::{VideoSource, Webcam};
use gesture_mouse::pipeline::runner::{FrameOutcome, Pipeline};
use gesture_mouse::tracking::mediapipe::MediaPipeDetector;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Screen stand-in for modes that never touch the real cursor
const DRY_RUN_SCREEN: ScreenSize = ScreenSize {
    width: 1920,
    height: 1080,
};

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    // Execute command
    match cli.command {
        Commands::Run {
            camera,
            duration,
            dry_run,
        } => {
            run_track(camera, duration, dry_run, &config)?;
        }
        Commands::Probe { frames } => {
            run_probe(frames, &config)?;
        }
        Commands::Init { force } => {
            run_init(force, &config)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

fn run_track(
    camera: Option<u32>,
    duration: u64,
    dry_run: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(index) = camera {
        config.capture.camera_index = index;
    }

    info!("Opening camera {}", config.capture.camera_index);
    let mut source = Webcam::open(
        config.capture.camera_index,
        config.capture.frame_width,
        config.capture.frame_height,
    )?;

    let detector = MediaPipeDetector::spawn(&config.tracking)?;

    let actuator: Box<dyn CursorActuator> = if dry_run {
        info!("Dry run: cursor actions are logged, not injected");
        Box::new(DryRunCursor::new(DRY_RUN_SCREEN))
    } else {
        Box::new(SystemCursor::new()?)
    };

    let mut pipeline = Pipeline::new(detector, actuator, &config, source.dimensions())?;
    let screen = pipeline.screen();
    info!(
        "Mapping gestures onto a {}x{} screen; index finger moves, index+middle pinch clicks",
        screen.width, screen.height
    );

    // Set up Ctrl+C handler
    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_flag_handler = stop_flag.clone();
    ctrlc::set_handler(move || {
        stop_flag_handler.store(true, Ordering::SeqCst);
    })?;

    info!("Running... Press Ctrl+C to stop");

    let limit = (duration > 0).then(|| Duration::from_secs(duration));
    let stats = pipeline.run(&mut source, &stop_flag, limit)?;

    println!("\nSession summary");
    println!("  Frames:  {}", stats.frames);
    println!("  Hands:   {}", stats.hands);
    println!("  Moves:   {}", stats.moves);
    println!("  Clicks:  {}", stats.clicks);
    println!("  Skipped: {}", stats.skipped);

    Ok(())
}

fn run_probe(frames: u32, config: &Config) -> anyhow::Result<()> {
    if !MediaPipeDetector::available(&config.tracking) {
        warn!(
            "Detector helper not found (script: {:?}, python: {:?})",
            config.tracking.script_path, config.tracking.python_path
        );
        anyhow::bail!(
            "detector helper unavailable; install it with: python3 -m venv .venv && \
             .venv/bin/pip install mediapipe numpy"
        );
    }

    let mut source = Webcam::open(
        config.capture.camera_index,
        config.capture.frame_width,
        config.capture.frame_height,
    )?;
    let detector = MediaPipeDetector::spawn(&config.tracking)?;
    let mut pipeline = Pipeline::new(
        detector,
        DryRunCursor::new(DRY_RUN_SCREEN),
        config,
        source.dimensions(),
    )?;

    let mut hands = 0u32;
    let mut moves = 0u32;
    let mut clicks = 0u32;
    let mut skipped = 0u32;
    let mut sampled = 0u32;

    info!("Sampling {} frames", frames);
    for _ in 0..frames {
        let Some(frame) = source.next_frame()? else {
            break;
        };
        let frame = if config.capture.mirror {
            frame.mirrored()
        } else {
            frame
        };
        sampled += 1;

        match pipeline.process_frame(&frame) {
            Ok(FrameOutcome::NoHand) => {}
            Ok(FrameOutcome::Moved { .. }) => {
                hands += 1;
                moves += 1;
            }
            Ok(FrameOutcome::Clicked { .. }) => {
                hands += 1;
                clicks += 1;
            }
            Ok(_) => hands += 1,
            Err(e) => {
                warn!("Frame skipped: {}", e);
                skipped += 1;
            }
        }
    }

    println!("\nProbe report");
    println!("  Frames sampled:    {}", sampled);
    println!("  Hands detected:    {}", hands);
    println!("  Move gestures:     {}", moves);
    println!("  Click gestures:    {}", clicks);
    println!("  Skipped frames:    {}", skipped);
    if hands == 0 && sampled > 0 {
        println!("\nNo hand seen. Check lighting and hold your hand inside the camera view.");
    }

    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let config_path = Config::default_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}. Use --force to overwrite.",
            config_path
        );
    }

    config.save_default()?;
    println!("Created config at {:?}", config_path);
    println!("\nConfig content:\n{}", config.to_toml()?);

    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("Configuration ({:?}):\n", Config::default_path());
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Reset { force } => {
            let config_path = Config::default_path();

            if config_path.exists() && !force {
                println!("Config exists at {:?}", config_path);
                println!("Use --force to reset to defaults");
                return Ok(());
            }

            let default_config = Config::default();
            default_config.save_default()?;
            println!("Configuration reset to defaults at {:?}", config_path);
        }
    }

    Ok(())
}
