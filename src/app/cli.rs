//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gesture Mouse - control the system cursor with hand gestures
#[derive(Parser, Debug)]
#[command(name = "gesture-mouse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start controlling the cursor from the webcam
    Run {
        /// Camera device index (overrides the config)
        #[arg(long)]
        camera: Option<u32>,

        /// Run duration in seconds (0 = until stopped with Ctrl+C)
        #[arg(short, long, default_value = "0")]
        duration: u64,

        /// Log cursor actions instead of injecting them
        #[arg(long)]
        dry_run: bool,
    },

    /// Check camera and detector setup without touching the cursor
    Probe {
        /// Number of frames to sample
        #[arg(short, long, default_value = "60")]
        frames: u32,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// View or reset configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
