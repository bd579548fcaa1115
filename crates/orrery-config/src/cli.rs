//! Command-line argument parsing for the orrery viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Orbital viewer camera navigation")]
pub struct CliArgs {
    /// Simulated days per real second.
    #[arg(long)]
    pub speed: Option<f64>,

    /// Focus transition duration in milliseconds.
    #[arg(long)]
    pub transition_ms: Option<f64>,

    /// Easing curve (linear, ease_in, ease_out, ease_in_out).
    #[arg(long)]
    pub easing: Option<String>,

    /// Comma-separated focus script, e.g. `earth,moon,back,sun`.
    #[arg(long, value_delimiter = ',')]
    pub focus: Vec<String>,

    /// Number of frames to simulate before exiting.
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    pub frames: u64,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Frames simulated when `--frames` is not given.
pub const DEFAULT_FRAMES: u64 = 600;

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            speed: None,
            transition_ms: None,
            easing: None,
            focus: Vec::new(),
            frames: DEFAULT_FRAMES,
            log_level: None,
            config: None,
        }
    }
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(speed) = args.speed {
            self.simulation.speed_days_per_second = speed;
        }
        if let Some(ms) = args.transition_ms {
            self.navigation.transition_ms = ms;
        }
        if let Some(ref easing) = args.easing {
            self.navigation.easing = easing.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
