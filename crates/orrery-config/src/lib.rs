//! Configuration for the orrery viewer.
//!
//! Settings persist to disk as `config.ron`, accept CLI overrides via clap,
//! and tolerate missing or unknown fields so older files keep loading.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, DEFAULT_FRAMES};
pub use config::{CONFIG_FILE, Config, DebugConfig, NavigationConfig, SimulationConfig, StartAngleMode};
pub use error::ConfigError;
