//! The binary entry point for the orrery viewer.

use std::process::ExitCode;
use std::time::{Duration, SystemTime};

use clap::Parser;
use orrery_app::AppError;
use orrery_app::game_loop::GameLoop;
use orrery_app::platform::PlatformDirs;
use orrery_app::viewer::{DEFAULT_SCRIPT, Viewer, build_catalog, parse_script};
use orrery_config::{CliArgs, Config};
use tracing::info;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Startup errors can occur before the subscriber is installed.
            eprintln!("orrery: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let mut dirs = PlatformDirs::resolve()?;
    if let Some(config_dir) = &args.config {
        dirs.config_dir = config_dir.clone();
    }
    let config = load_config(&dirs, args)?;
    orrery_log::init_logging(Some(dirs.log_dir.as_path()), cfg!(debug_assertions), Some(&config));
    info!(
        config_dir = %dirs.config_dir.display(),
        log_dir = %dirs.log_dir.display(),
        "orrery starting"
    );

    let script = if args.focus.is_empty() {
        parse_script(DEFAULT_SCRIPT)
    } else {
        parse_script(args.focus.as_slice())
    };
    let catalog = build_catalog(&config, SystemTime::now());
    let mut viewer = Viewer::new(&config, catalog, script)?;

    let mut game_loop = GameLoop::new();
    while game_loop.update_count() < args.frames {
        game_loop.tick(|dt, _| {
            viewer.step(dt);
        });
        std::thread::sleep(Duration::from_millis(1));
    }

    info!(
        frames = game_loop.update_count(),
        sim_seconds = game_loop.total_sim_time(),
        focus = %viewer.headline(),
        "orrery finished"
    );
    Ok(())
}

/// Create the directories and load config with CLI overrides applied.
///
/// Runs before logging is initialized, so failures go back to `main` and are
/// printed to stderr.
fn load_config(dirs: &PlatformDirs, args: &CliArgs) -> Result<Config, AppError> {
    dirs.create_dirs()?;
    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    Ok(config)
}
