//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Orbital clock settings.
    pub simulation: SimulationConfig,
    /// Camera navigation settings.
    pub navigation: NavigationConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// How planet start angles are chosen when the catalog is spawned.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum StartAngleMode {
    /// Approximate heliocentric longitudes for the current wall-clock date.
    #[default]
    Epoch,
    /// Start every body at angle zero.
    Zero,
}

/// Orbital clock configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Global speed factor in simulated days per real second.
    pub speed_days_per_second: f64,
    /// Seconds of simulated time that make up one orbital "day" unit.
    pub orbit_time_unit: f64,
    /// Multiplier applied to moon periods so moons stay readable on screen.
    pub moon_period_scale: f64,
    /// Multiplier applied to catalog moon orbit radii.
    pub moon_distance_scale: f32,
    /// Start angle seeding strategy.
    pub start_angles: StartAngleMode,
}

/// Camera navigation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Focus transition duration in milliseconds.
    pub transition_ms: f64,
    /// Residual distance below which an interpolated pose counts as settled.
    pub precision: f32,
    /// Easing curve name (`linear`, `ease_in`, `ease_out`, `ease_in_out`).
    pub easing: String,
    /// Tangential shot offset in radians.
    pub angle_offset_rad: f32,
    /// Camera distance from a body, in multiples of its size.
    pub distance_factor: f32,
    /// Camera elevation above a body, in multiples of its size.
    pub elevation_factor: f32,
    /// Camera anchor used while the sun is focused.
    pub sun_camera_position: [f32; 3],
    /// Look-at point used while the sun is focused.
    pub sun_look_at: [f32; 3],
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Emit the camera pose on every frame at debug level.
    pub log_poses: bool,
}

// --- Default implementations ---

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            speed_days_per_second: 5.0,
            orbit_time_unit: 60.0,
            moon_period_scale: 8.0,
            moon_distance_scale: 1.8,
            start_angles: StartAngleMode::Epoch,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            transition_ms: 1000.0,
            precision: 1e-4,
            easing: "ease_in_out".to_string(),
            angle_offset_rad: -0.2,
            distance_factor: 5.0,
            elevation_factor: 2.0,
            sun_camera_position: [0.0, 20.0, 140.0],
            sun_look_at: [0.0, 0.0, 0.0],
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_poses: false,
        }
    }
}

// --- Load / Save / Reload ---

/// File name of the persisted config inside the config directory.
pub const CONFIG_FILE: &str = "config.ron";

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = read_config(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("easing: \"ease_in_out\""));
        assert!(ron_str.contains("log_level: \"info\""));
        assert!(ron_str.contains("transition_ms: 1000.0"));
        assert!(ron_str.contains("start_angles: Epoch"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(debug: (), simulation: (speed_days_per_second: 2.0))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.navigation, NavigationConfig::default());
        assert_eq!(config.simulation.speed_days_per_second, 2.0);
        assert_eq!(config.simulation.orbit_time_unit, 60.0);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_sun_anchor_defaults() {
        let nav = NavigationConfig::default();
        assert_eq!(nav.sun_camera_position, [0.0, 20.0, 140.0]);
        assert_eq!(nav.sun_look_at, [0.0, 0.0, 0.0]);
        assert!((nav.angle_offset_rad + 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_start_angles_parse() {
        let config: Config = ron::from_str("(simulation: (start_angles: Zero))").unwrap();
        assert_eq!(config.simulation.start_angles, StartAngleMode::Zero);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.navigation.transition_ms = 1500.0;
        config.simulation.speed_days_per_second = 10.0;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.navigation.easing = "linear".to_string();
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().navigation.easing, "linear");
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "(navigation: (transition_ms: \"slow\"))").unwrap();

        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
        assert_eq!(err.path(), Some(path.as_path()));
        assert!(err.to_string().contains("config.ron"));
    }

    #[test]
    fn test_reload_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::default().reload(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }), "{err:?}");
        assert_eq!(err.path(), Some(dir.path().join(CONFIG_FILE).as_path()));
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }
}
