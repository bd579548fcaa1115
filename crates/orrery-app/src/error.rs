use orrery_config::ConfigError;
use orrery_nav::UnknownEasing;
use thiserror::Error;

use crate::platform::PlatformError;

/// Errors that abort application startup.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("navigation config: {0}")]
    Easing(#[from] UnknownEasing),
}
