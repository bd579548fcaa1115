//! Orrery application framework.
//!
//! Provides platform directories, the fixed-timestep loop and the headless
//! viewer that replays a focus script against the ECS scene.

mod error;
pub mod game_loop;
pub mod platform;
pub mod viewer;

pub use error::AppError;
