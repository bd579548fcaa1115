//! Camera output resource.

use bevy_ecs::prelude::*;
use orrery_nav::{CameraPose, NavState};

/// The camera pose emitted by the navigation system this frame.
///
/// Written only in `PreRender`; the renderer reads it afterwards.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraRes {
    /// Position and look-at point.
    pub pose: CameraPose,
    /// Whether the camera is animating or tracking.
    pub state: NavState,
}

impl Default for CameraRes {
    fn default() -> Self {
        Self {
            pose: CameraPose::default(),
            state: NavState::Tracking,
        }
    }
}
