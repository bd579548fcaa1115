//! Focus-driven camera navigation.
//!
//! A [`FocusStack`] records what the user has drilled into. Every frame the
//! [`FrameScheduler`] polls it, asks the [`CameraPlanner`] where the camera
//! should be, and either animates towards that pose with a
//! [`TransitionAnimator`] or follows the body directly once it has arrived.
//! Live body positions come in through the [`SceneQuery`] capability.

mod focus;
pub mod planner;
mod scene;
pub mod scheduler;
pub mod selection;
pub mod transition;

pub use focus::{FocusData, FocusEntry, FocusKey, FocusKind, FocusStack, UnknownFocusKind};
pub use planner::{CameraPlanner, CameraPose, Framing, PlannerSettings, offset_from_body};
pub use scene::{SceneHandle, SceneQuery, SceneSnapshot};
pub use scheduler::{FrameScheduler, NavState};
pub use selection::{FocusRequest, SelectionError, apply_request, entry_for_body, select_by_name};
pub use transition::{Easing, EasingFunction, TransitionAnimator, UnknownEasing};
