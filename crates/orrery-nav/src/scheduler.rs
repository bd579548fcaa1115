//! Per-frame camera state machine.
//!
//! The scheduler polls the focus stack once per tick. A change of focus
//! identity starts a transition from wherever the camera is right now to the
//! planner's target; when the transition runs out the scheduler switches to
//! tracking and re-plans from live positions every frame.

use std::sync::Arc;

use orrery_config::{NavigationConfig, SimulationConfig};
use orrery_orbit::PositionResolver;
use tracing::{info, trace};

use crate::planner::{CameraPlanner, CameraPose, PlannerSettings};
use crate::transition::{
    DEFAULT_PRECISION, Easing, EasingFunction, TransitionAnimator, UnknownEasing,
};
use crate::{FocusEntry, FocusKey, FocusStack, SceneQuery};

/// Default transition duration in milliseconds.
pub const DEFAULT_TRANSITION_MS: f64 = 1000.0;

/// What the scheduler is doing this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    /// Interpolating towards a new focus.
    Animating,
    /// Following the focused body from live positions.
    Tracking,
}

/// Owns the camera pose and decides how it moves each frame.
#[derive(Debug)]
pub struct FrameScheduler {
    planner: CameraPlanner,
    duration_ms: f64,
    precision: f32,
    easing: Arc<dyn Easing>,
    state: NavState,
    animator: Option<TransitionAnimator>,
    /// `None` while a pose is held for a target that has not mounted yet.
    tracked: Option<FocusKey>,
    pose: CameraPose,
}

impl FrameScheduler {
    /// Scheduler tracking the sun root with the fixed sun pose.
    pub fn new(planner: CameraPlanner, duration_ms: f64, easing: Arc<dyn Easing>) -> Self {
        Self {
            pose: planner.sun_pose(),
            planner,
            duration_ms: duration_ms.max(0.0),
            precision: DEFAULT_PRECISION,
            easing,
            state: NavState::Tracking,
            animator: None,
            tracked: Some(FocusEntry::sun_root().key()),
        }
    }

    /// Build a scheduler from the navigation and simulation config sections.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownEasing`] if `navigation.easing` names no known curve.
    pub fn from_config(
        navigation: &NavigationConfig,
        simulation: &SimulationConfig,
    ) -> Result<Self, UnknownEasing> {
        let easing: EasingFunction = navigation.easing.parse()?;
        let planner = CameraPlanner::new(
            PlannerSettings::from_config(navigation),
            PositionResolver::from_config(simulation),
        );
        let mut scheduler = Self::new(planner, navigation.transition_ms, Arc::new(easing));
        scheduler.precision = navigation.precision;
        Ok(scheduler)
    }

    /// Advance one frame and return the pose for the renderer.
    ///
    /// `now_ms` must be non-decreasing between calls.
    pub fn update(
        &mut self,
        now_ms: f64,
        stack: &FocusStack,
        scene: &impl SceneQuery,
    ) -> CameraPose {
        let current = stack.current();
        let key = current.key();

        if self.tracked != Some(key) {
            let from = self.live_pose(now_ms);
            match self.planner.target(current, scene, self.duration_ms) {
                Some(to) => {
                    info!(
                        from = ?self.tracked,
                        to = %key,
                        duration_ms = self.duration_ms,
                        interrupted = self.animator.is_some(),
                        "camera transition started"
                    );
                    self.animator = Some(
                        TransitionAnimator::new(
                            from,
                            to,
                            now_ms,
                            self.duration_ms,
                            Arc::clone(&self.easing),
                        )
                        .with_precision(self.precision),
                    );
                    self.tracked = Some(key);
                    self.state = NavState::Animating;
                }
                None => {
                    // Not mounted yet: freeze where we are and retry next tick.
                    // Any later focus, including the previous one, starts
                    // from the held pose.
                    trace!(focus = %key, "focus target pending");
                    self.animator = None;
                    self.tracked = None;
                    self.state = NavState::Tracking;
                    self.pose = from;
                    return self.pose;
                }
            }
        }

        if let Some(animator) = &self.animator {
            if animator.is_complete(now_ms) {
                info!(focus = %key, "camera transition finished");
                self.animator = None;
                self.state = NavState::Tracking;
            } else {
                self.pose = animator.sample(now_ms);
                trace!(focus = %key, pose = ?self.pose, "animating");
                return self.pose;
            }
        }

        if let Some(pose) = self.planner.target(current, scene, 0.0) {
            self.pose = pose;
        }
        trace!(focus = %key, pose = ?self.pose, "tracking");
        self.pose
    }

    fn live_pose(&self, now_ms: f64) -> CameraPose {
        self.animator
            .as_ref()
            .map_or(self.pose, |animator| animator.sample(now_ms))
    }

    /// The pose emitted by the last update.
    pub fn current_pose(&self) -> CameraPose {
        self.pose
    }

    /// Current state.
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Identity of the focus the camera is heading to or following, or
    /// `None` while the pose is held for a pending target.
    pub fn tracked(&self) -> Option<FocusKey> {
        self.tracked
    }

    /// The running transition, if any.
    pub fn animator(&self) -> Option<&TransitionAnimator> {
        self.animator.as_ref()
    }

    /// The planner used for targets.
    pub fn planner(&self) -> &CameraPlanner {
        &self.planner
    }

    /// Transition duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(
            CameraPlanner::default(),
            DEFAULT_TRANSITION_MS,
            Arc::new(EasingFunction::default()),
        )
    }
}
