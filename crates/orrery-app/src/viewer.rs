//! Headless viewer: the ECS scene plus a scripted sequence of focus changes.

use std::collections::VecDeque;
use std::str::FromStr;
use std::time::SystemTime;

use bevy_ecs::prelude::*;
use orrery_config::{Config, StartAngleMode};
use orrery_ecs::{
    CameraRes, EngineSchedules, Navigator, OrbitResolver, SimClock, create_world,
    register_systems, spawn_catalog,
};
use orrery_nav::{CameraPose, FocusRequest};
use orrery_orbit::{BodyCatalog, PositionResolver, PresetOptions, epoch};
use tracing::{debug, info, warn};

use crate::AppError;
use crate::game_loop::FIXED_DT;

/// Script used when none is given on the command line.
pub const DEFAULT_SCRIPT: &[&str] = &["earth", "moon", "back", "jupiter", "io", "sun"];

/// One scripted user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptStep {
    /// Pop one level.
    Back,
    /// A raw `kind:id` request, e.g. `planet:3`.
    Request(FocusRequest),
    /// Focus a body by name.
    Name(String),
}

impl FromStr for ScriptStep {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("back") {
            return Ok(ScriptStep::Back);
        }
        if let Some((kind, id)) = s.split_once(':')
            && let Ok(id) = id.parse()
        {
            return Ok(ScriptStep::Request(FocusRequest::new(kind, id)));
        }
        Ok(ScriptStep::Name(s.to_string()))
    }
}

/// Parse a focus script, skipping empty items.
pub fn parse_script<S: AsRef<str>>(items: &[S]) -> VecDeque<ScriptStep> {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.trim().is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

/// Build the preset catalog the config asks for.
pub fn build_catalog(config: &Config, now: SystemTime) -> BodyCatalog {
    let epoch_days = match config.simulation.start_angles {
        StartAngleMode::Epoch => Some(epoch::days_since_j2000(now)),
        StartAngleMode::Zero => None,
    };
    BodyCatalog::solar_system(&PresetOptions {
        moon_distance_scale: config.simulation.moon_distance_scale,
        moon_period_scale: config.simulation.moon_period_scale,
        epoch_days,
    })
}

/// ECS world, stage runner and the remaining script.
pub struct Viewer {
    world: World,
    schedules: EngineSchedules,
    script: VecDeque<ScriptStep>,
    frames_per_step: u64,
    frame: u64,
    log_poses: bool,
}

impl Viewer {
    /// Build the scene from config and a catalog.
    ///
    /// Script steps are spaced so each transition finishes with time to spare.
    ///
    /// # Errors
    ///
    /// Fails if the navigation config names an unknown easing.
    pub fn new(
        config: &Config,
        catalog: BodyCatalog,
        script: VecDeque<ScriptStep>,
    ) -> Result<Self, AppError> {
        let mut world = create_world();
        world.insert_resource(OrbitResolver(PositionResolver::from_config(&config.simulation)));
        let spawned = spawn_catalog(&mut world, &catalog);
        world.insert_resource(Navigator::from_config(config, catalog)?);

        let mut schedules = EngineSchedules::new();
        register_systems(&mut schedules);

        let frames_per_step =
            ((config.navigation.transition_ms * 1.5) / (FIXED_DT * 1000.0)).ceil() as u64;
        info!(bodies = spawned, steps = script.len(), "scene ready");

        Ok(Self {
            world,
            schedules,
            script,
            frames_per_step: frames_per_step.max(1),
            frame: 0,
            log_poses: config.debug.log_poses,
        })
    }

    /// Run one fixed step of `dt` seconds and return the emitted pose.
    pub fn step(&mut self, dt: f64) -> CameraPose {
        let focus_changed = self.frame % self.frames_per_step == 0 && self.apply_next();

        self.world.resource_mut::<SimClock>().delta = dt;
        self.schedules.run(&mut self.world);
        self.frame += 1;

        let camera = *self.world.resource::<CameraRes>();
        if focus_changed {
            info!(
                focus = %self.headline(),
                position = ?camera.pose.position,
                look_at = ?camera.pose.look_at,
                "focus"
            );
        } else if self.log_poses {
            debug!(frame = self.frame, state = ?camera.state, pose = ?camera.pose, "pose");
        }
        camera.pose
    }

    fn apply_next(&mut self) -> bool {
        let Some(step) = self.script.pop_front() else {
            return false;
        };
        let mut navigator = self.world.resource_mut::<Navigator>();
        let result = match &step {
            ScriptStep::Back => Ok(navigator.back().is_some()),
            ScriptStep::Request(request) => navigator.select(request),
            ScriptStep::Name(name) => navigator.select_name(name).map(|()| true),
        };
        match result {
            Ok(changed) => changed,
            Err(e) => {
                warn!(?step, "{e}");
                false
            }
        }
    }

    /// Caption for the current focus.
    pub fn headline(&self) -> String {
        self.world.resource::<Navigator>().headline()
    }

    /// Steps not yet applied.
    pub fn remaining_steps(&self) -> usize {
        self.script.len()
    }

    /// The ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }
}
