//! Frame systems, one group per stage.
//!
//! Each system documents which stage it belongs to and what it reads and
//! writes.

use bevy_ecs::prelude::*;
use orrery_orbit::PositionResolver;
use tracing::trace;

use crate::{
    Body, BodyQuery, CameraRes, EcsScene, EngineSchedule, EngineSchedules, LocalPos, Navigator,
    OrbitAngle, OrbitResolver, ParentBody, SceneIndex, SimClock, WorldPos,
};

/// Advances the simulated clock by this frame's delta.
///
/// **Stage:** PreUpdate (writes `SimClock`).
pub fn advance_clock_system(mut clock: ResMut<SimClock>) {
    clock.elapsed += clock.delta;
    clock.tick += 1;
}

/// Recomputes every body's angle from the clock and its local position.
///
/// **Stage:** Update (reads `SimClock`, `OrbitResolver`; writes `OrbitAngle`, `LocalPos`).
pub fn advance_orbits_system(
    clock: Res<SimClock>,
    resolver: Res<OrbitResolver>,
    mut query: Query<(&Body, &mut OrbitAngle, &mut LocalPos)>,
) {
    for (body, mut angle, mut local) in &mut query {
        angle.0 = resolver.0.angle(&body.orbit, clock.elapsed);
        local.0 = PositionResolver::position(&body.orbit, angle.0);
    }
}

/// Composes world positions: roots take their local position, children add
/// their parent's world position.
///
/// **Stage:** PostUpdate (reads `LocalPos`, `ParentBody`; writes `WorldPos`).
pub fn compose_world_positions_system(
    mut query: Query<(Entity, &LocalPos, Option<&ParentBody>, &mut WorldPos)>,
) {
    for (_, local, parent, mut world) in &mut query {
        if parent.is_none() {
            world.0 = local.0;
        }
    }

    let composed: Vec<_> = query
        .iter()
        .filter_map(|(entity, local, parent, _)| {
            let (_, _, _, parent_world) = query.get(parent?.0).ok()?;
            Some((entity, parent_world.0 + local.0))
        })
        .collect();

    for (entity, position) in composed {
        if let Ok((_, _, _, mut world)) = query.get_mut(entity) {
            world.0 = position;
        }
    }
}

/// Runs the frame scheduler against the composed scene and publishes the pose.
///
/// **Stage:** PreRender (reads `SimClock`, `SceneIndex`, body positions;
/// writes `Navigator`, `CameraRes`).
pub fn navigation_system(
    clock: Res<SimClock>,
    index: Res<SceneIndex>,
    bodies: BodyQuery,
    mut navigator: ResMut<Navigator>,
    mut camera: ResMut<CameraRes>,
) {
    let scene = EcsScene::new(&index, &bodies);
    camera.pose = navigator.tick(clock.now_ms(), &scene);
    camera.state = navigator.scheduler().state();
    trace!(tick = clock.tick, pose = ?camera.pose, "camera");
}

/// Register the frame systems into their stages.
pub fn register_systems(schedules: &mut EngineSchedules) {
    schedules.add_system(EngineSchedule::PreUpdate, advance_clock_system);
    schedules.add_system(EngineSchedule::Update, advance_orbits_system);
    schedules.add_system(EngineSchedule::PostUpdate, compose_world_positions_system);
    schedules.add_system(EngineSchedule::PreRender, navigation_system);
}
