//! World factory and core resource registration.

use bevy_ecs::prelude::*;

use crate::{CameraRes, OrbitResolver, SceneIndex, SimClock};

/// Registers the core resources with default values.
///
/// [`Navigator`](crate::Navigator) is left out: it needs a catalog and is
/// inserted by the caller once bodies are spawned.
pub fn register_core_resources(world: &mut World) {
    world.insert_resource(SimClock::default());
    world.insert_resource(OrbitResolver::default());
    world.insert_resource(SceneIndex::default());
    world.insert_resource(CameraRes::default());
}

/// Creates a world with the core resources pre-inserted.
pub fn create_world() -> World {
    let mut world = World::new();
    register_core_resources(&mut world);
    world
}
