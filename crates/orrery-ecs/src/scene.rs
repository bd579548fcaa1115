//! Mounting catalog bodies as entities and resolving scene handles against them.

use bevy_ecs::prelude::*;
use glam::Vec3;
use orrery_nav::{SceneHandle, SceneQuery};
use orrery_orbit::{BodyCatalog, BodyId, OrbitalBody, PositionResolver};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::{Body, LocalPos, OrbitAngle, ParentBody, WorldPos};

/// Maps catalog ids to mounted entities.
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneIndex {
    entities: FxHashMap<BodyId, Entity>,
}

impl SceneIndex {
    /// Entity for a body, if mounted.
    pub fn get(&self, id: BodyId) -> Option<Entity> {
        self.entities.get(&id).copied()
    }

    /// Record a mounted body.
    pub fn insert(&mut self, id: BodyId, entity: Entity) {
        self.entities.insert(id, entity);
    }

    /// Forget a body. Returns its entity if it was mounted.
    pub fn remove(&mut self, id: BodyId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    /// Number of mounted bodies.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True if nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Read-only view of the per-body state the navigation core needs.
pub type BodyQuery<'w, 's> = Query<'w, 's, (&'static OrbitAngle, &'static WorldPos)>;

/// [`SceneQuery`] over the ECS world.
///
/// Handles resolve through [`SceneIndex`]; a body that is not indexed, or
/// whose entity lacks the components, reads as not yet mounted.
pub struct EcsScene<'a, 'w, 's> {
    index: &'a SceneIndex,
    bodies: &'a BodyQuery<'w, 's>,
}

impl<'a, 'w, 's> EcsScene<'a, 'w, 's> {
    /// Wrap an index and a body query.
    pub fn new(index: &'a SceneIndex, bodies: &'a BodyQuery<'w, 's>) -> Self {
        Self { index, bodies }
    }
}

impl SceneQuery for EcsScene<'_, '_, '_> {
    fn world_position(&self, handle: SceneHandle) -> Option<Vec3> {
        let entity = self.index.get(handle.0)?;
        self.bodies.get(entity).ok().map(|(_, pos)| pos.0)
    }

    fn orbit_angle(&self, handle: SceneHandle) -> Option<f64> {
        let entity = self.index.get(handle.0)?;
        self.bodies.get(entity).ok().map(|(angle, _)| angle.0)
    }
}

/// Spawn one body at its start angle and index it.
///
/// The parent, if any, must already be mounted; otherwise the body is spawned
/// without a [`ParentBody`] link and a warning is logged.
pub fn spawn_body(world: &mut World, body: &OrbitalBody) -> Entity {
    let angle = body.orbit.start_angle;
    let local = PositionResolver::position(&body.orbit, angle);
    let parent = body.parent.and_then(|id| {
        let entity = world.resource::<SceneIndex>().get(id);
        if entity.is_none() {
            warn!(body = %body.id, parent = %id, "parent not mounted");
        }
        entity
    });

    let mut entity = world.spawn((
        Body {
            id: body.id,
            kind: body.kind,
            orbit: body.orbit,
        },
        OrbitAngle(angle),
        LocalPos(local),
        WorldPos(local),
    ));
    if let Some(parent) = parent {
        entity.insert(ParentBody(parent));
    }
    let entity = entity.id();

    world.resource_mut::<SceneIndex>().insert(body.id, entity);
    debug!(body = %body.id, name = %body.name, ?entity, "mounted body");
    entity
}

/// Spawn every catalog body. Parents precede their moons in catalog order.
///
/// Returns the number of entities spawned.
pub fn spawn_catalog(world: &mut World, catalog: &BodyCatalog) -> usize {
    let mut count = 0;
    for body in catalog.iter() {
        spawn_body(world, body);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_world;
    use bevy_ecs::system::SystemState;
    use orrery_orbit::{PresetOptions, SUN_ID};

    #[test]
    fn test_spawn_catalog_indexes_every_body() {
        let mut world = create_world();
        let catalog = BodyCatalog::solar_system(&PresetOptions::default());
        let count = spawn_catalog(&mut world, &catalog);
        assert_eq!(count, catalog.len());
        assert_eq!(world.resource::<SceneIndex>().len(), catalog.len());
    }

    #[test]
    fn test_moon_links_to_parent_entity() {
        let mut world = create_world();
        let catalog = BodyCatalog::solar_system(&PresetOptions::default());
        spawn_catalog(&mut world, &catalog);

        let index = world.resource::<SceneIndex>().clone();
        let moon = index.get(BodyId(301)).unwrap();
        let earth = index.get(BodyId(3)).unwrap();
        assert_eq!(world.get::<ParentBody>(moon), Some(&ParentBody(earth)));
        assert!(world.get::<ParentBody>(earth).is_none());
        assert!(world.get::<ParentBody>(index.get(SUN_ID).unwrap()).is_none());
    }

    #[test]
    fn test_orphan_moon_spawns_without_link() {
        let mut world = create_world();
        let catalog = BodyCatalog::solar_system(&PresetOptions::default());
        let moon = catalog.get(BodyId(301)).unwrap();
        let entity = spawn_body(&mut world, moon);
        assert!(world.get::<ParentBody>(entity).is_none());
    }

    #[test]
    fn test_ecs_scene_resolves_mounted_bodies() {
        let mut world = create_world();
        let catalog = BodyCatalog::solar_system(&PresetOptions::default());
        spawn_body(&mut world, catalog.get(BodyId(3)).unwrap());

        let mut state: SystemState<(Res<SceneIndex>, BodyQuery)> = SystemState::new(&mut world);
        let (index, bodies) = state.get(&world);
        let scene = EcsScene::new(&index, &bodies);

        assert_eq!(
            scene.world_position(SceneHandle(BodyId(3))),
            Some(Vec3::new(20.0, 0.0, 0.0))
        );
        assert_eq!(scene.orbit_angle(SceneHandle(BodyId(3))), Some(0.0));
        assert!(scene.world_position(SceneHandle(BodyId(4))).is_none());
    }
}
