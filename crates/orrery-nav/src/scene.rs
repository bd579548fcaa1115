//! The navigation core's only view of the rendered scene.

use glam::Vec3;
use orrery_orbit::BodyId;
use rustc_hash::FxHashMap;

/// Weak key into the external scene graph.
///
/// Holding a handle keeps nothing alive; the scene may not have mounted the
/// body yet, in which case lookups return `None` until it does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneHandle(pub BodyId);

/// Read-only capability for resolving scene handles.
pub trait SceneQuery {
    /// Composed world-space position of the body, if mounted.
    fn world_position(&self, handle: SceneHandle) -> Option<Vec3>;

    /// Cached orbital angle of the body in radians, if mounted.
    fn orbit_angle(&self, handle: SceneHandle) -> Option<f64>;
}

/// Plain-data scene snapshot. Useful for headless runs and tests.
#[derive(Clone, Debug, Default)]
pub struct SceneSnapshot {
    bodies: FxHashMap<SceneHandle, (Vec3, f64)>,
}

impl SceneSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount or update a body.
    pub fn insert(&mut self, handle: SceneHandle, world_position: Vec3, orbit_angle: f64) {
        self.bodies.insert(handle, (world_position, orbit_angle));
    }

    /// Unmount a body.
    pub fn remove(&mut self, handle: SceneHandle) {
        self.bodies.remove(&handle);
    }
}

impl SceneQuery for SceneSnapshot {
    fn world_position(&self, handle: SceneHandle) -> Option<Vec3> {
        self.bodies.get(&handle).map(|&(pos, _)| pos)
    }

    fn orbit_angle(&self, handle: SceneHandle) -> Option<f64> {
        self.bodies.get(&handle).map(|&(_, angle)| angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_resolves_mounted_bodies_only() {
        let mut scene = SceneSnapshot::new();
        let earth = SceneHandle(BodyId(3));
        assert!(scene.world_position(earth).is_none());

        scene.insert(earth, Vec3::new(20.0, 0.0, 0.0), 0.0);
        assert_eq!(scene.world_position(earth), Some(Vec3::new(20.0, 0.0, 0.0)));
        assert_eq!(scene.orbit_angle(earth), Some(0.0));

        scene.remove(earth);
        assert!(scene.orbit_angle(earth).is_none());
    }
}
