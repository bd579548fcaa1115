//! Components attached to every orbital body entity.

use bevy_ecs::prelude::*;
use glam::Vec3;
use orrery_orbit::{BodyId, BodyKind, Orbit};

/// Static identity and orbit of a body entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Catalog id.
    pub id: BodyId,
    /// Sun, planet or moon.
    pub kind: BodyKind,
    /// Orbit around the parent.
    pub orbit: Orbit,
}

/// Current orbital angle in radians. Written in `Update`.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct OrbitAngle(pub f64);

/// Position in the parent's frame. Written in `Update`.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct LocalPos(pub Vec3);

/// Composed world-space position. Written in `PostUpdate`; moons are their
/// parent's world position plus their local offset.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct WorldPos(pub Vec3);

/// The entity this body orbits.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParentBody(pub Entity);
