//! ECS scene for the orrery: body entities, the simulated clock, staged
//! systems and the navigation resource that drives the camera.
//!
//! [`create_world`] builds a world with the core resources, [`spawn_catalog`]
//! mounts a [`BodyCatalog`](orrery_orbit::BodyCatalog), and [`EngineSchedules`]
//! runs one frame through the stages in order.

mod camera;
mod components;
mod navigator;
mod scene;
mod schedule;
mod systems;
mod time;
mod world;

pub use camera::CameraRes;
pub use components::{Body, LocalPos, OrbitAngle, ParentBody, WorldPos};
pub use navigator::Navigator;
pub use scene::{BodyQuery, EcsScene, SceneIndex, spawn_body, spawn_catalog};
pub use schedule::{EngineSchedule, EngineSchedules};
pub use systems::{
    advance_clock_system, advance_orbits_system, compose_world_positions_system,
    navigation_system, register_systems,
};
pub use time::{OrbitResolver, SimClock};
pub use world::{create_world, register_core_resources};
