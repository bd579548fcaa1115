//! Orbital body registry and position resolution.
//!
//! [`BodyCatalog`] holds the static description of every body.
//! [`PositionResolver`] turns an [`Orbit`] and a simulated time into a
//! position in the body's orbital plane, and predicts where the body will be
//! a few milliseconds ahead without mutating any state.

mod body;
mod catalog;
pub mod epoch;
mod resolver;

pub use body::{BodyId, BodyKind, Orbit, OrbitalBody};
pub use catalog::{BodyCatalog, CatalogError, PresetOptions, SUN_ID};
pub use resolver::{DEFAULT_SPEED_FACTOR, ORBIT_TIME_UNIT, PositionResolver};
