//! Static orbital body descriptions.

use std::fmt;

/// Catalog-wide unique identifier of an orbital body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What kind of body an entry describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// The central star. Never moves.
    Sun,
    /// Orbits the sun.
    Planet,
    /// Orbits a planet; its orbit is expressed in the parent's frame.
    Moon,
}

/// Elliptical, axis-aligned orbit in the body's own orbital plane.
///
/// Positions follow `(x_radius * cos(a), 0, z_radius * sin(a))`; inclination is
/// a presentation concern and is not applied here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    /// Semi-axis along X in scene units.
    pub x_radius: f32,
    /// Semi-axis along Z in scene units.
    pub z_radius: f32,
    /// Orbital period in days.
    pub days_per_rotation: f64,
    /// Extra period multiplier (moons are slowed down to stay readable).
    pub period_scale: f64,
    /// Angle in radians at simulated time zero.
    pub start_angle: f64,
}

impl Orbit {
    /// A circular orbit with unit period scale, starting at angle zero.
    pub fn circular(radius: f32, days_per_rotation: f64) -> Self {
        Self {
            x_radius: radius,
            z_radius: radius,
            days_per_rotation,
            period_scale: 1.0,
            start_angle: 0.0,
        }
    }

    /// An orbit that never moves and sits at the origin.
    ///
    /// The infinite period yields a zero angular velocity without a special case.
    pub fn stationary() -> Self {
        Self {
            x_radius: 0.0,
            z_radius: 0.0,
            days_per_rotation: f64::INFINITY,
            period_scale: 1.0,
            start_angle: 0.0,
        }
    }

    /// Returns a copy with a different start angle.
    pub fn with_start_angle(mut self, start_angle: f64) -> Self {
        self.start_angle = start_angle;
        self
    }

    /// Returns a copy with a different period multiplier.
    pub fn with_period_scale(mut self, period_scale: f64) -> Self {
        self.period_scale = period_scale;
        self
    }
}

/// Immutable description of one body in the registry.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalBody {
    /// Unique id.
    pub id: BodyId,
    /// Sun, planet or moon.
    pub kind: BodyKind,
    /// Display name ("Earth").
    pub name: String,
    /// Orbit around the parent (or the origin for planets).
    pub orbit: Orbit,
    /// Visual radius in scene units.
    pub size: f32,
    /// Orbital plane tilt in degrees, applied by the renderer.
    pub inclination_deg: f32,
    /// The body this one orbits. `None` for the sun and for planets.
    pub parent: Option<BodyId>,
}

impl OrbitalBody {
    /// The central star at the origin.
    pub fn sun(id: BodyId, name: impl Into<String>, size: f32) -> Self {
        Self {
            id,
            kind: BodyKind::Sun,
            name: name.into(),
            orbit: Orbit::stationary(),
            size,
            inclination_deg: 0.0,
            parent: None,
        }
    }

    /// A planet orbiting the origin.
    pub fn planet(
        id: BodyId,
        name: impl Into<String>,
        orbit: Orbit,
        size: f32,
        inclination_deg: f32,
    ) -> Self {
        Self {
            id,
            kind: BodyKind::Planet,
            name: name.into(),
            orbit,
            size,
            inclination_deg,
            parent: None,
        }
    }

    /// A moon orbiting `parent`.
    pub fn moon(
        id: BodyId,
        parent: BodyId,
        name: impl Into<String>,
        orbit: Orbit,
        size: f32,
        inclination_deg: f32,
    ) -> Self {
        Self {
            id,
            kind: BodyKind::Moon,
            name: name.into(),
            orbit,
            size,
            inclination_deg,
            parent: Some(parent),
        }
    }
}
