//! Body catalog: validated lookup over every orbital body in the system,
//! plus the built-in solar system preset.

use rustc_hash::FxHashMap;

use crate::epoch::mean_longitude;
use crate::{BodyId, BodyKind, Orbit, OrbitalBody};

/// Id of the central star in the built-in preset.
pub const SUN_ID: BodyId = BodyId(0);

/// Errors raised while building a catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Two bodies share an id.
    #[error("duplicate body id {0}")]
    DuplicateId(BodyId),
    /// A moon references a parent that is not in the catalog.
    #[error("body {body} references missing parent {parent}")]
    MissingParent {
        /// The orphaned body.
        body: BodyId,
        /// The parent id it points at.
        parent: BodyId,
    },
    /// A moon has no parent, or its parent is not a planet.
    #[error("moon {0} must orbit a planet")]
    InvalidParent(BodyId),
    /// Orbital period is zero, negative or NaN.
    #[error("body {0} has a non-positive orbital period")]
    NonPositivePeriod(BodyId),
}

/// Knobs for building the solar system preset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetOptions {
    /// Multiplier applied to the listed moon orbit radii.
    pub moon_distance_scale: f32,
    /// Multiplier applied to moon periods.
    pub moon_period_scale: f64,
    /// Seed planet start angles from mean longitudes at this many days after
    /// J2000. `None` starts every body at angle zero.
    pub epoch_days: Option<f64>,
}

impl Default for PresetOptions {
    fn default() -> Self {
        Self {
            moon_distance_scale: 1.8,
            moon_period_scale: 8.0,
            epoch_days: None,
        }
    }
}

/// Read-only registry of orbital bodies.
#[derive(Clone, Debug, Default)]
pub struct BodyCatalog {
    bodies: Vec<OrbitalBody>,
    index: FxHashMap<BodyId, usize>,
}

impl BodyCatalog {
    /// Build a catalog, validating ids, parents and periods.
    ///
    /// # Errors
    ///
    /// See [`CatalogError`].
    pub fn from_bodies(bodies: Vec<OrbitalBody>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();
        for (i, body) in bodies.iter().enumerate() {
            if index.insert(body.id, i).is_some() {
                return Err(CatalogError::DuplicateId(body.id));
            }
            // NaN fails this comparison too.
            if !(body.orbit.days_per_rotation > 0.0 && body.orbit.period_scale > 0.0) {
                return Err(CatalogError::NonPositivePeriod(body.id));
            }
        }

        for body in &bodies {
            match (body.kind, body.parent) {
                (BodyKind::Moon, None) => return Err(CatalogError::InvalidParent(body.id)),
                (_, Some(parent)) => {
                    let parent_body = index
                        .get(&parent)
                        .map(|&i| &bodies[i])
                        .ok_or(CatalogError::MissingParent {
                            body: body.id,
                            parent,
                        })?;
                    if body.kind == BodyKind::Moon && parent_body.kind != BodyKind::Planet {
                        return Err(CatalogError::InvalidParent(body.id));
                    }
                }
                _ => {}
            }
        }

        Ok(Self { bodies, index })
    }

    /// Look up a body by id.
    pub fn get(&self, id: BodyId) -> Option<&OrbitalBody> {
        self.index.get(&id).map(|&i| &self.bodies[i])
    }

    /// Look up a body by name, ignoring ASCII case.
    pub fn by_name(&self, name: &str) -> Option<&OrbitalBody> {
        self.bodies
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// The parent of `id`, if it has one.
    pub fn parent_of(&self, id: BodyId) -> Option<&OrbitalBody> {
        self.get(id)?.parent.and_then(|p| self.get(p))
    }

    /// Bodies orbiting `id`, in catalog order.
    pub fn children(&self, id: BodyId) -> impl Iterator<Item = &OrbitalBody> {
        self.bodies.iter().filter(move |b| b.parent == Some(id))
    }

    /// The first sun in the catalog.
    pub fn sun(&self) -> Option<&OrbitalBody> {
        self.bodies.iter().find(|b| b.kind == BodyKind::Sun)
    }

    /// Iterate in catalog order (parents precede their moons in the preset).
    pub fn iter(&self) -> impl Iterator<Item = &OrbitalBody> {
        self.bodies.iter()
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns true if the catalog holds no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The built-in solar system: the sun, eight planets and their major moons.
    ///
    /// Planet ids are 1..=8 from Mercury outward; moon ids are
    /// `planet_id * 100 + n`, keeping every id unique across the catalog.
    pub fn solar_system(options: &PresetOptions) -> Self {
        let mut bodies = vec![OrbitalBody::sun(SUN_ID, "Sun", 5.0)];

        for planet in PLANETS {
            let start_angle = options
                .epoch_days
                .and_then(|days| mean_longitude(planet.name, days))
                .unwrap_or(0.0);
            let planet_id = BodyId(planet.id);
            bodies.push(OrbitalBody::planet(
                planet_id,
                planet.name,
                Orbit::circular(planet.radius, planet.days).with_start_angle(start_angle),
                planet.size,
                planet.inclination,
            ));

            for (n, moon) in planet.moons.iter().enumerate() {
                let radius = moon.radius * options.moon_distance_scale;
                bodies.push(OrbitalBody::moon(
                    BodyId(planet.id * 100 + n as u32 + 1),
                    planet_id,
                    moon.name,
                    Orbit::circular(radius, moon.days).with_period_scale(options.moon_period_scale),
                    moon.size,
                    moon.inclination,
                ));
            }
        }

        let index = bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id, i))
            .collect();
        Self { bodies, index }
    }
}

struct PlanetSpec {
    id: u32,
    name: &'static str,
    radius: f32,
    size: f32,
    days: f64,
    inclination: f32,
    moons: &'static [MoonSpec],
}

struct MoonSpec {
    name: &'static str,
    radius: f32,
    size: f32,
    days: f64,
    inclination: f32,
}

const fn moon(name: &'static str, radius: f32, size: f32, days: f64, inclination: f32) -> MoonSpec {
    MoonSpec {
        name,
        radius,
        size,
        days,
        inclination,
    }
}

// Moon periods for the outer planets are compressed so they stay visible.
const PLANETS: &[PlanetSpec] = &[
    PlanetSpec {
        id: 1,
        name: "Mercury",
        radius: 10.0,
        size: 1.0,
        days: 88.0,
        inclination: 7.0,
        moons: &[],
    },
    PlanetSpec {
        id: 2,
        name: "Venus",
        radius: 15.0,
        size: 1.5,
        days: 225.0,
        inclination: 3.4,
        moons: &[],
    },
    PlanetSpec {
        id: 3,
        name: "Earth",
        radius: 20.0,
        size: 1.8,
        days: 365.0,
        inclination: 0.0,
        moons: &[moon("Moon", 2.0, 0.5, 27.0, 5.1)],
    },
    PlanetSpec {
        id: 4,
        name: "Mars",
        radius: 30.0,
        size: 1.2,
        days: 687.0,
        inclination: 1.85,
        moons: &[
            moon("Phobos", 1.0, 0.3, 14.0, 1.1),
            moon("Deimos", 1.5, 0.2, 15.0, 0.9),
        ],
    },
    PlanetSpec {
        id: 5,
        name: "Jupiter",
        radius: 50.0,
        size: 4.5,
        days: 4333.0,
        inclination: 1.3,
        moons: &[
            moon("Io", 3.6, 1.0, 14.0, 0.04),
            moon("Europa", 3.1, 0.9, 15.0, 0.47),
            moon("Ganymede", 5.3, 1.5, 16.0, 0.2),
            moon("Callisto", 4.8, 1.4, 17.0, 0.28),
        ],
    },
    PlanetSpec {
        id: 6,
        name: "Saturn",
        radius: 70.0,
        size: 4.0,
        days: 10759.0,
        inclination: 2.49,
        moons: &[
            moon("Titan", 5.1, 1.4, 18.0, 0.33),
            moon("Enceladus", 1.6, 0.4, 14.0, 0.02),
        ],
    },
    PlanetSpec {
        id: 7,
        name: "Uranus",
        radius: 90.0,
        size: 3.0,
        days: 30687.0,
        inclination: 0.77,
        moons: &[
            moon("Miranda", 2.4, 0.6, 15.0, 4.34),
            moon("Ariel", 3.6, 0.8, 16.0, 0.26),
        ],
    },
    PlanetSpec {
        id: 8,
        name: "Neptune",
        radius: 110.0,
        size: 3.0,
        days: 60190.0,
        inclination: 1.77,
        moons: &[moon("Triton", 2.7, 0.7, 19.0, 157.0)],
    },
];
