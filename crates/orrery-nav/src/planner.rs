//! Target camera poses for a focus entry.
//!
//! Planning is a pure function of the focus snapshot and the live scene:
//! the same inputs always produce the same pose, bit for bit.

use glam::Vec3;
use orrery_config::NavigationConfig;
use orrery_orbit::PositionResolver;

use crate::{FocusEntry, FocusKind, SceneQuery};

/// Squared length under which a direction is treated as degenerate.
const DEGENERATE_LENGTH_SQ: f32 = 1e-12;

/// Camera position plus the point it looks at.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is aimed at.
    pub look_at: Vec3,
}

impl CameraPose {
    /// Create a pose.
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Component-wise linear interpolation.
    pub fn lerp(&self, other: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: self.position.lerp(other.position, t),
            look_at: self.look_at.lerp(other.look_at, t),
        }
    }

    /// The larger of the position and look-at distances.
    pub fn distance(&self, other: &CameraPose) -> f32 {
        self.position
            .distance(other.position)
            .max(self.look_at.distance(other.look_at))
    }
}

/// How a shot is framed around a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Framing {
    /// Tangential offset angle in radians.
    pub angle_offset: f32,
    /// Distance from the body in multiples of its size.
    pub distance_factor: f32,
    /// Elevation above the body in multiples of its size.
    pub elevation_factor: f32,
}

impl Default for Framing {
    fn default() -> Self {
        Self {
            angle_offset: -0.2,
            distance_factor: 5.0,
            elevation_factor: 2.0,
        }
    }
}

fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    let len_sq = v.length_squared();
    if len_sq > DEGENERATE_LENGTH_SQ {
        v / len_sq.sqrt()
    } else {
        fallback
    }
}

/// Camera position for a three-quarter view of a body.
///
/// Steps away from `anchor` along the anchor-to-target direction, slides along
/// the orbital tangent and rises above the orbital plane. A target sitting on
/// its anchor falls back to the +Z axis instead of producing NaN.
pub fn offset_from_body(
    target: Vec3,
    body_size: f32,
    anchor: Vec3,
    orbit_radius: f32,
    framing: &Framing,
) -> Vec3 {
    let direction = normalize_or(target - anchor, Vec3::Z);
    let perp = normalize_or(Vec3::new(-direction.z, 0.0, direction.x), Vec3::X);

    target
        + direction * (body_size * framing.distance_factor)
        + perp * (orbit_radius * framing.angle_offset.sin())
        + Vec3::new(0.0, body_size * framing.elevation_factor, 0.0)
}

/// Static planner settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannerSettings {
    /// Camera anchor for the sun (and any entry with no body to frame).
    pub sun_camera_position: Vec3,
    /// Look-at point for the sun.
    pub sun_look_at: Vec3,
    /// Body framing rules.
    pub framing: Framing,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            sun_camera_position: Vec3::new(0.0, 20.0, 140.0),
            sun_look_at: Vec3::ZERO,
            framing: Framing::default(),
        }
    }
}

impl PlannerSettings {
    /// Build settings from the navigation config section.
    pub fn from_config(config: &NavigationConfig) -> Self {
        Self {
            sun_camera_position: Vec3::from_array(config.sun_camera_position),
            sun_look_at: Vec3::from_array(config.sun_look_at),
            framing: Framing {
                angle_offset: config.angle_offset_rad,
                distance_factor: config.distance_factor,
                elevation_factor: config.elevation_factor,
            },
        }
    }
}

/// Computes where the camera should be for a given focus.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CameraPlanner {
    /// Framing and anchor settings.
    pub settings: PlannerSettings,
    /// Orbital clock used for planet prediction.
    pub resolver: PositionResolver,
}

impl CameraPlanner {
    /// Create a planner.
    pub fn new(settings: PlannerSettings, resolver: PositionResolver) -> Self {
        Self { settings, resolver }
    }

    /// The fixed pose used for the sun and for kinds with nothing to frame.
    pub fn sun_pose(&self) -> CameraPose {
        CameraPose::new(self.settings.sun_camera_position, self.settings.sun_look_at)
    }

    /// Target pose for `focus`, `duration_ms` from now.
    ///
    /// Planets are aimed at their predicted position at the end of the
    /// transition; moons at their current world position. Returns `None`
    /// while a required scene handle is not yet resolvable.
    pub fn target(
        &self,
        focus: &FocusEntry,
        scene: &impl SceneQuery,
        duration_ms: f64,
    ) -> Option<CameraPose> {
        match focus.kind {
            FocusKind::Planet => self.planet_target(focus, scene, duration_ms),
            FocusKind::Moon => self.moon_target(focus, scene),
            FocusKind::Sun | FocusKind::Site => Some(self.sun_pose()),
        }
    }

    // Planets orbit the origin, so the orbital-plane position from the
    // resolver is already the world position; only the phase is read live.
    fn planet_target(
        &self,
        focus: &FocusEntry,
        scene: &impl SceneQuery,
        duration_ms: f64,
    ) -> Option<CameraPose> {
        let data = &focus.data;
        let angle = scene.orbit_angle(data.scene_handle?)?;
        let look_at = self
            .resolver
            .future_position(&data.orbit, angle, duration_ms);
        let position = offset_from_body(
            look_at,
            data.size,
            Vec3::ZERO,
            data.orbit.x_radius,
            &self.settings.framing,
        );
        Some(CameraPose::new(position, look_at))
    }

    // Moon positions are parent-relative; the scene hands back the already
    // composed world transform, so no parent offset is added here. The shot
    // is framed against the parent planet.
    fn moon_target(&self, focus: &FocusEntry, scene: &impl SceneQuery) -> Option<CameraPose> {
        let look_at = scene.world_position(focus.data.scene_handle?)?;
        let (size, anchor, orbit_radius) = match focus.parent.as_deref() {
            Some(parent) => (
                parent.data.size,
                scene.world_position(parent.data.scene_handle?)?,
                parent.data.orbit.x_radius,
            ),
            None => (focus.data.size, Vec3::ZERO, focus.data.orbit.x_radius),
        };
        let position = offset_from_body(look_at, size, anchor, orbit_radius, &self.settings.framing);
        Some(CameraPose::new(position, look_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FocusData, SceneHandle, SceneSnapshot};
    use orrery_orbit::{BodyId, Orbit};

    fn earth_entry() -> FocusEntry {
        FocusEntry::new(
            FocusKind::Planet,
            BodyId(3),
            FocusData {
                name: "Earth".to_string(),
                size: 1.8,
                orbit: Orbit::circular(20.0, 365.0),
                scene_handle: Some(SceneHandle(BodyId(3))),
            },
        )
    }

    fn moon_entry() -> FocusEntry {
        FocusEntry::new(
            FocusKind::Moon,
            BodyId(301),
            FocusData {
                name: "Moon".to_string(),
                size: 0.5,
                orbit: Orbit::circular(3.6, 27.0).with_period_scale(8.0),
                scene_handle: Some(SceneHandle(BodyId(301))),
            },
        )
        .with_parent(earth_entry())
    }

    fn scene_with_earth(angle: f64) -> SceneSnapshot {
        let mut scene = SceneSnapshot::new();
        let pos = PositionResolver::position(&Orbit::circular(20.0, 365.0), angle);
        scene.insert(SceneHandle(BodyId(3)), pos, angle);
        scene
    }

    #[test]
    fn test_earth_scenario() {
        let planner = CameraPlanner::default();
        let scene = scene_with_earth(0.0);
        let pose = planner.target(&earth_entry(), &scene, 1000.0).unwrap();

        let expected_look = planner
            .resolver
            .future_position(&Orbit::circular(20.0, 365.0), 0.0, 1000.0);
        assert!((pose.look_at - expected_look).length() < 1e-6);

        let dir = expected_look.normalize();
        let perp = Vec3::new(-dir.z, 0.0, dir.x).normalize();
        let expected_pos =
            expected_look + dir * 9.0 + perp * (20.0 * (-0.2_f32).sin()) + Vec3::new(0.0, 3.6, 0.0);
        assert!((pose.position - expected_pos).length() < 1e-4);
    }

    #[test]
    fn test_planet_prediction_leads_current_position() {
        let planner = CameraPlanner::default();
        let scene = scene_with_earth(0.0);
        let now = planner.target(&earth_entry(), &scene, 0.0).unwrap();
        let later = planner.target(&earth_entry(), &scene, 1000.0).unwrap();
        assert_eq!(now.look_at, Vec3::new(20.0, 0.0, 0.0));
        assert!(later.look_at.z > now.look_at.z);
    }

    #[test]
    fn test_target_is_bit_identical() {
        let planner = CameraPlanner::default();
        let mut scene = scene_with_earth(1.234);
        scene.insert(SceneHandle(BodyId(301)), Vec3::new(3.0, 0.1, 17.0), 0.4);
        for entry in [earth_entry(), moon_entry(), FocusEntry::sun_root()] {
            let a = planner.target(&entry, &scene, 1000.0).unwrap();
            for _ in 0..10 {
                let b = planner.target(&entry, &scene, 1000.0).unwrap();
                assert_eq!(a.position.to_array().map(f32::to_bits), b.position.to_array().map(f32::to_bits));
                assert_eq!(a.look_at.to_array().map(f32::to_bits), b.look_at.to_array().map(f32::to_bits));
            }
        }
    }

    #[test]
    fn test_sun_and_site_use_fixed_anchor() {
        let planner = CameraPlanner::default();
        let scene = SceneSnapshot::new();
        let sun = planner.target(&FocusEntry::sun_root(), &scene, 1000.0).unwrap();
        assert_eq!(sun, CameraPose::new(Vec3::new(0.0, 20.0, 140.0), Vec3::ZERO));

        let mut site = earth_entry();
        site.kind = FocusKind::Site;
        assert_eq!(planner.target(&site, &scene, 0.0), Some(planner.sun_pose()));
    }

    #[test]
    fn test_moon_frames_against_parent() {
        let planner = CameraPlanner::default();
        let mut scene = scene_with_earth(0.0);
        let moon_pos = Vec3::new(23.6, 0.0, 0.0);
        scene.insert(SceneHandle(BodyId(301)), moon_pos, 0.0);

        let pose = planner.target(&moon_entry(), &scene, 1000.0).unwrap();
        // Current position, not predicted.
        assert_eq!(pose.look_at, moon_pos);
        // Direction from Earth (20,0,0) to the moon is +X; distance uses Earth's size.
        let perp = Vec3::Z;
        let expected = moon_pos
            + Vec3::X * (1.8 * 5.0)
            + perp * (20.0 * (-0.2_f32).sin())
            + Vec3::new(0.0, 3.6, 0.0);
        assert!((pose.position - expected).length() < 1e-4);
    }

    #[test]
    fn test_unmounted_handles_are_unresolvable() {
        let planner = CameraPlanner::default();
        let empty = SceneSnapshot::new();
        assert!(planner.target(&earth_entry(), &empty, 1000.0).is_none());

        // Moon mounted, parent not.
        let mut scene = SceneSnapshot::new();
        scene.insert(SceneHandle(BodyId(301)), Vec3::ONE, 0.0);
        assert!(planner.target(&moon_entry(), &scene, 0.0).is_none());

        let mut handleless = earth_entry();
        handleless.data.scene_handle = None;
        assert!(planner.target(&handleless, &scene_with_earth(0.0), 0.0).is_none());
    }

    #[test]
    fn test_offset_falls_back_when_target_on_anchor() {
        let pos = offset_from_body(Vec3::ZERO, 1.0, Vec3::ZERO, 10.0, &Framing::default());
        assert!(pos.is_finite());
        // +Z direction, perp = (-1, 0, 0).
        let expected = Vec3::new(-(10.0 * (-0.2_f32).sin()), 2.0, 5.0);
        assert!((pos - expected).length() < 1e-5);
    }

    #[test]
    fn test_offset_vertical_direction_stays_finite() {
        let pos = offset_from_body(Vec3::Y * 10.0, 1.0, Vec3::ZERO, 10.0, &Framing::default());
        assert!(pos.is_finite());
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = NavigationConfig::default();
        config.sun_camera_position = [1.0, 2.0, 3.0];
        config.distance_factor = 7.0;
        let settings = PlannerSettings::from_config(&config);
        assert_eq!(settings.sun_camera_position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(settings.framing.distance_factor, 7.0);
        assert_eq!(settings.framing.angle_offset, -0.2);
    }

    #[test]
    fn test_pose_lerp_and_distance() {
        let a = CameraPose::new(Vec3::ZERO, Vec3::ZERO);
        let b = CameraPose::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 4.0, 0.0));
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.position, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(mid.look_at, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(a.distance(&b), 10.0);
    }
}
