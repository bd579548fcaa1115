//! Orbital position resolution: angles from simulated time, Cartesian
//! positions from angles, and pure future-time extrapolation.
//!
//! Nothing here holds mutable angle state. The simulated clock is advanced
//! elsewhere; these functions only map `(orbit, time)` to where a body is.

use std::f64::consts::TAU;

use glam::Vec3;
use orrery_config::SimulationConfig;

use crate::Orbit;

/// Default number of simulated seconds per orbital day unit.
pub const ORBIT_TIME_UNIT: f64 = 60.0;

/// Default global speed factor, in days per real second.
pub const DEFAULT_SPEED_FACTOR: f64 = 5.0;

/// Maps orbits and simulated time to positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionResolver {
    /// Global speed factor applied to every body.
    pub speed_factor: f64,
    /// Simulated seconds per orbital day.
    pub orbit_time_unit: f64,
}

impl Default for PositionResolver {
    fn default() -> Self {
        Self {
            speed_factor: DEFAULT_SPEED_FACTOR,
            orbit_time_unit: ORBIT_TIME_UNIT,
        }
    }
}

impl PositionResolver {
    /// Create a resolver with an explicit speed factor and time unit.
    pub fn new(speed_factor: f64, orbit_time_unit: f64) -> Self {
        Self {
            speed_factor,
            orbit_time_unit,
        }
    }

    /// Build a resolver from the simulation config section.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.speed_days_per_second, config.orbit_time_unit)
    }

    /// Radians per simulated second, before the global speed factor.
    pub fn angular_velocity(&self, orbit: &Orbit) -> f64 {
        TAU / (orbit.days_per_rotation * orbit.period_scale * self.orbit_time_unit)
    }

    /// Orbital angle after `elapsed_sim_seconds` of simulated time.
    pub fn angle(&self, orbit: &Orbit, elapsed_sim_seconds: f64) -> f64 {
        orbit.start_angle + self.angular_velocity(orbit) * elapsed_sim_seconds * self.speed_factor
    }

    /// Position in the orbital plane for a given angle.
    pub fn position(orbit: &Orbit, angle: f64) -> Vec3 {
        Vec3::new(
            (f64::from(orbit.x_radius) * angle.cos()) as f32,
            0.0,
            (f64::from(orbit.z_radius) * angle.sin()) as f32,
        )
    }

    /// Angle the body will have `dt_ms` milliseconds after `current_angle`.
    pub fn future_angle(&self, orbit: &Orbit, current_angle: f64, dt_ms: f64) -> f64 {
        current_angle + self.angular_velocity(orbit) * (dt_ms / 1000.0) * self.speed_factor
    }

    /// Predicted position `dt_ms` milliseconds from now.
    ///
    /// Pure extrapolation: the caller's stored angle is left untouched.
    pub fn future_position(&self, orbit: &Orbit, current_angle: f64, dt_ms: f64) -> Vec3 {
        Self::position(orbit, self.future_angle(orbit, current_angle, dt_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> Orbit {
        Orbit::circular(20.0, 365.0)
    }

    #[test]
    fn test_angular_velocity_matches_period() {
        let resolver = PositionResolver::default();
        let w = resolver.angular_velocity(&earth());
        assert!((w - TAU / (365.0 * 60.0)).abs() < 1e-15);
    }

    #[test]
    fn test_angle_follows_linear_law() {
        let resolver = PositionResolver::default();
        let orbit = earth().with_start_angle(0.7);
        let w = resolver.angular_velocity(&orbit);
        for &(t1, t2) in &[(0.0, 1.0), (3.5, 90.25), (1000.0, 1000.016), (0.0, 86_400.0)] {
            let delta = resolver.angle(&orbit, t2) - resolver.angle(&orbit, t1);
            let expected = w * (t2 - t1) * resolver.speed_factor;
            assert!(
                (delta - expected).abs() <= 1e-9 * expected.abs().max(1.0),
                "t1={t1} t2={t2} delta={delta} expected={expected}"
            );
        }
    }

    #[test]
    fn test_angle_at_zero_is_start_angle() {
        let resolver = PositionResolver::default();
        let orbit = earth().with_start_angle(2.0);
        assert_eq!(resolver.angle(&orbit, 0.0), 2.0);
    }

    #[test]
    fn test_zero_time_extrapolation_is_identity() {
        let resolver = PositionResolver::default();
        let orbits = [
            earth(),
            Orbit::circular(10.0, 88.0),
            Orbit {
                x_radius: 30.0,
                z_radius: 25.0,
                days_per_rotation: 687.0,
                period_scale: 1.0,
                start_angle: 0.0,
            },
            Orbit::circular(3.6, 27.0).with_period_scale(8.0),
        ];
        for orbit in &orbits {
            for i in 0..32 {
                let theta = i as f64 * 0.37 - 4.0;
                assert_eq!(
                    resolver.future_position(orbit, theta, 0.0),
                    PositionResolver::position(orbit, theta)
                );
            }
        }
    }

    #[test]
    fn test_future_position_advances_by_one_second() {
        let resolver = PositionResolver::default();
        let orbit = earth();
        let predicted = resolver.future_position(&orbit, 0.0, 1000.0);
        let expected_angle = TAU / (365.0 * 60.0) * 5.0;
        let expected = Vec3::new(
            20.0 * expected_angle.cos() as f32,
            0.0,
            20.0 * expected_angle.sin() as f32,
        );
        assert!((predicted - expected).length() < 1e-5);
    }

    #[test]
    fn test_future_matches_clock_advance() {
        // Predicting dt ahead from angle(t) lands where angle(t + dt) puts the body.
        let resolver = PositionResolver::new(5.0, 60.0);
        let orbit = Orbit::circular(50.0, 4333.0).with_start_angle(0.3);
        let now = 12.5;
        let predicted = resolver.future_position(&orbit, resolver.angle(&orbit, now), 1000.0);
        let actual = PositionResolver::position(&orbit, resolver.angle(&orbit, now + 1.0));
        assert!((predicted - actual).length() < 1e-5);
    }

    #[test]
    fn test_position_lies_on_ellipse() {
        let orbit = Orbit {
            x_radius: 30.0,
            z_radius: 20.0,
            days_per_rotation: 100.0,
            period_scale: 1.0,
            start_angle: 0.0,
        };
        let p = PositionResolver::position(&orbit, 0.0);
        assert!((p - Vec3::new(30.0, 0.0, 0.0)).length() < 1e-6);
        let q = PositionResolver::position(&orbit, std::f64::consts::FRAC_PI_2);
        assert!((q - Vec3::new(0.0, 0.0, 20.0)).length() < 1e-5);
    }

    #[test]
    fn test_stationary_orbit_never_moves() {
        let resolver = PositionResolver::default();
        let orbit = Orbit::stationary();
        assert_eq!(resolver.angular_velocity(&orbit), 0.0);
        assert_eq!(resolver.future_position(&orbit, 0.0, 5000.0), Vec3::ZERO);
    }

    #[test]
    fn test_from_config() {
        let config = SimulationConfig {
            speed_days_per_second: 2.0,
            orbit_time_unit: 1.0,
            ..Default::default()
        };
        let resolver = PositionResolver::from_config(&config);
        assert_eq!(resolver.speed_factor, 2.0);
        assert_eq!(resolver.orbit_time_unit, 1.0);
    }
}
