//! Approximate heliocentric longitudes used to seed planet start angles.
//!
//! Uses the J2000 mean longitude and its secular rate for each planet. Mean
//! longitude ignores eccentricity, which is good to a few degrees and more
//! than enough to place the planets where they roughly are today.

use std::f64::consts::TAU;
use std::time::{SystemTime, UNIX_EPOCH};

/// Julian date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian date of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// `(name, L0 in degrees, dL/dt in degrees per Julian century)`.
const MEAN_LONGITUDES: [(&str, f64, f64); 8] = [
    ("mercury", 252.250_323_50, 149_472.674_111_75),
    ("venus", 181.979_099_50, 58_517.815_387_29),
    ("earth", 100.464_571_66, 35_999.372_449_81),
    ("mars", -4.553_432_05, 19_140.302_684_99),
    ("jupiter", 34.396_440_51, 3_034.746_127_75),
    ("saturn", 49.954_244_23, 1_222.493_622_01),
    ("uranus", 313.238_104_51, 428.482_027_85),
    ("neptune", -55.120_029_69, 218.459_453_25),
];

/// Days elapsed since J2000.0 for a wall-clock instant.
///
/// Instants before the Unix epoch produce negative values.
pub fn days_since_j2000(time: SystemTime) -> f64 {
    let unix_seconds = match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    };
    unix_seconds / SECONDS_PER_DAY + UNIX_EPOCH_JD - J2000_JD
}

/// Mean heliocentric longitude in radians, normalized to `[0, 2pi)`.
///
/// `planet` is matched case-insensitively; unknown names return `None`.
pub fn mean_longitude(planet: &str, days_since_j2000: f64) -> Option<f64> {
    let (_, l0, rate) = MEAN_LONGITUDES
        .iter()
        .find(|(name, _, _)| name.eq_ignore_ascii_case(planet))?;
    let centuries = days_since_j2000 / DAYS_PER_CENTURY;
    let degrees = l0 + rate * centuries;
    Some(degrees.to_radians().rem_euclid(TAU))
}
