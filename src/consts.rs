//! Physical constants, in AU / day / solar-mass units.

use std::f64::consts::PI;

/// Gaussian gravitational constant, k.
pub const GAUSSIAN_K: f64 = 0.01720209895;

/// Newton's G in AU^3 / (solar mass * day^2). Equal to k^2.
pub const NEWTON_G: f64 = GAUSSIAN_K * GAUSSIAN_K;

/// Speed of light in AU/day.
pub const LIGHT_SPEED: f64 = 173.1446;

/// Julian date of the unix epoch.
pub const JULIAN_UNIX_EPOCH: f64 = 2440587.5;

pub const SECONDS_PER_DAY: f64 = 86400.0;

// Earth-like test body
pub const EARTH_MASS: f64 = 3.0e-6;
pub const SIDEREAL_YEAR: f64 = 365.25636;

pub fn get_circular_velocity(radius: f64, mu: f64) -> f64 {
    (mu / radius).sqrt()
}

pub fn get_period(a: f64, mu: f64) -> f64 {
    (4.0 * PI * PI * a.powi(3) / mu).sqrt()
}
