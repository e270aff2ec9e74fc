//! Conversions between mean, eccentric and true anomaly for elliptical orbits.

use std::f64::consts::PI;

use crate::math::root_finding::newton_plus_bisection;

const KEPLER_ITERATIONS: usize = 100;

pub fn mean_to_eccentric(mean_anomaly: f64, e: f64) -> f64 {
    debug_assert!((0.0..1.0).contains(&e));

    // E - M = e sin E, so the root is always within e of M.
    let kepler = |x: f64| (x - e * x.sin() - mean_anomaly, 1.0 - e * x.cos());
    newton_plus_bisection(kepler, mean_anomaly - e, mean_anomaly + e, KEPLER_ITERATIONS)
}

pub fn eccentric_to_mean(eccentric_anomaly: f64, e: f64) -> f64 {
    eccentric_anomaly - e * eccentric_anomaly.sin()
}

pub fn eccentric_to_true(eccentric_anomaly: f64, e: f64) -> f64 {
    // tan(theta/2) = sqrt((1+e)/(1-e)) tan(E/2), written with atan2 so it
    // doesn't blow up at E = pi
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + e).sqrt() * half.sin()).atan2((1.0 - e).sqrt() * half.cos())
}

pub fn true_to_eccentric(true_anomaly: f64, e: f64) -> f64 {
    let half = true_anomaly / 2.0;
    2.0 * ((1.0 - e).sqrt() * half.sin()).atan2((1.0 + e).sqrt() * half.cos())
}

pub fn mean_to_true(mean_anomaly: f64, e: f64) -> f64 {
    eccentric_to_true(mean_to_eccentric(mean_anomaly, e), e)
}

pub fn true_to_mean(true_anomaly: f64, e: f64) -> f64 {
    eccentric_to_mean(true_to_eccentric(true_anomaly, e), e)
}

/// Wraps an angle into [0, 2pi).
pub fn wrap_two_pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(2.0 * PI);
    // rem_euclid can round up to exactly 2pi for tiny negative inputs
    if wrapped >= 2.0 * PI {
        0.0
    } else {
        wrapped
    }
}
