use nalgebra::{Rotation3, Vector3};

use std::f64::consts::PI;

// Beyond this, asin/acos lose precision, so we switch to the other one.
const SIN_COS_CROSSOVER: f64 = 0.707107;

/// Recovers an angle in [0, 2pi) from its sine and cosine.
///
/// Whichever of asin/acos is better conditioned gives the reference angle in
/// the first quadrant, and the signs pick the quadrant.
pub fn angle_from_sin_cos(sin_x: f64, cos_x: f64) -> f64 {
    let mut x = 0.0;
    if sin_x.abs() <= SIN_COS_CROSSOVER {
        x = sin_x.abs().asin();
    }
    if cos_x.abs() <= SIN_COS_CROSSOVER {
        x = cos_x.abs().acos();
    }

    match (cos_x < 0.0, sin_x < 0.0) {
        (false, false) => x,
        (true, false) => PI - x,
        (true, true) => PI + x,
        (false, true) => 2.0 * PI - x,
    }
}

/// acos that tolerates arguments a few ulps outside [-1, 1].
pub fn clamped_acos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// Rotation taking the perifocal frame (periapsis along x, orbit normal along
/// z) to the reference frame.
pub fn rotation_from_angles(incl: f64, node: f64, arg_peri: f64) -> Rotation3<f64> {
    // Spin around z so periapsis sits arg_peri past the node, tilt around x
    // (now the node line) by the inclination, then turn the node out to its
    // longitude.
    Rotation3::from_axis_angle(&Vector3::z_axis(), node)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), incl)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), arg_peri)
}
