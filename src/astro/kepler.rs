use nalgebra::Vector3;

use crate::math::anomaly::mean_to_true;
use crate::math::geometry::rotation_from_angles;
use crate::math::Vec3;

/// The elements needed to place a body on an elliptical orbit. Angles are in
/// radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerElements {
    pub a: f64,
    pub e: f64,
    pub incl: f64,
    pub node: f64,
    pub arg_peri: f64,
    pub mean_anomaly: f64,
}

/// Heliocentric position (AU) and velocity (AU/day) of a body on the given
/// orbit. `total_mass` is the central mass plus the body's, in solar masses.
///
/// Only elliptical orbits are supported; anything else returns `None`.
pub fn state_from_elements(
    elements: &KeplerElements,
    total_mass: f64,
    gcc: f64,
) -> Option<(Vec3, Vec3)> {
    let KeplerElements { a, e, .. } = *elements;
    if !(0.0..1.0).contains(&e) || a <= 0.0 {
        return None;
    }

    // Work in the perifocal frame first, with periapsis along x
    let theta = mean_to_true(elements.mean_anomaly, e);
    let slr = a * (1.0 - e * e);
    let radius = slr / (1.0 + e * theta.cos());
    let position = radius * Vector3::new(theta.cos(), theta.sin(), 0.0);

    // In modified time the gravitational parameter is just the mass, so
    // multiply by k to get back to AU/day
    let speed_scale = (total_mass / slr).sqrt() * gcc;
    let velocity = speed_scale * Vector3::new(-theta.sin(), e + theta.cos(), 0.0);

    let rotation = rotation_from_angles(elements.incl, elements.node, elements.arg_peri);
    Some((rotation * position, rotation * velocity))
}
