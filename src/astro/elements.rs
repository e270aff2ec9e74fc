use std::f64::consts::PI;

use crate::math::anomaly::wrap_two_pi;
use crate::math::geometry::{angle_from_sin_cos, clamped_acos};
use crate::math::Vec3;

/// Anything more eccentric than this is treated as parabolic, so that the
/// classification of near-parabolic comets doesn't flicker from frame to frame.
pub const PARABOLIC_ECCENTRICITY: f64 = 0.998;

// The ascending node is undefined when the orbit lies in the reference plane.
const DEGENERATE_NODE_RATIO: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitType {
    Elliptical,
    /// Also covers hyperbolic orbits; there's no separate hyperbolic solution.
    Parabolic,
}

/// Sines and cosines of the orientation angles, precomputed for drawing the
/// orbit ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderAngles {
    pub sin_w: f64,
    pub cos_w: f64,
    pub sin_node: f64,
    pub cos_node: f64,
    pub sin_incl: f64,
    pub cos_incl: f64,
}

/// Classical osculating elements of a body about the central body.
///
/// Distances are in AU and angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis
    pub a: f64,
    /// Eccentricity
    pub e: f64,
    /// Inclination
    pub incl: f64,
    /// Longitude of the ascending node (Ω)
    pub node: f64,
    /// Argument of perifocus (ω)
    pub arg_peri: f64,
    /// Longitude of perifocus (ϖ = Ω + ω)
    pub long_peri: f64,
    /// Perifocal distance
    pub q: f64,
    /// Semi-minor axis
    pub b: f64,
    /// Distance from the center of the ellipse to the focus
    pub c: f64,
    pub orbit_type: OrbitType,
    /// Orbital period in days, for closed orbits
    pub period: Option<f64>,
    pub angles: RenderAngles,
}

impl RenderAngles {
    fn new(w: f64, node: f64, incl: f64) -> Self {
        Self {
            sin_w: w.sin(),
            cos_w: w.cos(),
            sin_node: node.sin(),
            cos_node: node.cos(),
            sin_incl: incl.sin(),
            cos_incl: incl.cos(),
        }
    }
}

impl OrbitalElements {
    /// Solves for the elements from a heliocentric state.
    ///
    /// `velocity` is in AU/day and already points in the physical direction of
    /// motion. Internally it's rescaled by 1/k, so that the equations work in
    /// "modified time" where the central mass is the gravitational parameter.
    /// `total_mass` is the sum of the two masses, in solar masses.
    ///
    /// Formulae are from Boulet, *Methods of Orbit Determination*, ch. 4.
    pub fn from_state(position: &Vec3, velocity: &Vec3, total_mass: f64, gcc: f64) -> Self {
        let velocity = velocity / gcc;

        let r = position.norm();
        let v2 = velocity.norm_squared();
        let rv = velocity.dot(position);

        // Eccentricity vector points to perifocus, H is normal to the orbit
        // plane, and N points to the ascending node.
        let ecc_vector = (v2 / total_mass - 1.0 / r) * position - (rv / total_mass) * velocity;
        let ang_mom = position.cross(&velocity);
        let node_vector = Vec3::new(-ang_mom.y, ang_mom.x, 0.0);

        let a = 1.0 / (2.0 / r - v2 / total_mass);
        let e = ecc_vector.norm();
        let semiparameter = ang_mom.norm_squared() / total_mass;
        let q = semiparameter / (1.0 + e);

        let h = ang_mom.norm();
        let n = node_vector.norm();
        let incl = clamped_acos(ang_mom.z / h);

        let orbit_type = if e > PARABOLIC_ECCENTRICITY {
            OrbitType::Parabolic
        } else {
            OrbitType::Elliptical
        };

        let (node, arg_peri, long_peri, angles) = if n > DEGENERATE_NODE_RATIO * h {
            let mut node = clamped_acos(node_vector.x / n);
            if node_vector.y < 0.0 {
                node = 2.0 * PI - node;
            }

            let mut arg_peri = 0.0;
            if e > 0.0 {
                arg_peri = clamped_acos(node_vector.dot(&ecc_vector) / (n * e));
                if ecc_vector.z < 0.0 {
                    arg_peri = 2.0 * PI - arg_peri;
                }
            }

            let long_peri = wrap_two_pi(node + arg_peri);
            (node, arg_peri, long_peri, RenderAngles::new(arg_peri, node, incl))
        } else {
            // In the reference plane: no node, so the perifocus is located
            // directly from the eccentricity vector.
            let long_peri = if e > 0.0 {
                angle_from_sin_cos(ecc_vector.y / e, ecc_vector.x / e)
            } else {
                0.0
            };
            (0.0, long_peri, long_peri, RenderAngles::new(long_peri, 0.0, 0.0))
        };

        let period = match orbit_type {
            OrbitType::Elliptical if a > 0.0 => {
                Some(2.0 * PI * (a.powi(3) / total_mass).sqrt() / gcc)
            }
            _ => None,
        };

        OrbitalElements {
            a,
            e,
            incl,
            node,
            arg_peri,
            long_peri,
            q,
            b: a * (1.0 - e * e).sqrt(),
            c: e * a,
            orbit_type,
            period,
            angles,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.orbit_type == OrbitType::Elliptical && self.a > 0.0
    }

    pub fn apoapsis(&self) -> Option<f64> {
        if self.is_closed() {
            Some(2.0 * self.a - self.q)
        } else {
            None
        }
    }
}
