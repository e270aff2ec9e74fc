use crate::math::Vec3;

use super::body::{Body, PhaseState};

/// Mass-weighted mean position and velocity. Uses relativistic masses where
/// asked to and available.
pub fn barycenter(bodies: &[Body], relativistic: bool) -> PhaseState {
    let mut total_weight = 0.0;
    let mut position = Vec3::zeros();
    let mut velocity = Vec3::zeros();

    for body in bodies {
        let weight = body.barycentric_weight(relativistic);
        total_weight += weight;
        position += weight * body.position();
        velocity += weight * body.velocity();
    }

    PhaseState::new(position / total_weight, velocity / total_weight)
}

/// Shifts every body so that the barycenter sits still at the origin, and
/// returns the offset that was removed.
pub fn fix_barycenter(bodies: &mut [Body], relativistic: bool) -> PhaseState {
    let offset = barycenter(bodies, relativistic);
    for body in bodies.iter_mut() {
        body.current.position -= offset.position;
        body.current.velocity -= offset.velocity;
    }
    offset
}
