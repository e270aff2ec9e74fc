use crate::astro::OrbitalElements;

use super::body::Body;
use super::params::ParameterSet;

/// Elements of `body` relative to `central`.
///
/// Velocities are stored with the direction of time folded in, so they're
/// flipped back here before solving.
pub fn solve_elements(body: &Body, central: &Body, params: &ParameterSet) -> OrbitalElements {
    let position = body.position() - central.position();
    let velocity = (body.velocity() - central.velocity()) * params.direction.sign();
    OrbitalElements::from_state(&position, &velocity, central.mass() + body.mass(), params.gcc)
}

/// Refreshes the elements of every orbit-eligible body. Without a central
/// body there's nothing to measure against.
pub fn update_elements(bodies: &mut [Body], params: &ParameterSet) {
    let central = match params.central {
        Some(id) => id.0,
        None => return,
    };

    for n in 0..bodies.len() {
        if n == central || !bodies[n].info.show_orbit {
            continue;
        }
        let elements = solve_elements(&bodies[n], &bodies[central], params);
        bodies[n].elements = Some(elements);
    }
}
