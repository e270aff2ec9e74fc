use tracing::debug;

use super::body::{Body, Relativistic};
use super::params::ParameterSet;

/// Bodies closer than this (AU) are left out of the potential sum.
const POTENTIAL_CUTOFF: f64 = 0.9;

/// Gives every body its relativistic mass and parameter. Does nothing unless
/// relativity is active.
pub fn assign_relativistic_masses(bodies: &mut [Body], params: &ParameterSet) {
    let central = match params.central {
        Some(id) if params.relativity => id,
        _ => return,
    };

    let par = bodies[central.0].gmass() / params.vcc;
    let masses: Vec<f64> = (0..bodies.len())
        .map(|n| {
            let body = &bodies[n];
            let potential = potential_sum(bodies, n);
            body.gmass()
                * (1.0 + body.velocity().norm_squared() / (2.0 * params.vcc)
                    - potential / (2.0 * params.vcc))
        })
        .collect();

    for (body, mass) in bodies.iter_mut().zip(masses) {
        body.relativistic = Some(Relativistic { mass, par });
    }
    debug!(par, "assigned relativistic masses");
}

/// Sum of G*m/r over the other bodies, skipping close neighbours.
fn potential_sum(bodies: &[Body], n: usize) -> f64 {
    let position = bodies[n].position();
    bodies
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != n)
        .filter_map(|(_, other)| {
            let distance = (position - other.position()).norm();
            (distance > POTENTIAL_CUTOFF).then(|| other.gmass() / distance)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::consts::NEWTON_G;
    use crate::math::Vec3;
    use crate::nbody::BodyId;
    use crate::testing_utils::{make_body, make_central_body};

    fn system() -> Vec<Body> {
        vec![
            make_central_body(0, 1.0, Vec3::zeros(), Vec3::zeros()),
            make_body(1, 1e-3, Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.01, 0.0)),
            make_body(2, 1e-6, Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 0.02, 0.0)),
        ]
    }

    #[test]
    fn test_needs_central_and_switch() {
        let mut bodies = system();
        let mut params = ParameterSet::new(100.0, true);
        assign_relativistic_masses(&mut bodies, &params);
        assert!(bodies.iter().all(|b| b.relativistic.is_none()));

        params.central = Some(BodyId(0));
        params.relativity = false;
        assign_relativistic_masses(&mut bodies, &params);
        assert!(bodies.iter().all(|b| b.relativistic.is_none()));
    }

    #[test]
    fn test_masses() {
        let mut bodies = system();
        let mut params = ParameterSet::new(100.0, true);
        params.central = Some(BodyId(0));
        assign_relativistic_masses(&mut bodies, &params);

        let vcc = params.vcc;
        let par = NEWTON_G / vcc;
        for body in &bodies {
            assert_eq!(body.relativistic.unwrap().par, par);
        }

        // Central body: at rest, only body 1 is far enough away to count
        let s = 1e-3 * NEWTON_G / 5.0;
        let expected = NEWTON_G * (1.0 - s / (2.0 * vcc));
        assert_relative_eq!(bodies[0].relativistic.unwrap().mass, expected, max_relative = 1e-15);

        // Body 2: the sun is within the cutoff, body 1 isn't
        let s = 1e-3 * NEWTON_G / 4.5;
        let expected = 1e-6 * NEWTON_G * (1.0 + 0.0004 / (2.0 * vcc) - s / (2.0 * vcc));
        assert_relative_eq!(bodies[2].relativistic.unwrap().mass, expected, max_relative = 1e-15);
    }
}
