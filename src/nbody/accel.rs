use crate::math::MulAdd;

use super::body::Body;
use super::params::ParameterSet;

/// Recomputes every body's acceleration from the positions in its `next`
/// buffer.
///
/// All pairs are visited once (O(n^2)); a pair is skipped only when neither
/// body has any mass. Massless bodies are still pulled by the others.
pub fn accelerate(bodies: &mut [Body], params: &ParameterSet) {
    for body in bodies.iter_mut() {
        body.acceleration.fill(0.0);
    }

    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let gmass_i = bodies[i].gmass();
            let gmass_j = bodies[j].gmass();
            if gmass_i <= 0.0 && gmass_j <= 0.0 {
                continue;
            }

            // Points from i to j
            let separation = bodies[j].next.position - bodies[i].next.position;
            let r = separation.norm();
            let inv_r3 = 1.0 / (r * r * r);

            let pull_on_i = gmass_j * inv_r3 * relativistic_factor(&bodies[i], &bodies[j], r, params);
            let pull_on_j = gmass_i * inv_r3 * relativistic_factor(&bodies[j], &bodies[i], r, params);

            bodies[i].acceleration.add_scaled(&separation, pull_on_i);
            bodies[j].acceleration.add_scaled(&separation, -pull_on_j);
        }
    }
}

/// Correction to the pull of `source` on `body` (from A. Vitagliano's SOLEX).
///
/// Only the central body's pull on an orbiting body is corrected, and only
/// once that body has elements, since the correction needs its semi-major
/// axis. Everything else is plain Newtonian.
fn relativistic_factor(body: &Body, source: &Body, r: f64, params: &ParameterSet) -> f64 {
    if !params.relativity || !source.is_central() || !body.info.show_orbit {
        return 1.0;
    }

    match (body.relativistic, body.elements) {
        (Some(rel), Some(elements)) => 1.0 - 9.0 * rel.par / elements.a + 6.0 * rel.par / r,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::astro::OrbitalElements;
    use crate::consts::{GAUSSIAN_K, NEWTON_G};
    use crate::math::Vec3;
    use crate::nbody::{BodyId, Relativistic};
    use crate::testing_utils::{make_body, make_central_body};

    #[test]
    fn test_inverse_square() {
        let mut bodies = vec![
            make_body(0, 1.0, Vec3::zeros(), Vec3::zeros()),
            make_body(1, 0.5, Vec3::new(2.0, 0.0, 0.0), Vec3::zeros()),
        ];
        accelerate(&mut bodies, &ParameterSet::default());

        assert_relative_eq!(bodies[0].acceleration, Vec3::x() * 0.5 * NEWTON_G / 4.0);
        assert_relative_eq!(bodies[1].acceleration, -Vec3::x() * NEWTON_G / 4.0);
    }

    #[test]
    fn test_momentum_balance() {
        let mut bodies = vec![
            make_body(0, 1.0, Vec3::new(0.1, -0.2, 0.0), Vec3::zeros()),
            make_body(1, 1e-3, Vec3::new(5.2, 0.3, 0.1), Vec3::zeros()),
            make_body(2, 3e-4, Vec3::new(-9.5, 1.0, -0.4), Vec3::zeros()),
        ];
        accelerate(&mut bodies, &ParameterSet::default());

        let total_force: Vec3 = bodies.iter().map(|b| b.acceleration * b.mass()).sum();
        assert_relative_eq!(total_force, Vec3::zeros(), epsilon = 1e-18);
    }

    #[test]
    fn test_massless_bodies() {
        let mut bodies = vec![
            make_body(0, 0.0, Vec3::zeros(), Vec3::zeros()),
            make_body(1, 0.0, Vec3::new(1e-3, 0.0, 0.0), Vec3::zeros()),
            make_body(2, 1.0, Vec3::new(0.0, 1.0, 0.0), Vec3::zeros()),
        ];
        // Stale values must be cleared
        bodies[0].acceleration = Vec3::new(1.0, 1.0, 1.0);
        accelerate(&mut bodies, &ParameterSet::default());

        // The two massless bodies are very close together, but don't pull on
        // each other; they both feel the massive body
        assert_relative_eq!(bodies[0].acceleration, Vec3::y() * NEWTON_G);
        assert_relative_eq!(
            bodies[1].acceleration.y,
            NEWTON_G / (1.0 + 1e-6_f64).powf(1.5),
            max_relative = 1e-12
        );

        // ...and don't pull on it
        assert_eq!(bodies[2].acceleration, Vec3::zeros());
    }

    #[test]
    fn test_relativistic_correction() {
        let make_bodies = || {
            vec![
                make_central_body(0, 1.0, Vec3::zeros(), Vec3::zeros()),
                make_body(1, 1.66e-7, Vec3::new(0.4, 0.0, 0.0), Vec3::new(0.0, 0.03, 0.0)),
            ]
        };
        let mut params = ParameterSet::new(100.0, true);
        params.central = Some(BodyId(0));
        let par = NEWTON_G / params.vcc;

        let mut newtonian = make_bodies();
        accelerate(&mut newtonian, &params);

        // Without elements there's nothing to correct with
        let mut bodies = make_bodies();
        bodies[1].relativistic = Some(Relativistic { mass: bodies[1].gmass(), par });
        accelerate(&mut bodies, &params);
        assert_eq!(bodies[1].acceleration, newtonian[1].acceleration);

        let elements = OrbitalElements::from_state(
            &bodies[1].position(),
            &bodies[1].velocity(),
            1.0 + 1.66e-7,
            GAUSSIAN_K,
        );
        bodies[1].elements = Some(elements);
        accelerate(&mut bodies, &params);

        let factor = 1.0 - 9.0 * par / elements.a + 6.0 * par / 0.4;
        assert_relative_eq!(
            bodies[1].acceleration,
            newtonian[1].acceleration * factor,
            max_relative = 1e-14
        );
        // The central body's own acceleration stays Newtonian
        assert_eq!(bodies[0].acceleration, newtonian[0].acceleration);

        // Switching relativity off restores the Newtonian value
        params.relativity = false;
        accelerate(&mut bodies, &params);
        assert_eq!(bodies[1].acceleration, newtonian[1].acceleration);
    }
}
