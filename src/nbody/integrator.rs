use tracing::trace;

use crate::math::MulAdd;

use super::accel::accelerate;
use super::body::Body;
use super::encounter::encounter_time;
use super::params::ParameterSet;

/// Yoshida's 6th-order composition weights (solution A).
pub const YOSHIDA6: [f64; 4] = [
    0.784513610477560,
    0.235573213359357,
    -1.17767998417887,
    1.31518632068391,
];

/// Order in which the weights are applied; symmetric, so the composite step
/// is time-reversible.
const COMPOSITION: [usize; 7] = [0, 1, 2, 3, 2, 1, 0];

/// Drift-kick-drift leapfrog of length `step`, in velocity-position form.
///
/// Expects every body's `acceleration` to be consistent with its current
/// position, and leaves it that way.
pub fn leapfrog(bodies: &mut [Body], params: &ParameterSet, step: f64) {
    let half = 0.5 * step;

    for body in bodies.iter_mut() {
        body.next
            .velocity
            .set_mul_add(&body.current.velocity, &body.acceleration, half);
        body.next
            .position
            .set_mul_add(&body.current.position, &body.next.velocity, step);
    }

    accelerate(bodies, params);

    for body in bodies.iter_mut() {
        body.current
            .velocity
            .set_mul_add(&body.next.velocity, &body.acceleration, half);
        body.current.position = body.next.position;
    }
}

/// One 6th-order step, built from seven leapfrogs.
pub fn yoshida_step(bodies: &mut [Body], params: &ParameterSet, step: f64) {
    for &k in COMPOSITION.iter() {
        leapfrog(bodies, params, step * YOSHIDA6[k]);
    }
}

/// Adaptive driver: keeps the current sub-step and chops requested intervals
/// into sub-steps no longer than it.
#[derive(Debug, Clone)]
pub struct Integrator {
    sub_step: f64,
}

impl Integrator {
    pub fn new(bodies: &[Body], params: &ParameterSet) -> Self {
        Integrator {
            sub_step: encounter_time(bodies) / params.v_step,
        }
    }

    pub fn sub_step(&self) -> f64 {
        self.sub_step
    }

    pub fn reestimate(&mut self, bodies: &[Body], params: &ParameterSet) {
        self.sub_step = encounter_time(bodies) / params.v_step;
    }

    /// Moves the system forward by `interval` days of its own time. Returns
    /// the number of sub-steps taken.
    pub fn advance(&mut self, bodies: &mut [Body], params: &ParameterSet, interval: f64) -> usize {
        let mut remaining = interval;
        let mut count = 0;

        while remaining > 0.0 {
            // A zero sub-step would never finish; f64::min also skips NaN
            let step = if self.sub_step > 0.0 {
                self.sub_step.min(remaining)
            } else {
                remaining
            };
            yoshida_step(bodies, params, step);
            remaining -= step;
            count += 1;

            self.reestimate(bodies, params);
        }

        trace!(interval, sub_steps = count, sub_step = self.sub_step, "advanced");
        count
    }
}
