use crate::consts::NEWTON_G;
use crate::math::Vec3;
use crate::nbody::{Body, BodyId, BodyInfo, BodyRole, PhaseState};

/// An orbiting body with the given mass, named after its index.
pub fn make_body(index: usize, mass: f64, position: Vec3, velocity: Vec3) -> Body {
    Body::new(
        BodyId(index),
        BodyInfo::new(&format!("body{}", index), false),
        BodyRole::Orbiting,
        mass,
        NEWTON_G,
        PhaseState::new(position, velocity),
    )
}

pub fn make_central_body(index: usize, mass: f64, position: Vec3, velocity: Vec3) -> Body {
    let mut body = make_body(index, mass, position, velocity);
    body.role = BodyRole::Central;
    body
}

// We'll count this as a success if the difference between the vectors is small,
// relative to the length of the expected vector.
pub fn assert_vectors_close(expected: &Vec3, actual: &Vec3, tolerance: f64) {
    let difference = actual - expected;
    if difference.norm() >= tolerance * expected.norm() {
        panic!(
            "Vectors were not as close as expected!\n
            Expected: {}\n
            Received: {}\n
            Difference: {}\n
            Relative difference: {:e}",
            expected,
            actual,
            difference,
            difference.norm() / expected.norm(),
        );
    }
}
