use super::body::Body;

/// Returned when no pair of bodies constrains the step size.
pub const NO_ENCOUNTER: f64 = f64::MAX;

/// Shortest encounter timescale |R|/|V| over all pairs that involve at least
/// one massive body, measured from the `next` buffers.
///
/// Pairs with no relative motion, or whose ratio is undefined, don't count.
pub fn encounter_time(bodies: &[Body]) -> f64 {
    let mut closest = f64::INFINITY;

    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            if a.gmass() <= 0.0 && b.gmass() <= 0.0 {
                continue;
            }
            let r2 = (b.next.position - a.next.position).norm_squared();
            let v2 = (b.next.velocity - a.next.velocity).norm_squared();
            let ratio = r2 / v2;
            // NaN never compares less, so 0/0 pairs drop out here
            if ratio < closest {
                closest = ratio;
            }
        }
    }

    if closest.is_finite() {
        closest.sqrt()
    } else {
        NO_ENCOUNTER
    }
}
