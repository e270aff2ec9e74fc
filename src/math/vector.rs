use nalgebra::Vector3;

/// All positions, velocities and accelerations in the simulation.
pub type Vec3 = Vector3<f64>;

/// Fused multiply-add helpers used by the integrator's hot loops.
///
/// nalgebra already gives us `+`, `*`, `norm`, `dot` and so on; these two exist
/// so that a kick or a drift is a single in-place write, with no temporaries.
pub trait MulAdd {
    /// self = base + dir * scale
    fn set_mul_add(&mut self, base: &Vec3, dir: &Vec3, scale: f64);

    /// self += dir * scale
    fn add_scaled(&mut self, dir: &Vec3, scale: f64);
}

impl MulAdd for Vec3 {
    #[inline]
    fn set_mul_add(&mut self, base: &Vec3, dir: &Vec3, scale: f64) {
        self.x = base.x + dir.x * scale;
        self.y = base.y + dir.y * scale;
        self.z = base.z + dir.z * scale;
    }

    #[inline]
    fn add_scaled(&mut self, dir: &Vec3, scale: f64) {
        self.x += dir.x * scale;
        self.y += dir.y * scale;
        self.z += dir.z * scale;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_set_mul_add() {
        let mut v = Vec3::new(100.0, 100.0, 100.0);
        v.set_mul_add(&Vec3::new(1.0, 2.0, 3.0), &Vec3::new(4.0, -5.0, 0.5), 2.0);
        assert_relative_eq!(v, Vec3::new(9.0, -8.0, 4.0));

        // Zero scale is just a copy
        v.set_mul_add(&Vec3::new(1.0, 2.0, 3.0), &Vec3::new(4.0, -5.0, 0.5), 0.0);
        assert_relative_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_add_scaled() {
        let mut v = Vec3::new(1.0, 1.0, 1.0);
        v.add_scaled(&Vec3::new(2.0, 0.0, -4.0), 0.25);
        assert_relative_eq!(v, Vec3::new(1.5, 1.0, 0.0));

        v.add_scaled(&Vec3::new(2.0, 0.0, -4.0), -0.25);
        assert_relative_eq!(v, Vec3::new(1.0, 1.0, 1.0));
    }
}
