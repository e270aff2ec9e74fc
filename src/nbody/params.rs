use crate::consts::{GAUSSIAN_K, LIGHT_SPEED};

use super::body::BodyId;

/// Default accuracy knob: sub-steps are this many times shorter than the
/// closest encounter timescale.
pub const DEFAULT_V_STEP: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Constants and switches that stay fixed for the duration of a step.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    /// Gaussian gravitational constant
    pub gcc: f64,
    /// G = gcc^2
    pub g: f64,
    /// Speed of light, AU/day
    pub cv: f64,
    /// cv^2
    pub vcc: f64,
    pub central: Option<BodyId>,
    pub direction: Direction,
    pub relativity: bool,
    pub v_step: f64,
}

impl ParameterSet {
    pub fn new(v_step: f64, relativity: bool) -> Self {
        ParameterSet {
            gcc: GAUSSIAN_K,
            g: GAUSSIAN_K * GAUSSIAN_K,
            cv: LIGHT_SPEED,
            vcc: LIGHT_SPEED * LIGHT_SPEED,
            central: None,
            direction: Direction::Forward,
            relativity,
            v_step,
        }
    }

    /// True only if relativity was asked for and there's a central body to
    /// take it relative to.
    pub fn relativity_active(&self) -> bool {
        self.relativity && self.central.is_some()
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::new(DEFAULT_V_STEP, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ParameterSet::default();
        assert_eq!(params.g, params.gcc * params.gcc);
        assert_eq!(params.vcc, params.cv * params.cv);
        assert_eq!(params.v_step, 100.0);
        assert_eq!(params.direction.sign(), 1.0);
        assert!(!params.relativity_active());
    }

    #[test]
    fn test_relativity_needs_central_body() {
        let mut params = ParameterSet::new(100.0, true);
        assert!(!params.relativity_active());
        params.central = Some(BodyId(0));
        assert!(params.relativity_active());
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::Forward.reversed(), Direction::Backward);
        assert_eq!(Direction::Backward.reversed().sign(), 1.0);
        assert_eq!(Direction::Backward.sign(), -1.0);
    }
}
