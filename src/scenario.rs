//! Everything needed to start a simulation: global run parameters and the
//! initial description of each body.

use crate::astro::{state_from_elements, KeplerElements};
use crate::consts::GAUSSIAN_K;
use crate::error::ScenarioError;
use crate::math::Vec3;
use crate::nbody::params::{Direction, DEFAULT_V_STEP};

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioParams {
    pub v_step: f64,
    /// Days advanced per frame in fixed mode; also sets the initial rate.
    pub show_step: f64,
    pub fixed: bool,
    /// Notional milliseconds between frames
    pub sleep: f64,
    /// Julian date at the start of the run, if the scenario is dated
    pub julian: Option<f64>,
    pub relativity: bool,
    pub direction: Direction,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        ScenarioParams {
            v_step: DEFAULT_V_STEP,
            show_step: 1.0,
            fixed: false,
            sleep: 20.0,
            julian: None,
            relativity: false,
            direction: Direction::Forward,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub name: String,
    pub mass: f64,
    pub position: Vec3,
    pub velocity: Vec3,
    pub central: bool,
    pub orbit: bool,
    pub trail: bool,
    pub aster: bool,
    pub colour: Option<String>,
    pub size: f64,
    /// If present, replaces `position` and `velocity` when the scenario's
    /// elements are resolved. Relative to the central body.
    pub elements: Option<KeplerElements>,
}

impl BodySpec {
    pub fn new(name: &str, mass: f64, position: Vec3, velocity: Vec3) -> Self {
        BodySpec {
            name: name.to_owned(),
            mass,
            position,
            velocity,
            central: false,
            orbit: true,
            trail: true,
            aster: false,
            colour: None,
            size: 0.0,
            elements: None,
        }
    }

    pub fn central(mut self) -> Self {
        self.central = true;
        self
    }

    pub fn with_elements(mut self, elements: KeplerElements) -> Self {
        self.elements = Some(elements);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scenario {
    pub params: ScenarioParams,
    pub bodies: Vec<BodySpec>,
}

impl Scenario {
    pub fn new(params: ScenarioParams, bodies: Vec<BodySpec>) -> Self {
        Scenario { params, bodies }
    }

    pub fn central_index(&self) -> Option<usize> {
        self.bodies.iter().position(|b| b.central)
    }

    /// Replaces the state of every element-defined body with the state its
    /// elements describe, offset by the central body's state.
    pub fn resolve_elements(&mut self) -> Result<(), ScenarioError> {
        let central = match self.central_index() {
            Some(idx) => idx,
            None => {
                return match self.bodies.iter().find(|b| b.elements.is_some()) {
                    Some(body) => Err(ScenarioError::ElementsWithoutCentral(body.name.clone())),
                    None => Ok(()),
                };
            }
        };

        let (central_mass, central_position, central_velocity) = {
            let c = &self.bodies[central];
            (c.mass, c.position, c.velocity)
        };

        for (idx, body) in self.bodies.iter_mut().enumerate() {
            let elements = match body.elements {
                Some(elements) if idx != central => elements,
                _ => continue,
            };

            let (position, velocity) =
                state_from_elements(&elements, central_mass + body.mass, GAUSSIAN_K).ok_or_else(|| {
                    ScenarioError::NotElliptical {
                        name: body.name.clone(),
                        a: elements.a,
                        e: elements.e,
                    }
                })?;
            body.position = central_position + position;
            body.velocity = central_velocity + velocity;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn earth_elements() -> KeplerElements {
        KeplerElements {
            a: 1.0,
            e: 0.0,
            incl: 0.0,
            node: 0.0,
            arg_peri: 0.0,
            mean_anomaly: 0.0,
        }
    }

    #[test]
    fn test_resolve_relative_to_central() {
        let sun = BodySpec::new("Sun", 1.0, Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 0.01)).central();
        let earth = BodySpec::new("Earth", 0.0, Vec3::zeros(), Vec3::zeros()).with_elements(earth_elements());
        let mut scenario = Scenario::new(ScenarioParams::default(), vec![sun, earth]);

        scenario.resolve_elements().unwrap();
        let earth = &scenario.bodies[1];
        assert_relative_eq!(earth.position, Vec3::new(1.0, 1.0, 0.0), epsilon = 1e-14);
        assert_relative_eq!(earth.velocity, Vec3::new(0.0, GAUSSIAN_K, 0.01), epsilon = 1e-14);
    }

    #[test]
    fn test_resolve_errors() {
        let earth = BodySpec::new("Earth", 0.0, Vec3::zeros(), Vec3::zeros()).with_elements(earth_elements());
        let mut scenario = Scenario::new(ScenarioParams::default(), vec![earth.clone()]);
        assert!(matches!(
            scenario.resolve_elements(),
            Err(ScenarioError::ElementsWithoutCentral(name)) if name == "Earth"
        ));

        let mut comet = earth;
        comet.name = "Comet".to_owned();
        comet.elements = Some(KeplerElements { e: 1.2, ..earth_elements() });
        let sun = BodySpec::new("Sun", 1.0, Vec3::zeros(), Vec3::zeros()).central();
        let mut scenario = Scenario::new(ScenarioParams::default(), vec![sun, comet]);
        assert!(matches!(
            scenario.resolve_elements(),
            Err(ScenarioError::NotElliptical { e, .. }) if e == 1.2
        ));
    }

    #[test]
    fn test_nothing_to_resolve() {
        let body = BodySpec::new("Rock", 1.0, Vec3::x(), Vec3::y());
        let mut scenario = Scenario::new(ScenarioParams::default(), vec![body.clone()]);
        scenario.resolve_elements().unwrap();
        assert_eq!(scenario.bodies[0], body);
    }
}
