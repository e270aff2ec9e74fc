use tracing::{debug, warn};

use crate::astro::OrbitalElements;
use crate::error::SetupError;
use crate::math::Vec3;
use crate::scenario::Scenario;

use super::accel::accelerate;
use super::barycenter::fix_barycenter;
use super::body::{Body, BodyId, BodyInfo, BodyRole, PhaseState};
use super::integrator::Integrator;
use super::orbits::update_elements;
use super::params::{Direction, ParameterSet};
use super::relativity::assign_relativistic_masses;

/// Owned copy of what a renderer needs for one body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub name: String,
    pub base_name: String,
    pub position: Vec3,
    /// In the physical direction of motion, whichever way time is running
    pub velocity: Vec3,
    pub elements: Option<OrbitalElements>,
}

pub struct Simulation {
    scenario: Scenario,
    bodies: Vec<Body>,
    params: ParameterSet,
    integrator: Integrator,
    elapsed: f64,
}

impl Simulation {
    pub fn new(scenario: Scenario) -> Result<Self, SetupError> {
        validate(&scenario)?;

        let mut params = ParameterSet::new(scenario.params.v_step, scenario.params.relativity);
        params.central = scenario.central_index().map(BodyId);

        let mut bodies: Vec<Body> = scenario
            .bodies
            .iter()
            .enumerate()
            .map(|(idx, spec)| {
                let mut info = BodyInfo::new(&spec.name, spec.aster);
                info.colour = spec.colour.clone();
                info.size = spec.size;
                info.show_orbit = spec.orbit;
                info.show_trail = spec.trail;

                let role = if spec.central {
                    BodyRole::Central
                } else {
                    BodyRole::Orbiting
                };
                let state = PhaseState::new(spec.position, spec.velocity);
                Body::new(BodyId(idx), info, role, spec.mass, params.g, state)
            })
            .collect();

        let offset = fix_barycenter(&mut bodies, false);
        debug!(position = %offset.position, velocity = %offset.velocity, "moved to barycentric frame");

        if params.relativity {
            if params.relativity_active() {
                assign_relativistic_masses(&mut bodies, &params);
                fix_barycenter(&mut bodies, true);
            } else {
                warn!("relativity requested, but there is no central body; running Newtonian");
            }
        }

        for body in bodies.iter_mut() {
            body.sync_next();
        }
        accelerate(&mut bodies, &params);
        let integrator = Integrator::new(&bodies, &params);
        debug!(sub_step = integrator.sub_step(), bodies = bodies.len(), "simulation ready");

        let mut simulation = Simulation {
            scenario,
            bodies,
            params,
            integrator,
            elapsed: 0.0,
        };
        if simulation.scenario.params.direction == Direction::Backward {
            simulation.reverse();
        }
        Ok(simulation)
    }

    /// Moves the system `interval` days along the current direction of time.
    pub fn advance(&mut self, interval: f64) {
        self.integrator.advance(&mut self.bodies, &self.params, interval);
        self.elapsed += interval * self.params.direction.sign();
    }

    pub fn elements_for_all(&mut self) {
        update_elements(&mut self.bodies, &self.params);
    }

    /// Runs time the other way. The sub-step carries over unchanged, since
    /// the encounter timescale doesn't depend on the sign of the velocities.
    pub fn reverse(&mut self) {
        for body in self.bodies.iter_mut() {
            body.current.velocity = -body.current.velocity;
            body.next.velocity = -body.next.velocity;
        }
        self.params.direction = self.params.direction.reversed();
    }

    /// Starts again from the stored scenario.
    pub fn reset(&mut self) -> Result<(), SetupError> {
        *self = Simulation::new(self.scenario.clone())?;
        Ok(())
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        let sign = self.params.direction.sign();
        self.bodies
            .iter()
            .map(|body| BodySnapshot {
                id: body.id,
                name: body.info.name.clone(),
                base_name: body.info.base_name.clone(),
                position: body.position(),
                velocity: body.velocity() * sign,
                elements: body.elements,
            })
            .collect()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.0]
    }

    pub fn find_body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn sub_step(&self) -> f64 {
        self.integrator.sub_step()
    }

    /// Signed days of simulated time since the start
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Newtonian kinetic plus potential energy, in solar masses * AU^2/day^2.
    pub fn total_energy(&self) -> f64 {
        let kinetic: f64 = self
            .bodies
            .iter()
            .map(|b| 0.5 * b.mass() * b.velocity().norm_squared())
            .sum();

        let mut potential = 0.0;
        for (i, a) in self.bodies.iter().enumerate() {
            for b in &self.bodies[i + 1..] {
                let r = (b.position() - a.position()).norm();
                potential -= self.params.g * a.mass() * b.mass() / r;
            }
        }

        kinetic + potential
    }

    pub fn angular_momentum(&self) -> Vec3 {
        let sign = self.params.direction.sign();
        self.bodies
            .iter()
            .map(|b| b.mass() * b.position().cross(&b.velocity()) * sign)
            .sum()
    }
}

fn validate(scenario: &Scenario) -> Result<(), SetupError> {
    let bodies = &scenario.bodies;
    if bodies.is_empty() {
        return Err(SetupError::NoBodies);
    }

    let v_step = scenario.params.v_step;
    if !(v_step.is_finite() && v_step > 0.0) {
        return Err(SetupError::InvalidStepControl(v_step));
    }

    let mut central: Option<&str> = None;
    for body in bodies {
        let non_finite = |quantity| SetupError::NonFinite {
            name: body.name.clone(),
            quantity,
        };
        if !body.mass.is_finite() {
            return Err(non_finite("mass"));
        }
        if body.mass < 0.0 {
            return Err(SetupError::NegativeMass {
                name: body.name.clone(),
                mass: body.mass,
            });
        }
        if !body.position.iter().all(|x| x.is_finite()) {
            return Err(non_finite("position"));
        }
        if !body.velocity.iter().all(|x| x.is_finite()) {
            return Err(non_finite("velocity"));
        }

        if body.central {
            if let Some(first) = central {
                return Err(SetupError::MultipleCentralBodies {
                    first: first.to_owned(),
                    second: body.name.clone(),
                });
            }
            central = Some(body.name.as_str());
        }
    }

    if bodies.iter().map(|b| b.mass).sum::<f64>() <= 0.0 {
        return Err(SetupError::ZeroTotalMass);
    }

    for (i, a) in bodies.iter().enumerate() {
        if let Some(b) = bodies[i + 1..].iter().find(|b| b.position == a.position) {
            return Err(SetupError::CoincidentBodies {
                first: a.name.clone(),
                second: b.name.clone(),
            });
        }
    }

    Ok(())
}
