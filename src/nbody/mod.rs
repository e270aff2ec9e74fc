//! Direct-summation N-body integration.
//!
//! Units are AU, days and solar masses throughout. A [Simulation] owns its
//! bodies and parameters; the free functions underneath operate on slices of
//! bodies so they can be driven (and tested) piecemeal.

pub mod accel;
pub mod barycenter;
mod body;
pub mod encounter;
pub mod integrator;
pub mod orbits;
pub mod params;
pub mod relativity;
mod simulation;

pub use body::{Body, BodyId, BodyInfo, BodyRole, PhaseState, Relativistic};
pub use params::{Direction, ParameterSet, DEFAULT_V_STEP};
pub use simulation::{BodySnapshot, Simulation};
