//! Keplerian orbits: solving for elements from a state vector, and placing a
//! body on an orbit given its elements.

mod elements;
pub mod kepler;

pub use elements::{OrbitType, OrbitalElements, RenderAngles, PARABOLIC_ECCENTRICITY};
pub use kepler::{state_from_elements, KeplerElements};
