use thiserror::Error;

/// A scenario that can't be integrated meaningfully.
///
/// These are caught once, when a [Simulation](crate::nbody::Simulation) is
/// built. Once the integration is running nothing is checked; degenerate
/// geometry that develops mid-run shows up as non-finite state instead.
#[derive(Debug, Error, PartialEq)]
pub enum SetupError {
    #[error("scenario contains no bodies")]
    NoBodies,

    #[error("both {first} and {second} are flagged as the central body")]
    MultipleCentralBodies { first: String, second: String },

    #[error("body {name} has negative mass {mass}")]
    NegativeMass { name: String, mass: f64 },

    #[error("body {name} has a non-finite {quantity}")]
    NonFinite { name: String, quantity: &'static str },

    #[error("total system mass is zero")]
    ZeroTotalMass,

    #[error("bodies {first} and {second} start at the same position")]
    CoincidentBodies { first: String, second: String },

    #[error("vstep must be positive and finite, got {0}")]
    InvalidStepControl(f64),
}

/// Problems reading a scenario definition.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("could not read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse value {value:?} for key {key:?}")]
    InvalidNumber { key: String, value: String },

    #[error("key {0:?} appears before the first body")]
    KeyOutsideBody(String),

    #[error("body {0} is given by orbital elements, but there is no central body")]
    ElementsWithoutCentral(String),

    #[error("body {name} is missing orbital element {element:?}")]
    MissingElement { name: String, element: &'static str },

    #[error("body {name} has elements that don't describe an ellipse (a = {a}, e = {e})")]
    NotElliptical { name: String, a: f64, e: f64 },
}
