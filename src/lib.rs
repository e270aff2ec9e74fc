pub mod astro;
pub mod clock;
pub mod consts;
pub mod error;
pub mod file;
pub mod math;
pub mod nbody;
pub mod scenario;

#[cfg(test)]
mod testing_utils;
