pub mod anomaly;
pub mod geometry;
pub mod root_finding;
pub mod vector;

pub use vector::{MulAdd, Vec3};
