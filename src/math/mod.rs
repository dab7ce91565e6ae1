mod vector;

pub use glam::Vec3;
pub use vector::{add, cross, normalize, right_of, scale, sub};
