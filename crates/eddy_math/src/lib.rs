//! Eddy math types.
//!
//! Double precision vectors come from glam; this crate adds the checked
//! normalization, reflection and rotation helpers the tracer relies on,
//! plus the `Ray` and `Interval` types.

pub use glam::{DVec2, DVec3};

/// 3D vector used throughout Eddy.
pub type Vec3 = DVec3;

/// 2D vector used throughout Eddy.
pub type Vec2 = DVec2;

mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{reflect, MathError, MathResult, Normalize, Rotate2, Rotate3};
