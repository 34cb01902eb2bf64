//! Primitive trait for ray-surface intersection.

use eddy_math::{Ray, Vec3};

use crate::Material;

/// Trait for surfaces that can be hit by rays.
///
/// New kinds of surface implement this trait; the scene and renderer only
/// ever see `dyn Primitive`.
pub trait Primitive: Send + Sync {
    /// Nearest forward ray parameter where the ray meets the surface,
    /// or `None` when it misses.
    ///
    /// Degenerate input (zero-length direction, NaN) is a miss, never a panic.
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    /// Unit outward normal at a point on the surface.
    fn normal(&self, point: Vec3) -> Vec3;

    /// Material used to shade this surface.
    fn material(&self) -> &Material;

    /// Short name for logging.
    fn kind(&self) -> &'static str;
}
