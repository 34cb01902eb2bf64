use crate::{MathResult, Normalize, Vec3};

/// A ray in 3D space with an origin and a direction.
///
/// Primary and shadow rays are built with [`Ray::towards`], which normalizes
/// the direction; plane intersection and shading both assume unit directions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is taken as given.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray whose direction is normalized.
    pub fn towards(origin: Vec3, direction: Vec3) -> MathResult<Self> {
        Ok(Self::new(origin, direction.unit()?))
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}
