//! Sphere primitive.

use eddy_math::{Interval, Normalize, Ray, Vec3};

use crate::{CoreError, CoreResult, Material, Primitive};

/// Accepted sphere hits: strictly in front of the ray origin, so a shadow
/// ray never re-hits the surface it starts on.
const SPHERE_T: Interval = Interval::new(0.0, f64::INFINITY);

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vec3, radius: f64, material: Material) -> CoreResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(CoreError::InvalidPrimitiveParameters(format!(
                "sphere radius must be positive, got {radius}"
            )));
        }
        if !center.is_finite() {
            return Err(CoreError::InvalidPrimitiveParameters(format!(
                "sphere center must be finite, got {center}"
            )));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Primitive for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        // Only the nearer root is considered. A ray starting inside the
        // sphere therefore misses it.
        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        SPHERE_T.surrounds(t).then_some(t)
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        // The center is never on the surface of a sphere with positive radius.
        (point - self.center).unit().unwrap_or(Vec3::Y)
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn kind(&self) -> &'static str {
        "sphere"
    }
}
