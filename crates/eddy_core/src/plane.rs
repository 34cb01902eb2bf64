//! One-sided infinite plane.

use eddy_math::{Interval, Normalize, Ray, Vec3};

use crate::{CoreError, CoreResult, Material, Primitive};

/// Rays must approach the plane at least this steeply (-N·D) to hit it.
const PARALLEL_EPSILON: f64 = 1e-6;

/// Allowed deviation of the normal's magnitude from 1.
const UNIT_TOLERANCE: f64 = 1e-6;

/// Infinite plane `{ p : N·p = distance }`.
///
/// The plane is one-sided: only rays arriving from the side the normal points
/// toward (`N·D < 0`) report a hit. Rays parallel to the plane or coming from
/// behind it pass through.
#[derive(Debug, Clone)]
pub struct Plane {
    normal: Vec3,
    distance: f64,
    material: Material,
}

impl Plane {
    /// Create a plane from a unit normal and its offset along that normal.
    pub fn new(normal: Vec3, distance: f64, material: Material) -> CoreResult<Self> {
        if !normal.is_finite() || (normal.magnitude() - 1.0).abs() > UNIT_TOLERANCE {
            return Err(CoreError::InvalidPrimitiveParameters(format!(
                "plane normal must be a unit vector, got {normal}"
            )));
        }
        if !distance.is_finite() {
            return Err(CoreError::InvalidPrimitiveParameters(format!(
                "plane distance must be finite, got {distance}"
            )));
        }

        Ok(Self {
            normal,
            distance,
            material,
        })
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}

impl Primitive for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let denominator = self.normal.dot(ray.direction());
        if !(denominator < -PARALLEL_EPSILON) {
            return None;
        }

        let t = self.normal.dot(self.normal * self.distance - ray.origin()) / denominator;
        Interval::FORWARD.contains(t).then_some(t)
    }

    fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn kind(&self) -> &'static str {
        "plane"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> Plane {
        Plane::new(Vec3::Y, 0.0, Material::default()).unwrap()
    }

    #[test]
    fn test_plane_hit_from_front() {
        let plane = ground();
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(plane.intersect(&ray), Some(5.0));
    }

    #[test]
    fn test_plane_back_side_misses() {
        let plane = ground();

        // Below the plane, heading further down.
        let ray = Ray::new(Vec3::new(0.0, -5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(plane.intersect(&ray), None);

        // Below the plane, heading up through it from behind.
        let ray = Ray::new(Vec3::new(0.0, -5.0, 0.0), Vec3::Y);
        assert_eq!(plane.intersect(&ray), None);
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let plane = ground();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert_eq!(plane.intersect(&ray), None);
    }

    #[test]
    fn test_plane_grazing_ray_misses() {
        let plane = ground();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, -1e-9, 0.0));
        assert_eq!(plane.intersect(&ray), None);
    }

    #[test]
    fn test_plane_origin_on_plane_hits_at_zero() {
        let plane = ground();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(plane.intersect(&ray), Some(0.0));
    }

    #[test]
    fn test_plane_offset() {
        let plane = Plane::new(Vec3::Y, 2.0, Material::default()).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(plane.intersect(&ray), Some(8.0));
    }

    #[test]
    fn test_plane_normal_is_constant() {
        let plane = ground();
        assert_eq!(plane.normal(Vec3::new(3.0, 0.0, -7.0)), Vec3::Y);
        assert_eq!(plane.normal(Vec3::ZERO), Vec3::Y);
    }

    #[test]
    fn test_plane_rejects_non_unit_normal() {
        let result = Plane::new(Vec3::new(0.0, 2.0, 0.0), 0.0, Material::default());
        assert!(matches!(result, Err(CoreError::InvalidPrimitiveParameters(_))));

        let result = Plane::new(Vec3::ZERO, 0.0, Material::default());
        assert!(result.is_err());
    }
}
