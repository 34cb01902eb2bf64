//! Camera for primary ray generation.

use std::f64::consts::PI;

use eddy_core::CameraDesc;
use eddy_math::{Normalize, Ray, Vec3};

use crate::{RenderError, RenderResult};

/// Below this, `up × back` is treated as zero (up parallel to the view).
const PARALLEL_EPSILON: f64 = 1e-9;

/// Pinhole camera with an orthonormal basis.
///
/// The image plane sits one unit in front of the eye and spans
/// `tan(fov / 2)` to either side horizontally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Vec3,
    look_at: Vec3,
    up: Vec3,
    fov: f64,
    aspect: f64,

    // Basis: u = right, v = true up, n = back (eye - look_at)
    u: Vec3,
    v: Vec3,
    n: Vec3,
    half_width: f64,
    half_height: f64,
}

impl Camera {
    /// Create a camera. `fov` is the horizontal field of view in radians.
    ///
    /// Fails when the basis cannot be built: eye on top of the target, `up`
    /// parallel to the view direction, fov outside (0, π), or a non-positive
    /// aspect ratio.
    pub fn new(eye: Vec3, look_at: Vec3, up: Vec3, fov: f64, aspect: f64) -> RenderResult<Self> {
        if !(fov > 0.0 && fov < PI) {
            return Err(RenderError::DegenerateCamera(format!(
                "field of view must be in (0, pi), got {fov}"
            )));
        }
        if !(aspect > 0.0 && aspect.is_finite()) {
            return Err(RenderError::DegenerateCamera(format!(
                "aspect ratio must be positive, got {aspect}"
            )));
        }

        let n = (eye - look_at).unit().map_err(|_| {
            RenderError::DegenerateCamera(format!("eye {eye} coincides with look-at point"))
        })?;
        let right = up.cross(n);
        if !(right.magnitude() >= PARALLEL_EPSILON) {
            return Err(RenderError::DegenerateCamera(format!(
                "up vector {up} is parallel to the view direction"
            )));
        }
        let u = right.unit()?;
        let v = n.cross(u);

        let half_width = (fov / 2.0).tan();
        let half_height = half_width / aspect;

        Ok(Self {
            eye,
            look_at,
            up,
            fov,
            aspect,
            u,
            v,
            n,
            half_width,
            half_height,
        })
    }

    /// Build a camera from a scene description. `default_aspect` is used
    /// when the description does not fix one.
    pub fn from_desc(desc: &CameraDesc, default_aspect: f64) -> RenderResult<Self> {
        Self::new(
            desc.eye,
            desc.look_at,
            desc.up,
            desc.fov_degrees.to_radians(),
            desc.aspect.unwrap_or(default_aspect),
        )
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// Right, true-up and back vectors.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.n)
    }

    /// Per-image ray generator for a `width` x `height` pixel grid.
    pub fn projection(&self, width: u32, height: u32) -> Projection {
        // A single pixel along an axis looks straight through the center.
        let (x_extent, pixel_width) = axis_steps(self.half_width, width);
        let (y_extent, pixel_height) = axis_steps(self.half_height, height);

        Projection {
            eye: self.eye,
            u: self.u,
            v: self.v,
            n: self.n,
            x_extent,
            y_extent,
            pixel_width,
            pixel_height,
        }
    }
}

fn axis_steps(half: f64, pixels: u32) -> (f64, f64) {
    if pixels > 1 {
        (half, 2.0 * half / (pixels - 1) as f64)
    } else {
        (0.0, 0.0)
    }
}

/// Primary ray generator for one image size.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    eye: Vec3,
    u: Vec3,
    v: Vec3,
    n: Vec3,
    x_extent: f64,
    y_extent: f64,
    pixel_width: f64,
    pixel_height: f64,
}

impl Projection {
    /// Primary ray through pixel (x, y). Row 0 is the top of the image and
    /// column 0 lies on the `+u` edge; the first and last pixels sit on the
    /// frustum edges.
    pub fn ray(&self, x: u32, y: u32) -> RenderResult<Ray> {
        let vx = self.u * (self.x_extent - x as f64 * self.pixel_width);
        let vy = self.v * (self.y_extent - y as f64 * self.pixel_height);
        Ok(Ray::towards(self.eye, vx + vy - self.n)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn front_camera(aspect: f64) -> Camera {
        Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            90f64.to_radians(),
            aspect,
        )
        .unwrap()
    }

    #[test]
    fn test_camera_basis() {
        let camera = front_camera(1.0);
        let (u, v, n) = camera.basis();

        assert!((u - Vec3::X).length() < EPS);
        assert!((v - Vec3::Y).length() < EPS);
        assert!((n - Vec3::Z).length() < EPS);
    }

    #[test]
    fn test_center_ray_looks_forward() {
        let camera = front_camera(1.0);
        let projection = camera.projection(101, 101);

        let ray = projection.ray(50, 50).unwrap();
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 5.0));
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn test_corner_rays() {
        // 90 degree fov: the corners sit at 45 degrees on both axes.
        let camera = front_camera(1.0);
        let projection = camera.projection(11, 11);

        // Column 0 lies on the +u side of the image plane.
        let first = projection.ray(0, 0).unwrap().direction;
        let expected = Vec3::new(1.0, 1.0, -1.0).normalize();
        assert!((first - expected).length() < EPS, "{first}");

        let last = projection.ray(10, 10).unwrap().direction;
        let expected = Vec3::new(-1.0, -1.0, -1.0).normalize();
        assert!((last - expected).length() < EPS, "{last}");
    }

    #[test]
    fn test_column_zero_maps_to_positive_u() {
        let camera = front_camera(1.0);
        let (u, _, n) = camera.basis();
        let projection = camera.projection(3, 3);

        // half width is tan(45°) = 1, so column 0 is u·1 in front of the eye.
        let ray = projection.ray(0, 1).unwrap();
        let expected = (u - n).normalize();
        assert!((ray.direction - expected).length() < EPS, "{}", ray.direction);

        let ray = projection.ray(2, 1).unwrap();
        let expected = (-u - n).normalize();
        assert!((ray.direction - expected).length() < EPS, "{}", ray.direction);
    }

    #[test]
    fn test_aspect_shrinks_vertical_extent() {
        let camera = front_camera(2.0);
        let projection = camera.projection(3, 3);

        let top = projection.ray(1, 0).unwrap().direction;
        let expected = Vec3::new(0.0, 0.5, -1.0).normalize();
        assert!((top - expected).length() < EPS, "{top}");
    }

    #[test]
    fn test_single_pixel_image() {
        let camera = front_camera(1.0);
        let ray = camera.projection(1, 1).ray(0, 0).unwrap();
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn test_rays_are_unit_length() {
        let camera = front_camera(16.0 / 9.0);
        let projection = camera.projection(16, 9);
        for y in 0..9 {
            for x in 0..16 {
                let d = projection.ray(x, y).unwrap().direction;
                assert!((d.length() - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_degenerate_cameras() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let fov = 1.0;

        // up parallel to view direction
        let err = Camera::new(eye, Vec3::ZERO, Vec3::Z, fov, 1.0).unwrap_err();
        assert!(matches!(err, RenderError::DegenerateCamera(_)));
        assert!(Camera::new(eye, Vec3::ZERO, -Vec3::Z * 3.0, fov, 1.0).is_err());

        // eye on the target
        assert!(Camera::new(eye, eye, Vec3::Y, fov, 1.0).is_err());

        // fov and aspect out of range
        assert!(Camera::new(eye, Vec3::ZERO, Vec3::Y, 0.0, 1.0).is_err());
        assert!(Camera::new(eye, Vec3::ZERO, Vec3::Y, PI, 1.0).is_err());
        assert!(Camera::new(eye, Vec3::ZERO, Vec3::Y, fov, 0.0).is_err());
        assert!(Camera::new(eye, Vec3::ZERO, Vec3::Y, fov, f64::NAN).is_err());
    }

    #[test]
    fn test_from_desc_uses_degrees() {
        let desc = CameraDesc {
            fov_degrees: 90.0,
            ..CameraDesc::default()
        };
        let camera = Camera::from_desc(&desc, 1.5).unwrap();

        assert!((camera.fov() - PI / 2.0).abs() < EPS);
        assert_eq!(camera.aspect(), 1.5);
        assert_eq!(camera.eye(), Vec3::new(0.0, 0.0, 5.0));
    }
}
