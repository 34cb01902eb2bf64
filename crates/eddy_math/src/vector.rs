//! Checked vector helpers on top of glam.

use glam::{DVec2, DVec3};
use thiserror::Error;

/// Errors raised by vector math.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize a degenerate vector (magnitude {0})")]
    DegenerateVector(f64),
}

/// Result type for math operations.
pub type MathResult<T> = Result<T, MathError>;

/// Magnitude and checked normalization.
///
/// glam's own `normalize` silently produces NaN for the zero vector; `unit`
/// surfaces that case as [`MathError::DegenerateVector`] instead.
pub trait Normalize: Sized {
    /// Euclidean length.
    fn magnitude(self) -> f64;

    /// Unit vector pointing the same way.
    fn unit(self) -> MathResult<Self>;
}

impl Normalize for DVec3 {
    #[inline]
    fn magnitude(self) -> f64 {
        self.length()
    }

    #[inline]
    fn unit(self) -> MathResult<Self> {
        let mag = self.length();
        if mag == 0.0 || !mag.is_finite() {
            return Err(MathError::DegenerateVector(mag));
        }
        Ok(self / mag)
    }
}

impl Normalize for DVec2 {
    #[inline]
    fn magnitude(self) -> f64 {
        self.length()
    }

    #[inline]
    fn unit(self) -> MathResult<Self> {
        let mag = self.length();
        if mag == 0.0 || !mag.is_finite() {
            return Err(MathError::DegenerateVector(mag));
        }
        Ok(self / mag)
    }
}

/// Mirror `v` about `normal`: `normal * 2(v·normal) - v`.
///
/// `normal` is expected to be unit length.
#[inline]
pub fn reflect(v: DVec3, normal: DVec3) -> DVec3 {
    normal * (2.0 * v.dot(normal)) - v
}

/// Rotations about the coordinate axes. Angles are in degrees.
pub trait Rotate3 {
    fn rot_x(self, degrees: f64) -> Self;
    fn rot_y(self, degrees: f64) -> Self;
    fn rot_z(self, degrees: f64) -> Self;
}

impl Rotate3 for DVec3 {
    fn rot_x(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        DVec3::new(
            self.x,
            self.y * cos - self.z * sin,
            self.y * sin + self.z * cos,
        )
    }

    fn rot_y(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        DVec3::new(
            self.x * cos - self.z * sin,
            self.y,
            self.x * sin + self.z * cos,
        )
    }

    fn rot_z(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        DVec3::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
    }
}

/// Counter-clockwise rotation in the plane. Angle in degrees.
///
/// Named `rot` so it does not collide with glam's `DVec2::rotate`.
pub trait Rotate2 {
    fn rot(self, degrees: f64) -> Self;
}

impl Rotate2 for DVec2 {
    fn rot(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        DVec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}
