//! Surface shading parameters and point lights.

use eddy_math::Vec3;

use crate::{Color, CoreError, CoreResult};

/// Phong-style material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Reflected share of each light's color, independent of orientation
    pub ambient: Color,
    /// Lambertian reflectance
    pub diffuse: Color,
    /// Highlight color
    pub specular: Color,
    /// Highlight exponent (must be positive)
    pub shininess: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::splat(0.1),
            diffuse: Color::splat(0.7),
            specular: Color::splat(0.2),
            shininess: 32.0,
        }
    }
}

impl Material {
    /// Create a material, rejecting a non-positive or non-finite shininess.
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f64) -> CoreResult<Self> {
        if !(shininess > 0.0 && shininess.is_finite()) {
            return Err(CoreError::InvalidMaterial(format!(
                "shininess must be a positive number, got {shininess}"
            )));
        }
        Ok(Self {
            ambient,
            diffuse,
            specular,
            shininess,
        })
    }
}

/// Point light. No falloff with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}
