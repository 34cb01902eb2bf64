//! Scene container and nearest-hit queries.
//!
//! A scene is an ordered list of primitives plus an ordered list of point
//! lights. It is built once and then only read for the duration of a render
//! pass.

use eddy_math::{Ray, Vec3};

use crate::{Light, Material, Primitive};

/// Nearest intersection found by [`Scene::nearest_hit`].
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    /// The primitive that was hit
    pub primitive: &'a dyn Primitive,
    /// Ray parameter of the hit
    pub t: f64,
}

impl<'a> Hit<'a> {
    /// Hit point along `ray`.
    pub fn point(&self, ray: &Ray) -> Vec3 {
        ray.at(self.t)
    }

    /// Surface normal at the hit point along `ray`.
    pub fn normal(&self, ray: &Ray) -> Vec3 {
        self.primitive.normal(self.point(ray))
    }

    pub fn material(&self) -> &'a Material {
        self.primitive.material()
    }
}

impl std::fmt::Debug for Hit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hit")
            .field("primitive", &self.primitive.kind())
            .field("t", &self.t)
            .finish()
    }
}

/// Primitives and lights to be rendered.
#[derive(Default)]
pub struct Scene {
    /// Surfaces, tested in insertion order
    pub primitives: Vec<Box<dyn Primitive>>,

    /// Point lights, summed in insertion order
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive and return its index.
    pub fn add_primitive(&mut self, primitive: impl Primitive + 'static) -> usize {
        self.primitives.push(Box::new(primitive));
        self.primitives.len() - 1
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Find the primitive with the smallest accepted ray parameter.
    ///
    /// Every primitive is tested; on equal `t` the earlier one wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut nearest: Option<Hit<'_>> = None;

        for primitive in &self.primitives {
            let Some(t) = primitive.intersect(ray) else {
                continue;
            };
            if nearest.map_or(true, |hit| t < hit.t) {
                nearest = Some(Hit {
                    primitive: primitive.as_ref(),
                    t,
                });
            }
        }

        nearest
    }

    /// True if any primitive intersects the ray at all.
    ///
    /// The test is not limited to the segment between the ray origin and a
    /// light, so an occluder beyond the light still counts.
    pub fn occluded(&self, ray: &Ray) -> bool {
        self.primitives.iter().any(|p| p.intersect(ray).is_some())
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<&str> = self.primitives.iter().map(|p| p.kind()).collect();
        f.debug_struct("Scene")
            .field("primitives", &kinds)
            .field("lights", &self.lights)
            .finish()
    }
}

/// Free-function form of [`Scene::nearest_hit`].
pub fn nearest_hit<'a>(ray: &Ray, scene: &'a Scene) -> Option<Hit<'a>> {
    scene.nearest_hit(ray)
}
