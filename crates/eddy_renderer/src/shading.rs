//! Local illumination with hard shadows.
//!
//! Each light contributes ambient, diffuse and specular terms unless any
//! primitive blocks the shadow ray toward it. A blocked light contributes
//! nothing at all, ambient term included.

use eddy_core::{Color, Light, Material, Scene};
use eddy_math::{reflect, Ray, Vec3};
use log::trace;

/// Color seen along `ray`: the shaded nearest hit, or black on a miss.
pub fn trace(ray: &Ray, scene: &Scene) -> Color {
    match scene.nearest_hit(ray) {
        Some(hit) => {
            let point = hit.point(ray);
            let normal = hit.normal(ray);
            shade(point, normal, hit.material(), scene)
        }
        None => Color::BLACK,
    }
}

/// Sum the contribution of every unoccluded light at `point`, clamped to
/// [0, 1] per channel.
pub fn shade(point: Vec3, normal: Vec3, material: &Material, scene: &Scene) -> Color {
    scene
        .lights
        .iter()
        .filter_map(|light| light_contribution(point, normal, material, light, scene))
        .sum::<Color>()
        .clamp()
}

/// Contribution of a single light, or `None` when the light is blocked or
/// sits exactly on the shaded point.
fn light_contribution(
    point: Vec3,
    normal: Vec3,
    material: &Material,
    light: &Light,
    scene: &Scene,
) -> Option<Color> {
    let shadow_ray = match Ray::towards(point, light.position - point) {
        Ok(ray) => ray,
        Err(err) => {
            trace!("Skipping light at {}: {err}", light.position);
            return None;
        }
    };
    if scene.occluded(&shadow_ray) {
        return None;
    }

    let light_dir = shadow_ray.direction();
    let ambient = material.ambient * light.color;
    let diffuse = material.diffuse * light.color * normal.dot(light_dir).max(0.0);
    let reflected = reflect(light_dir, normal);
    let specular = material.specular
        * light.color
        * reflected.dot(light_dir).max(0.0).powf(material.shininess);

    Some(ambient + diffuse + specular)
}
