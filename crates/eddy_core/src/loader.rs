//! JSON scene description loading.
//!
//! The description lists `objects` (spheres and planes, each with a
//! material), `lights`, and an optional `camera`:
//!
//! ```json
//! {
//!   "objects": [
//!     { "type": "sphere", "center": {"x": 0, "y": 0, "z": 0}, "radius": 1,
//!       "material": { "ambient": {"r": 0.1, "g": 0.1, "b": 0.1},
//!                     "diffuse": {"r": 0.7, "g": 0.7, "b": 0.7},
//!                     "specular": {"r": 0.2, "g": 0.2, "b": 0.2},
//!                     "shininess": 32 } }
//!   ],
//!   "lights": [ { "position": {"x": 0, "y": 5, "z": 5}, "color": {"r": 1, "g": 1, "b": 1} } ],
//!   "camera": { "eye": {"x": 0, "y": 0, "z": 5}, "lookAt": {"x": 0, "y": 0, "z": 0},
//!               "up": {"x": 0, "y": 1, "z": 0}, "fov": 45 }
//! }
//! ```
//!
//! Objects with an unrecognized `type` are skipped with a warning. Invalid
//! parameters on a recognized object reject the whole description.

use std::path::Path;

use eddy_math::Vec3;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::{Color, CoreResult, Light, Material, Plane, Scene, Sphere};

/// Camera placement read from a scene description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDesc {
    pub eye: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    /// Field of view in degrees
    pub fov_degrees: f64,
    /// Width / height; taken from the output size when absent
    pub aspect: Option<f64>,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: 45.0,
            aspect: None,
        }
    }
}

/// A loaded scene plus the camera it asked for, if any.
#[derive(Debug)]
pub struct SceneFile {
    pub scene: Scene,
    pub camera: Option<CameraDesc>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct PointDesc {
    x: f64,
    y: f64,
    z: f64,
}

impl From<PointDesc> for Vec3 {
    fn from(p: PointDesc) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

#[derive(Debug, Deserialize)]
struct MaterialDesc {
    ambient: Color,
    diffuse: Color,
    specular: Color,
    shininess: f64,
}

impl MaterialDesc {
    fn build(self) -> CoreResult<Material> {
        Material::new(self.ambient, self.diffuse, self.specular, self.shininess)
    }
}

#[derive(Debug, Deserialize)]
struct SphereDesc {
    center: PointDesc,
    radius: f64,
    material: MaterialDesc,
}

#[derive(Debug, Deserialize)]
struct PlaneDesc {
    normal: PointDesc,
    distance: f64,
    material: MaterialDesc,
}

#[derive(Debug, Deserialize)]
struct LightDesc {
    position: PointDesc,
    color: Color,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CameraRaw {
    eye: Option<PointDesc>,
    look_at: Option<PointDesc>,
    up: Option<PointDesc>,
    fov: Option<f64>,
    aspect: Option<f64>,
}

impl From<CameraRaw> for CameraDesc {
    fn from(raw: CameraRaw) -> Self {
        let defaults = CameraDesc::default();
        Self {
            eye: raw.eye.map_or(defaults.eye, Vec3::from),
            look_at: raw.look_at.map_or(defaults.look_at, Vec3::from),
            up: raw.up.map_or(defaults.up, Vec3::from),
            fov_degrees: raw.fov.unwrap_or(defaults.fov_degrees),
            aspect: raw.aspect,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SceneDesc {
    #[serde(default)]
    objects: Vec<Value>,
    #[serde(default)]
    lights: Vec<LightDesc>,
    camera: Option<CameraRaw>,
}

/// Load a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> CoreResult<SceneFile> {
    let path = path.as_ref();
    debug!("Loading scene description {}", path.display());
    let text = std::fs::read_to_string(path)?;
    load_scene_from_str(&text)
}

/// Build a scene from JSON text.
pub fn load_scene_from_str(json: &str) -> CoreResult<SceneFile> {
    let desc: SceneDesc = serde_json::from_str(json)?;
    let mut scene = Scene::new();

    for (index, object) in desc.objects.into_iter().enumerate() {
        let kind = object
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_default();
        match kind.as_str() {
            "sphere" => {
                let s: SphereDesc = serde_json::from_value(object)?;
                scene.add_primitive(Sphere::new(s.center.into(), s.radius, s.material.build()?)?);
            }
            "plane" => {
                let p: PlaneDesc = serde_json::from_value(object)?;
                scene.add_primitive(Plane::new(p.normal.into(), p.distance, p.material.build()?)?);
            }
            other => {
                warn!("Ignoring object {index} with unsupported type {other:?}");
            }
        }
    }

    for light in desc.lights {
        scene.add_light(Light::new(light.position.into(), light.color));
    }

    debug!(
        "Scene loaded: {} primitives, {} lights",
        scene.primitive_count(),
        scene.light_count()
    );

    Ok(SceneFile {
        scene,
        camera: desc.camera.map(CameraDesc::from),
    })
}
