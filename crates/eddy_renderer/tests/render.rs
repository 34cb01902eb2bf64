//! End-to-end checks of the ray tracing pipeline through the public API.

use eddy_core::load_scene_from_str;
use eddy_math::{reflect, Normalize};
use eddy_renderer::{
    render, render_with_config, shade, to_ascii, trace, Camera, Color, Light, Material, Plane, Primitive, Ray,
    RenderConfig, Scene, Sphere, Vec3,
};

const EPS: f64 = 1e-9;

fn unit_sphere() -> Sphere {
    Sphere::new(Vec3::ZERO, 1.0, Material::default()).unwrap()
}

fn lit_sphere_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add_primitive(unit_sphere());
    scene.add_light(Light::new(Vec3::new(0.0, 5.0, 5.0), Color::WHITE));
    scene
}

fn front_camera(aspect: f64) -> Camera {
    Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y, 45f64.to_radians(), aspect).unwrap()
}

fn close(a: Color, b: Color) -> bool {
    (a.r - b.r).abs() < EPS && (a.g - b.g).abs() < EPS && (a.b - b.b).abs() < EPS
}

#[test]
fn sphere_hit_tangent_and_miss() {
    let sphere = unit_sphere();

    let hit = sphere.intersect(&Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z)).unwrap();
    assert!((hit - 4.0).abs() < EPS);
    let normal = sphere.normal(Vec3::Z);
    assert!((normal - Vec3::Z).length() < EPS);

    let tangent = sphere.intersect(&Ray::new(Vec3::new(1.0, 0.0, 5.0), Vec3::NEG_Z)).unwrap();
    assert!((tangent - 5.0).abs() < EPS);

    assert!(sphere.intersect(&Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z)).is_none());
}

#[test]
fn plane_is_one_sided() {
    let plane = Plane::new(Vec3::Y, 0.0, Material::default()).unwrap();

    let above = plane.intersect(&Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y)).unwrap();
    assert!((above - 5.0).abs() < EPS);
    assert!(plane.intersect(&Ray::new(Vec3::new(0.0, -5.0, 0.0), Vec3::Y)).is_none());
    assert!(plane.intersect(&Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::X)).is_none());
}

#[test]
fn normalized_vectors_have_unit_length() {
    for v in [Vec3::new(3.0, 4.0, 0.0), Vec3::new(-1e-5, 2e-5, 7e-6), Vec3::new(1e8, -3e8, 2e8)] {
        assert!((v.unit().unwrap().magnitude() - 1.0).abs() < EPS);
    }
    assert!(Vec3::ZERO.unit().is_err());
}

#[test]
fn center_ray_points_at_target() {
    let projection = front_camera(1.0).projection(101, 101);
    let ray = projection.ray(50, 50).unwrap();

    assert!((ray.direction() - Vec3::NEG_Z).length() < EPS);
}

#[test]
fn shading_matches_phong_terms() {
    let scene = lit_sphere_scene();
    let material = Material::default();
    let point = Vec3::Z;
    let normal = Vec3::Z;

    let to_light = (Vec3::new(0.0, 5.0, 5.0) - point).unit().unwrap();
    let diffuse = 0.7 * normal.dot(to_light).max(0.0);
    let specular = 0.2 * reflect(to_light, normal).dot(to_light).max(0.0).powf(32.0);
    let expected = Color::splat(0.1 + diffuse + specular);

    let color = shade(point, normal, &material, &scene);
    assert!(close(color, expected), "{color:?} vs {expected:?}");

    // The camera ray through the sphere's front pole shades the same point.
    let traced = trace(&Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z), &scene);
    assert!(close(traced, expected), "{traced:?} vs {expected:?}");
}

#[test]
fn occluder_blocks_whole_light_contribution() {
    let mut scene = lit_sphere_scene();
    scene.add_primitive(Sphere::new(Vec3::new(0.0, 2.5, 3.0), 0.5, Material::default()).unwrap());

    let color = trace(&Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z), &scene);
    assert_eq!(color, Color::BLACK);
}

#[test]
fn occluder_past_the_light_still_shadows() {
    let mut scene = lit_sphere_scene();
    scene.add_primitive(Sphere::new(Vec3::new(0.0, 10.0, 9.0), 0.5, Material::default()).unwrap());

    let color = trace(&Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z), &scene);
    assert_eq!(color, Color::BLACK);
}

#[test]
fn shadowed_light_leaves_other_lights() {
    let mut scene = lit_sphere_scene();
    scene.add_primitive(Sphere::new(Vec3::new(0.0, 2.5, 3.0), 0.5, Material::default()).unwrap());
    scene.add_light(Light::new(Vec3::new(0.0, 0.0, 5.0), Color::splat(0.5)));

    let color = trace(&Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z), &scene);
    // Head-on light: full diffuse and full highlight, scaled by its color.
    assert!(close(color, Color::splat(0.5)), "{color:?}");
}

#[test]
fn rendering_is_idempotent_and_thread_independent() {
    let mut scene = lit_sphere_scene();
    scene.add_primitive(Plane::new(Vec3::Y, -1.0, Material::default()).unwrap());
    let config = RenderConfig {
        width: 37,
        height: 23,
        bucket_size: 8,
        parallel: true,
    };
    let camera = front_camera(config.aspect());

    let serial = render(&scene, &camera, config.width, config.height).unwrap();
    let again = render(&scene, &camera, config.width, config.height).unwrap();
    let parallel = render_with_config(&scene, &camera, &config).unwrap();

    assert_eq!(serial, again);
    assert_eq!(serial, parallel);
    assert!(serial.pixels.iter().all(|c| c.clamp() == *c));
}

#[test]
fn loaded_scene_renders() {
    let json = r#"{
        "objects": [
            { "type": "sphere", "center": {"x": 0, "y": 0, "z": 0}, "radius": 1,
              "material": { "ambient": {"r": 0.1, "g": 0.1, "b": 0.1},
                            "diffuse": {"r": 0.7, "g": 0.7, "b": 0.7},
                            "specular": {"r": 0.2, "g": 0.2, "b": 0.2},
                            "shininess": 32 } }
        ],
        "lights": [ { "position": {"x": 0, "y": 5, "z": 5}, "color": {"r": 1, "g": 1, "b": 1} } ],
        "camera": { "eye": {"x": 0, "y": 0, "z": 5}, "fov": 45 }
    }"#;
    let file = load_scene_from_str(json).unwrap();
    let camera = Camera::from_desc(&file.camera.unwrap_or_default(), 1.0).unwrap();

    let image = render(&file.scene, &camera, 9, 9).unwrap();
    let ascii = to_ascii(&image);

    assert_eq!(ascii.lines().count(), 9);
    assert_ne!(image.get(4, 4), Color::BLACK);
    assert_eq!(image.get(0, 0), Color::BLACK);
}
