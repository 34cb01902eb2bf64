//! Simple ray tracer example.
//!
//! Renders three spheres over a ground plane and saves to PPM format.

use eddy_renderer::{
    render_with_config, save_ppm, Camera, Color, Light, Material, Plane, RenderConfig, RenderResult, Scene, Sphere,
    Vec3,
};

fn main() -> RenderResult<()> {
    env_logger::init();

    println!("Eddy Ray Tracer - Simple Example");
    println!("================================");

    let scene = build_scene()?;
    println!("Created {} primitives, {} lights", scene.primitive_count(), scene.light_count());

    let config = RenderConfig::default();
    let camera = Camera::new(
        Vec3::new(0.0, 1.0, 6.0), // eye
        Vec3::new(0.0, 0.0, 0.0), // look_at
        Vec3::Y,                  // up
        45f64.to_radians(),
        config.aspect(),
    )?;

    println!("Rendering {}x{}...", config.width, config.height);
    let start = std::time::Instant::now();
    let image = render_with_config(&scene, &camera, &config)?;
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename)?;
    println!("Saved to {}", filename);
    Ok(())
}

fn build_scene() -> RenderResult<Scene> {
    let mut scene = Scene::new();

    let matte = |color: Color| Material {
        diffuse: color,
        specular: Color::splat(0.1),
        ..Material::default()
    };

    // Ground
    scene.add_primitive(Plane::new(Vec3::Y, -1.0, matte(Color::splat(0.6)))?);

    scene.add_primitive(Sphere::new(Vec3::new(-1.6, 0.0, 0.0), 1.0, matte(Color::new(0.8, 0.2, 0.1)))?);
    scene.add_primitive(Sphere::new(Vec3::ZERO, 1.0, Material::default())?);
    scene.add_primitive(Sphere::new(
        Vec3::new(1.6, 0.0, 0.0),
        1.0,
        Material::new(Color::splat(0.05), Color::new(0.1, 0.3, 0.8), Color::splat(0.6), 96.0)?,
    )?);

    scene.add_light(Light::new(Vec3::new(-4.0, 6.0, 5.0), Color::splat(0.8)));
    scene.add_light(Light::new(Vec3::new(5.0, 4.0, 3.0), Color::new(0.3, 0.3, 0.4)));

    Ok(scene)
}
