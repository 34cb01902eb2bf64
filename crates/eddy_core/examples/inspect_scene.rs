//! Example: Load and inspect a scene description.
//!
//! Run with: cargo run --example inspect_scene -- scenes/spheres.json

use std::env;

use eddy_core::load_scene;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-json>");
        println!("\nExample:");
        println!("  cargo run --example inspect_scene -- scenes/spheres.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene: {}", path);

    match load_scene(path) {
        Ok(file) => {
            let scene = &file.scene;
            println!("\n=== Scene ===");
            println!("Primitives: {}", scene.primitive_count());
            println!("Lights: {}", scene.light_count());

            println!("\n--- Primitives ---");
            for (i, primitive) in scene.primitives.iter().enumerate() {
                let m = primitive.material();
                println!(
                    "  [{}] {} - diffuse ({:.2}, {:.2}, {:.2}), shininess {}",
                    i,
                    primitive.kind(),
                    m.diffuse.r,
                    m.diffuse.g,
                    m.diffuse.b,
                    m.shininess
                );
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights.iter().enumerate() {
                println!(
                    "  [{}] at ({:.2}, {:.2}, {:.2}) color {}",
                    i,
                    light.position.x,
                    light.position.y,
                    light.position.z,
                    light.color.to_hex()
                );
            }

            if let Some(camera) = file.camera {
                println!("\n--- Camera ---");
                println!("  Eye: {}", camera.eye);
                println!("  Look at: {}", camera.look_at);
                println!("  FOV: {} degrees", camera.fov_degrees);
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
        }
    }
}
