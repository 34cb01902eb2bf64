//! Eddy Core - scene types for the Eddy ray tracer.
//!
//! This crate provides:
//!
//! - **Shading inputs**: `Color`, `Material`, `Light`
//! - **Primitives**: the `Primitive` trait with `Sphere` and `Plane`
//! - **Scene**: ordered primitives and lights with the nearest-hit query
//! - **Loading**: JSON scene descriptions
//!
//! # Example
//!
//! ```ignore
//! use eddy_core::load_scene;
//!
//! let file = load_scene("scene.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     file.scene.primitive_count(),
//!     file.scene.light_count());
//! ```

pub mod color;
pub mod error;
pub mod loader;
pub mod material;
pub mod plane;
pub mod primitive;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use color::Color;
pub use error::{CoreError, CoreResult};
pub use loader::{load_scene, load_scene_from_str, CameraDesc, SceneFile};
pub use material::{Light, Material};
pub use plane::Plane;
pub use primitive::Primitive;
pub use scene::{nearest_hit, Hit, Scene};
pub use sphere::Sphere;
