//! Eddy Renderer - CPU Whitted-style ray tracing.
//!
//! One primary ray per pixel, nearest-hit lookup against the scene, and
//! local ambient + diffuse + specular shading with hard shadows. No
//! recursion, sampling or acceleration structures.

mod bucket;
mod camera;
mod error;
mod output;
mod renderer;
mod shading;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, Projection};
pub use error::{RenderError, RenderResult};
pub use output::{save_image, save_png, save_ppm, to_ascii, write_ppm, ASCII_RAMP};
pub use renderer::{color_to_rgba, render, render_with_config, ImageBuffer, RenderConfig};
pub use shading::{shade, trace};

/// Re-export scene and math types used in the public API
pub use eddy_core::{nearest_hit, Color, Hit, Light, Material, Plane, Primitive, Scene, Sphere};
pub use eddy_math::{Ray, Vec3};
