//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are traced independently on
//! the rayon pool and then gathered into one grid. Scene and camera are only
//! read, so no synchronization is needed beyond the final gather.

use std::time::Instant;

use eddy_core::{Color, Scene};
use log::debug;
use rayon::prelude::*;

use crate::camera::Projection;
use crate::renderer::{ImageBuffer, RenderConfig};
use crate::shading::trace;
use crate::{Camera, RenderResult};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Cover a `width` x `height` image with tiles of at most `bucket_size`
/// pixels per side, in row-major order. Edge tiles are cropped.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh));
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Render a single bucket to a vector of colors.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(bucket: &Bucket, projection: &Projection, scene: &Scene) -> RenderResult<Vec<Color>> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let ray = projection.ray(bucket.x + local_x, bucket.y + local_y)?;
            pixels.push(trace(&ray, scene));
        }
    }

    Ok(pixels)
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket's pixels into their place in `image`.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let width = self.bucket.width as usize;
        for (row, chunk) in self.pixels.chunks(width.max(1)).enumerate() {
            for (col, color) in chunk.iter().enumerate() {
                image.set(self.bucket.x + col as u32, self.bucket.y + row as u32, *color);
            }
        }
    }
}

/// Render all buckets on the rayon pool and gather them into one grid.
///
/// The output is identical to [`crate::render`] for the same inputs.
pub fn render_parallel(scene: &Scene, camera: &Camera, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    let start = Instant::now();
    let projection = camera.projection(config.width, config.height);
    let buckets = generate_buckets(config.width, config.height, config.bucket_size);

    let results = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, &projection, scene).map(|pixels| BucketResult::new(*bucket, pixels)))
        .collect::<RenderResult<Vec<_>>>()?;

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        result.write_into(&mut image);
    }

    debug!(
        "Rendered {}x{} in {} buckets on {} threads in {:?}",
        config.width,
        config.height,
        results.len(),
        rayon::current_num_threads(),
        start.elapsed()
    );
    Ok(image)
}
