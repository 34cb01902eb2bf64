//! Pixel loop.
//!
//! Rendering is a pure function of scene, camera and image size: it does no
//! I/O, keeps no state between calls, and produces bit-identical grids for
//! identical inputs.

use std::time::Instant;

use eddy_core::{Color, Scene};
use log::debug;

use crate::bucket::render_parallel;
use crate::shading::trace;
use crate::{Camera, RenderResult};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Edge length of the square tiles handed to worker threads
    pub bucket_size: u32,
    /// Render buckets on the rayon pool instead of the calling thread
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
            bucket_size: crate::bucket::DEFAULT_BUCKET_SIZE,
            parallel: true,
        }
    }
}

impl RenderConfig {
    /// Width over height, for cameras that take their aspect from the image.
    /// An empty image reports 1.0 so a camera can still be built for it.
    pub fn aspect(&self) -> f64 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.width as f64 / self.height as f64
        }
    }
}

/// Convert a color to 8-bit RGBA. No gamma is applied.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let [r, g, b] = color.clamp().to_rgb8();
    [r, g, b, 255]
}

/// Row-major grid of rendered colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// One row of pixels.
    pub fn row(&self, y: u32) -> &[Color] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // chunks() panics on 0, and a zero-width image has no pixels anyway.
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Convert to packed RGB bytes.
    pub fn to_rgb(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.clamp().to_rgb8()).collect()
    }
}

/// Render the entire scene on the calling thread.
///
/// Pixels are traced in row-major order. A failure to generate a primary ray
/// aborts the whole pass.
pub fn render(scene: &Scene, camera: &Camera, width: u32, height: u32) -> RenderResult<ImageBuffer> {
    let start = Instant::now();
    let projection = camera.projection(width, height);
    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let ray = projection.ray(x, y)?;
            image.set(x, y, trace(&ray, scene));
        }
    }

    debug!("Rendered {}x{} in {:?}", width, height, start.elapsed());
    Ok(image)
}

/// Render according to `config`, serially or on the rayon pool.
pub fn render_with_config(scene: &Scene, camera: &Camera, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    if config.parallel {
        render_parallel(scene, camera, config)
    } else {
        render(scene, camera, config.width, config.height)
    }
}
