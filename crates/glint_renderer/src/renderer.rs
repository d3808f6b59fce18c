//! Column-slice render scheduling and the image buffer.
//!
//! The image is partitioned into contiguous column ranges, one job per
//! range, fanned out over the rayon worker pool. Jobs share nothing mutable:
//! each returns the pixels of its own range and the scheduler writes them
//! after the pool drains.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use glint_math::{Vec2, Vec3};

use crate::camera::Camera;
use crate::scene::Scene;
use crate::shading::{tone_map, trace_ray};

/// Render configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Maximum recursion depth for reflection/refraction bounces
    pub max_depth: u32,
    /// Base seed for the per-pixel sampling streams
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            seed: 0,
        }
    }
}

/// Cooperative cancellation for long renders.
///
/// Shared between the caller and the render jobs; each job checks the token
/// once per column, so an aborted render returns without waiting for the
/// whole pool to drain. Columns not yet traced stay black.
#[derive(Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// A contiguous range of image columns rendered by one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRange {
    pub start: u32,
    pub end: u32,
}

/// Partition `[0, width)` into `jobs` contiguous column slices.
///
/// The final slice absorbs the remainder, so the slices cover every column
/// exactly once.
pub fn column_slices(width: u32, jobs: u32) -> Vec<ColumnRange> {
    let jobs = jobs.max(1);
    let slice = width / jobs;
    (0..jobs)
        .map(|i| ColumnRange {
            start: i * slice,
            end: if i + 1 == jobs { width } else { (i + 1) * slice },
        })
        .collect()
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Vec3>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Vec3) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Vec3] {
        &self.pixels
    }

    /// Convert to 8-bit RGB bytes in row-major order.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.push(channel_to_u8(color.x));
            bytes.push(channel_to_u8(color.y));
            bytes.push(channel_to_u8(color.z));
        }
        bytes
    }

    /// Write the image to disk; the format is chosen from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let mut buffer = image::RgbImage::new(self.width, self.height);
        for (x, y, pixel) in buffer.enumerate_pixels_mut() {
            let color = self.get(x, y);
            *pixel = image::Rgb([
                channel_to_u8(color.x),
                channel_to_u8(color.y),
                channel_to_u8(color.z),
            ]);
        }
        buffer.save(path)
    }
}

#[inline]
fn channel_to_u8(value: f32) -> u8 {
    (255.0 * value.clamp(0.0, 1.0)) as u8
}

/// Render the scene into a new image buffer.
///
/// One job per column slice, two slices per worker; `collect` is the barrier
/// that blocks until the pool has drained every job.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    render_with_cancel(scene, camera, config, &CancelToken::new())
}

/// Render with cooperative cancellation.
///
/// Identical to [`render`], but jobs stop tracing new columns once the token
/// is cancelled; the returned image keeps untraced pixels black.
pub fn render_with_cancel(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    cancel: &CancelToken,
) -> ImageBuffer {
    let width = camera.config().width;
    let height = camera.config().height;

    let jobs = 2 * rayon::current_num_threads() as u32;
    let slices = column_slices(width, jobs);
    log::info!(
        "rendering {}x{} over {} column slices",
        width,
        height,
        slices.len()
    );

    let results: Vec<(ColumnRange, Vec<Vec3>)> = slices
        .into_par_iter()
        .map(|range| (range, render_slice(scene, camera, config, range, cancel)))
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for (range, pixels) in results {
        let mut index = 0;
        for x in range.start..range.end {
            for y in 0..height {
                image.set_pixel(x, y, pixels[index]);
                index += 1;
            }
        }
    }
    image
}

/// Render one column slice; pixels are returned column-major within the
/// slice.
fn render_slice(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    range: ColumnRange,
    cancel: &CancelToken,
) -> Vec<Vec3> {
    let height = camera.config().height;
    let capacity = ((range.end - range.start) * height) as usize;
    let mut pixels = Vec::with_capacity(capacity);
    for x in range.start..range.end {
        if cancel.is_cancelled() {
            pixels.resize(capacity, Vec3::ZERO);
            break;
        }
        for y in 0..height {
            pixels.push(render_pixel(scene, camera, config, x, y));
        }
    }
    pixels
}

/// Render a single pixel.
pub fn render_pixel(scene: &Scene, camera: &Camera, config: &RenderConfig, x: u32, y: u32) -> Vec3 {
    let primary = camera.primary_ray(x, y);
    match camera.config().dof {
        None => tone_map(trace_ray(scene, &primary, config.max_depth, true)),
        Some(dof) => {
            let samples = dof.samples.max(1);
            let mut rng = pixel_rng(config.seed, camera.config().width, x, y);
            let mut color = Vec3::ZERO;
            for _ in 0..samples {
                let ray = camera.lens_ray(&primary, &dof, sample_unit_disk(&mut rng));
                color += tone_map(trace_ray(scene, &ray, config.max_depth, true));
            }
            color / samples as f32
        }
    }
}

/// Per-pixel RNG stream: deterministic for a given seed and independent of
/// how columns are sliced across jobs.
fn pixel_rng(seed: u64, width: u32, x: u32, y: u32) -> StdRng {
    let index = y as u64 * width as u64 + x as u64;
    StdRng::seed_from_u64(seed ^ index.wrapping_mul(0x9e37_79b9_7f4a_7c15))
}

/// Rejection-sample a point in the unit disk.
fn sample_unit_disk(rng: &mut StdRng) -> Vec2 {
    loop {
        let p = Vec2::new(rng.gen::<f32>() * 2.0 - 1.0, rng.gen::<f32>() * 2.0 - 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
