//! Camera and primary-ray generation.

use glint_math::{Ray, Vec2, Vec3};

/// Thin-lens depth-of-field settings.
#[derive(Debug, Clone, Copy)]
pub struct DepthOfField {
    /// Distance to the plane of perfect focus
    pub focal_distance: f32,
    /// Aperture radius; larger apertures blur out-of-focus geometry more
    pub aperture: f32,
    /// Lens samples averaged per pixel
    pub samples: u32,
}

impl Default for DepthOfField {
    fn default() -> Self {
        Self {
            focal_distance: 8.0,
            aperture: 0.3,
            samples: 30,
        }
    }
}

/// Camera configuration.
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Field of view in degrees
    pub fov: f32,
    /// Optional thin-lens depth of field; `None` renders a pinhole camera
    pub dof: Option<DepthOfField>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fov: 90.0,
            dof: None,
        }
    }
}

/// Camera at the origin looking down +Z, with a precomputed image-plane
/// mapping.
pub struct Camera {
    config: CameraConfig,
    /// Side length of one pixel on the image plane at z = 1
    pixel_size: f32,
    /// Image-plane x of the left edge
    left: f32,
    /// Image-plane y of the top edge
    top: f32,
}

impl Camera {
    /// Create a camera from its configuration.
    pub fn new(config: CameraConfig) -> Self {
        let pixel_size = 2.0 * (config.fov.to_radians() / 2.0).tan() / config.width as f32;
        Self {
            config,
            pixel_size,
            left: -pixel_size * config.width as f32 / 2.0,
            top: pixel_size * config.height as f32 / 2.0,
        }
    }

    /// The camera's configuration.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Ray through the center of pixel (x, y).
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let dx = self.left + x as f32 * self.pixel_size + self.pixel_size / 2.0;
        let dy = self.top - y as f32 * self.pixel_size - self.pixel_size / 2.0;
        Ray::new(Vec3::ZERO, Vec3::new(dx, dy, 1.0))
    }

    /// Thin-lens ray for one aperture sample.
    ///
    /// The origin is jittered by `disk_sample` (a point in the unit disk)
    /// scaled by the aperture, and the ray is re-aimed at the primary ray's
    /// point on the focal plane, so geometry at the focal distance stays
    /// sharp.
    pub fn lens_ray(&self, primary: &Ray, dof: &DepthOfField, disk_sample: Vec2) -> Ray {
        let focal_point = primary.direction() * (dof.focal_distance / primary.direction().z);
        let origin =
            primary.origin() + Vec3::new(disk_sample.x, disk_sample.y, 0.0) * dof.aperture;
        Ray::new(origin, focal_point - origin)
    }
}
