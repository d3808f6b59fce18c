//! Render settings, optionally loaded from a JSON file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use glint_renderer::{CameraConfig, DepthOfField, RenderConfig};

/// Render settings with documented defaults.
///
/// Every field may be omitted in the JSON file; omitted fields keep their
/// default value.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Image width in pixels (default 1024)
    pub width: u32,
    /// Image height in pixels (default 768)
    pub height: u32,
    /// Field of view in degrees (default 90)
    pub fov: f32,
    /// Maximum bounce depth (default 3)
    pub max_depth: u32,
    /// Base seed for the sampling streams (default 0)
    pub seed: u64,
    /// Thin-lens depth of field; absent renders a pinhole camera
    pub depth_of_field: Option<DofSettings>,
}

/// Depth-of-field settings (defaults: focal distance 8.0, aperture 0.3,
/// 30 samples).
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DofSettings {
    pub focal_distance: f32,
    pub aperture: f32,
    pub samples: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fov: 90.0,
            max_depth: 3,
            seed: 0,
            depth_of_field: None,
        }
    }
}

impl Default for DofSettings {
    fn default() -> Self {
        let defaults = DepthOfField::default();
        Self {
            focal_distance: defaults.focal_distance,
            aperture: defaults.aperture,
            samples: defaults.samples,
        }
    }
}

impl RenderSettings {
    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    /// The camera configuration these settings describe.
    pub fn camera_config(&self) -> CameraConfig {
        CameraConfig {
            width: self.width,
            height: self.height,
            fov: self.fov,
            dof: self.depth_of_field.map(|dof| DepthOfField {
                focal_distance: dof.focal_distance,
                aperture: dof.aperture,
                samples: dof.samples,
            }),
        }
    }

    /// The render configuration these settings describe.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            max_depth: self.max_depth,
            seed: self.seed,
        }
    }
}
