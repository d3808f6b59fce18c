//! Scene: the immutable collection of primitives and lights.

use glint_core::Light;
use glint_math::{Ray, Vec3};

use crate::object::{Hit, Object};

/// Self-intersection bias for shadow rays: occluders closer than this are
/// treated as numerical noise on the shaded surface itself.
const SHADOW_EPSILON: f32 = 0.003;

/// An ordered collection of primitives plus lights and one ambient term.
///
/// A scene is built single-threaded before rendering starts and never
/// mutated afterwards; render threads only read it, which is what makes the
/// lock-free parallel render phase safe.
pub struct Scene {
    objects: Vec<Box<dyn Object>>,
    lights: Vec<Light>,
    ambient: Vec3,
}

impl Scene {
    /// Create an empty scene with no ambient light.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            ambient: Vec3::ZERO,
        }
    }

    /// Set the ambient light term.
    pub fn with_ambient(mut self, ambient: Vec3) -> Self {
        self.ambient = ambient;
        self
    }

    /// Add a primitive to the scene.
    pub fn add_object(&mut self, object: impl Object + 'static) {
        self.objects.push(Box::new(object));
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// The ambient light term.
    pub fn ambient(&self) -> Vec3 {
        self.ambient
    }

    /// The scene's lights.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Number of primitives.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Find the nearest hit along a ray over all primitives.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest: Option<Hit> = None;
        for object in &self.objects {
            if let Some(hit) = object.intersect(ray) {
                let nearer = closest
                    .as_ref()
                    .map_or(true, |current| hit.distance < current.distance);
                if nearer {
                    closest = Some(hit);
                }
            }
        }
        closest
    }

    /// Whether any primitive blocks the ray strictly between the
    /// self-intersection bias and `max_distance`.
    pub fn occluded(&self, ray: &Ray, max_distance: f32) -> bool {
        self.objects.iter().any(|object| {
            object.intersect(ray).map_or(false, |hit| {
                hit.distance > SHADOW_EPSILON && hit.distance < max_distance
            })
        })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
