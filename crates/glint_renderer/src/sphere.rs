//! Sphere primitive.

use std::f32::consts::{FRAC_PI_2, PI};

use glint_core::Material;
use glint_math::{Ray, Vec2, Vec3};

use crate::object::{Hit, Object};

/// Near-root cutoff; keeps shadow rays leaving a sphere surface from
/// re-hitting it.
const T_MIN: f32 = 0.1;

/// A sphere primitive.
pub struct Sphere {
    radius: f32,
    center: Vec3,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(radius: f32, center: Vec3, material: Material) -> Self {
        Self {
            radius,
            center,
            material,
        }
    }
}

impl Object for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let c = self.center - ray.origin();
        let c_dot_c = c.dot(c);
        let c_dot_d = c.dot(ray.direction());

        // Squared perpendicular distance from the center to the ray line.
        let d2 = (c_dot_c - c_dot_d * c_dot_d).max(0.0);
        if d2 > self.radius * self.radius {
            return None;
        }

        let half_chord = (self.radius * self.radius - d2).sqrt();
        let mut t = c_dot_d - half_chord;
        if t < T_MIN {
            // Near root is behind (or on) the origin; fall back to the far one.
            t = c_dot_d + half_chord;
        }
        if t < T_MIN {
            return None;
        }

        let point = ray.at(t);
        let normal = (point - self.center).normalize();
        let uv = Vec2::new(
            (normal.y.asin() + FRAC_PI_2) / PI,
            (normal.z.atan2(normal.x) + PI) / (2.0 * PI),
        );

        Some(Hit {
            point,
            normal,
            distance: point.distance(ray.origin()),
            uv,
            material: &self.material,
        })
    }
}
