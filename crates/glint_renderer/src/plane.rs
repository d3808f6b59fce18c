//! Infinite plane primitive.

use glint_core::Material;
use glint_math::{Ray, Vec2, Vec3};

use crate::object::{Hit, Object};

/// An infinite one-sided plane.
///
/// The ray must face the plane (`dot(direction, normal) < 0`) to register a
/// hit, so planes are only visible from the side the normal points to.
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a plane through `point` with the given normal.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            material,
        }
    }
}

/// Bare one-sided ray/plane incidence: the hit point and ray parameter.
///
/// Shared with the cone cap, which needs plane geometry without a material.
pub(crate) fn plane_hit(point: Vec3, normal: Vec3, ray: &Ray) -> Option<(Vec3, f32)> {
    let d_dot_n = ray.direction().dot(normal);
    if d_dot_n >= 0.0 {
        return None;
    }
    let t = (point - ray.origin()).dot(normal) / d_dot_n;
    if t <= 0.0 {
        return None;
    }
    Some((ray.at(t), t))
}

impl Object for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let (point, t) = plane_hit(self.point, self.normal, ray)?;

        // Project the hit point onto two in-plane axes for UVs. The primary
        // basis degenerates when the normal is parallel to X.
        let mut e1 = self.normal.cross(Vec3::X);
        if e1.length_squared() < 1e-12 {
            e1 = self.normal.cross(Vec3::Z);
        }
        let e1 = e1.normalize();
        let e2 = self.normal.cross(e1).normalize();
        let uv = Vec2::new(e1.dot(point), e2.dot(point));

        Some(Hit {
            point,
            normal: self.normal,
            distance: t,
            uv,
            material: &self.material,
        })
    }
}
