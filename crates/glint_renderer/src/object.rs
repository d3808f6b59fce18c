//! Object trait and Hit record for ray-object intersection.

use glint_core::Material;
use glint_math::{Ray, Vec2, Vec3};

/// Record of a ray-object intersection.
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    /// Point of intersection in world space
    pub point: Vec3,
    /// Unit surface normal at the intersection, world space
    pub normal: Vec3,
    /// World-space distance from the ray origin to the intersection
    pub distance: f32,
    /// UV texture coordinates
    pub uv: Vec2,
    /// Material of the intersected primitive
    pub material: &'a Material,
}

/// Trait for primitives that can be intersected by rays.
///
/// Primitives are built once during scene setup and only read afterwards,
/// so render threads may query them concurrently.
pub trait Object: Send + Sync {
    /// Intersect a ray with this primitive.
    ///
    /// Returns `None` unless a real, forward intersection exists. The
    /// returned distance is measured in world space, so hits on differently
    /// scaled primitives compare consistently.
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>>;
}
