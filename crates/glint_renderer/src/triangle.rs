//! Triangle primitive.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use glint_core::Material;
use glint_math::{Ray, Transform, Vec2, Vec3};

use crate::object::{Hit, Object};

/// Determinant/parameter cutoff for the Möller-Trumbore test.
const EPSILON: f32 = 1e-7;

/// An intersection in the space the triangle's vertices live in.
#[derive(Debug, Clone, Copy)]
pub struct LocalHit {
    pub point: Vec3,
    pub normal: Vec3,
    pub t: f32,
    pub uv: Vec2,
}

/// Bare triangle geometry: three vertices with precomputed edge vectors and
/// face normal. Shared between the standalone primitive and mesh k-d trees.
#[derive(Debug, Clone)]
pub struct TriangleGeom {
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    e1: Vec3,
    e2: Vec3,
    normal: Vec3,
}

impl TriangleGeom {
    /// Create a triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let e1 = v1 - v0;
        let e2 = v2 - v0;
        Self {
            v0,
            v1,
            v2,
            e1,
            e2,
            normal: e1.cross(e2).normalize(),
        }
    }

    /// Triangle centroid; the k-d tree's per-axis ordering key.
    #[inline]
    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }

    /// Vertices in input order.
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Möller-Trumbore intersection, front faces only.
    pub fn intersect(&self, ray: &Ray) -> Option<LocalHit> {
        let h = ray.direction().cross(self.e2);
        let det = self.e1.dot(h);

        // Positive determinant means the ray faces the front of the
        // triangle; parallel and backfacing rays are rejected together.
        if det <= EPSILON {
            return None;
        }

        let f = 1.0 / det;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(self.e1);
        let v = f * ray.direction().dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * self.e2.dot(q);
        if t <= EPSILON {
            return None;
        }

        Some(LocalHit {
            point: ray.at(t),
            normal: self.normal,
            t,
            uv: Vec2::new(u, v),
        })
    }
}

/// A standalone triangle primitive.
pub struct Triangle {
    geom: TriangleGeom,
    transform: Transform,
    material: Material,
}

impl Triangle {
    /// Create an untransformed triangle.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        Self::with_transform(v0, v1, v2, Transform::identity(), material)
    }

    /// Create a triangle whose vertices live in the transform's local space.
    pub fn with_transform(
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        transform: Transform,
        material: Material,
    ) -> Self {
        Self {
            geom: TriangleGeom::new(v0, v1, v2),
            transform,
            material,
        }
    }
}

impl Object for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let local_ray = self.transform.ray_to_local(ray);
        let local = self.geom.intersect(&local_ray)?;

        let point = self.transform.point_to_world(local.point);
        let normal = self.transform.normal_to_world(local.normal);

        Some(Hit {
            point,
            normal,
            distance: point.distance(ray.origin()),
            uv: local.uv,
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Mat4;

    fn front_facing_triangle() -> (Vec3, Vec3, Vec3) {
        // Normal points toward -Z, so a ray travelling +Z sees the front.
        (
            Vec3::new(-1.0, -1.0, 2.0),
            Vec3::new(0.0, 1.0, 2.0),
            Vec3::new(1.0, -1.0, 2.0),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let (v0, v1, v2) = front_facing_triangle();
        let triangle = Triangle::new(v0, v1, v2, Material::default());

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = triangle.intersect(&ray).unwrap();
        assert!((hit.distance - 2.0).abs() < 1e-4);
        assert!(hit.normal.z < 0.0);
    }

    #[test]
    fn test_triangle_backface_misses() {
        let (v0, v1, v2) = front_facing_triangle();
        let triangle = Triangle::new(v0, v1, v2, Material::default());

        let ray = Ray::new(Vec3::new(0.0, 0.0, 4.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(triangle.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_outside_edges_miss() {
        let (v0, v1, v2) = front_facing_triangle();
        let triangle = Triangle::new(v0, v1, v2, Material::default());

        let ray = Ray::new(Vec3::new(2.0, 2.0, 0.0), Vec3::Z);
        assert!(triangle.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_barycentric_consistency() {
        let (v0, v1, v2) = front_facing_triangle();
        let triangle = Triangle::new(v0, v1, v2, Material::default());

        let ray = Ray::new(Vec3::new(0.1, -0.2, 0.0), Vec3::Z);
        let hit = triangle.intersect(&ray).unwrap();

        // Reconstructing the point from (u, v) must match the reported hit.
        let (u, v) = (hit.uv.x, hit.uv.y);
        let reconstructed = (1.0 - u - v) * v0 + u * v1 + v * v2;
        assert!((reconstructed - hit.point).length() < 1e-4);
    }

    #[test]
    fn test_triangle_with_transform_reports_world_distance() {
        let (v0, v1, v2) = front_facing_triangle();
        // Scaling the local space must not change the world-space distance
        // reported for the equivalent world geometry.
        let transform = Transform::new(Mat4::from_scale(Vec3::splat(0.5)));
        let triangle = Triangle::with_transform(
            v0 * 2.0,
            v1 * 2.0,
            v2 * 2.0,
            transform,
            Material::default(),
        );

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = triangle.intersect(&ray).unwrap();
        assert!((hit.distance - 2.0).abs() < 1e-4);
        assert!((hit.point.z - 2.0).abs() < 1e-4);
    }
}
