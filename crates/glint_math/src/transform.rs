//! Affine transform for primitives.
//!
//! Stores the model matrix together with its inverse and normal matrix so
//! intersection code can move rays into local space and map hits back out
//! without recomputing inverses per query.

use glam::{Mat4, Vec3};

use crate::Ray;

/// An affine transform attached to a primitive.
///
/// Rays are mapped into local space with the inverse matrix, intersections
/// are solved there, and the resulting point/normal are mapped back with the
/// matrix and the normal (inverse-transpose) matrix respectively.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    matrix: Mat4,
    inverse: Mat4,
    normal_matrix: Mat4,
}

impl Transform {
    /// Create a transform from a model matrix.
    pub fn new(matrix: Mat4) -> Self {
        let inverse = matrix.inverse();
        Self {
            matrix,
            inverse,
            normal_matrix: inverse.transpose(),
        }
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self::new(Mat4::IDENTITY)
    }

    /// Map a world-space ray into local space.
    ///
    /// The origin transforms as a point (w = 1), the direction as a vector
    /// (w = 0). The local direction is re-normalized by `Ray::new`, so local
    /// ray parameters are in local units.
    pub fn ray_to_local(&self, ray: &Ray) -> Ray {
        let origin = self.inverse.transform_point3(ray.origin());
        let direction = self.inverse.transform_vector3(ray.direction());
        Ray::new(origin, direction)
    }

    /// Map a local-space point to world space.
    #[inline]
    pub fn point_to_world(&self, point: Vec3) -> Vec3 {
        self.matrix.transform_point3(point)
    }

    /// Map a local-space normal to world space (unit length).
    #[inline]
    pub fn normal_to_world(&self, normal: Vec3) -> Vec3 {
        self.normal_matrix.transform_vector3(normal).normalize()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
