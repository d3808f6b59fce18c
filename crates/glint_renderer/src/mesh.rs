//! Triangle mesh primitive.

use glint_core::Material;
use glint_math::{Ray, Transform, Vec3};

use crate::kdtree::KdTree;
use crate::object::{Hit, Object};
use crate::triangle::TriangleGeom;

/// A triangle mesh accelerated by a k-d tree.
///
/// Triangles live in the transform's local space; queries map the ray in
/// once, run against the tree, and map the resulting hit back out.
pub struct TriangleMesh {
    tree: KdTree,
    transform: Transform,
    material: Material,
}

impl TriangleMesh {
    /// Build a mesh primitive from a flat triangle list.
    pub fn new(triangles: Vec<[Vec3; 3]>, transform: Transform, material: Material) -> Self {
        let geoms = triangles
            .into_iter()
            .map(|[v0, v1, v2]| TriangleGeom::new(v0, v1, v2))
            .collect();
        let tree = KdTree::build(geoms);
        log::info!("indexed mesh with {} triangles", tree.len());
        Self {
            tree,
            transform,
            material,
        }
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.tree.len()
    }
}

impl Object for TriangleMesh {
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let local_ray = self.transform.ray_to_local(ray);
        let local = self.tree.intersect(&local_ray)?;

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
