//! k-d tree over mesh triangles.
//!
//! A median-split binary partition: the split axis cycles with tree depth,
//! the sub-range is ordered by the triangle centroid along that axis, and
//! the median triangle is stored at the node itself. Parents exclusively own
//! their children, so the whole tree is released by dropping the root.

use std::cmp::Ordering;

use glint_math::Ray;

use crate::triangle::{LocalHit, TriangleGeom};

/// A balanced k-d tree answering nearest-hit queries over triangles.
pub struct KdTree {
    root: Option<Box<KdNode>>,
    len: usize,
}

struct KdNode {
    axis: usize,
    split: f32,
    triangle: TriangleGeom,
    left: Option<Box<KdNode>>,
    right: Option<Box<KdNode>>,
}

impl KdTree {
    /// Build a tree from a triangle list. An empty list yields a tree whose
    /// every query misses.
    pub fn build(triangles: Vec<TriangleGeom>) -> Self {
        let len = triangles.len();
        Self {
            root: build_node(triangles, 0),
            len,
        }
    }

    /// Number of indexed triangles.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no triangles.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Query the tree for a triangle hit.
    ///
    /// Descent is ordered by the ray direction's component along the split
    /// axis rather than by spatial containment, with the sibling subtree as
    /// fallback — an accepted approximation of the nearest hit, not a
    /// closest-hit guarantee.
    pub fn intersect(&self, ray: &Ray) -> Option<LocalHit> {
        self.root.as_deref().and_then(|node| intersect_node(node, ray))
    }
}

fn build_node(mut triangles: Vec<TriangleGeom>, depth: usize) -> Option<Box<KdNode>> {
    if triangles.is_empty() {
        return None;
    }

    let axis = depth % 3;
    // Stable sort: centroid ties keep input order.
    triangles.sort_by(|a, b| {
        a.centroid()[axis]
            .partial_cmp(&b.centroid()[axis])
            .unwrap_or(Ordering::Equal)
    });

    let median = triangles.len() / 2;
    let mut upper = triangles.split_off(median);
    let triangle = upper.remove(0);
    let split = triangle.centroid()[axis];

    Some(Box::new(KdNode {
        axis,
        split,
        triangle,
        left: build_node(triangles, depth + 1),
        right: build_node(upper, depth + 1),
    }))
}

fn intersect_node(node: &KdNode, ray: &Ray) -> Option<LocalHit> {
    // The node's own triangle is a cheap exact test; a hit short-circuits.
    if let Some(hit) = node.triangle.intersect(ray) {
        return Some(hit);
    }

    let (near, far) = if ray.direction()[node.axis] <= node.split {
        (&node.left, &node.right)
    } else {
        (&node.right, &node.left)
    };

    near.as_deref()
        .and_then(|child| intersect_node(child, ray))
        .or_else(|| far.as_deref().and_then(|child| intersect_node(child, ray)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Vec3;

    /// A small front-facing triangle centered on (x, y) at the given depth.
    fn facing_triangle(x: f32, y: f32, z: f32) -> TriangleGeom {
        TriangleGeom::new(
            Vec3::new(x - 0.4, y - 0.4, z),
            Vec3::new(x, y + 0.4, z),
            Vec3::new(x + 0.4, y - 0.4, z),
        )
    }

    #[test]
    fn test_empty_tree_misses() {
        let tree = KdTree::build(Vec::new());
        assert!(tree.is_empty());
        assert!(tree.intersect(&Ray::new(Vec3::ZERO, Vec3::Z)).is_none());
    }

    #[test]
    fn test_single_triangle() {
        let tree = KdTree::build(vec![facing_triangle(0.0, 0.0, 3.0)]);
        assert_eq!(tree.len(), 1);

        let hit = tree.intersect(&Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert!((hit.t - 3.0).abs() < 1e-4);
        assert!(tree
            .intersect(&Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0)))
            .is_none());
    }

    #[test]
    fn test_tree_matches_linear_scan_on_separated_triangles() {
        // Well-separated triangles: each probe ray can hit exactly one, so
        // the direction-ordered descent must agree with a linear scan.
        let centers = [
            (-6.0, 0.0),
            (-3.0, 1.0),
            (0.0, -1.0),
            (3.0, 0.5),
            (6.0, -0.5),
        ];
        let triangles: Vec<TriangleGeom> = centers
            .iter()
            .map(|&(x, y)| facing_triangle(x, y, 5.0))
            .collect();
        let tree = KdTree::build(triangles.clone());

        for &(x, y) in &centers {
            let ray = Ray::new(Vec3::new(x, y, 0.0), Vec3::Z);

            let linear = triangles
                .iter()
                .filter_map(|t| t.intersect(&ray))
                .min_by(|a, b| a.t.partial_cmp(&b.t).unwrap());
            let from_tree = tree.intersect(&ray);

            let linear = linear.expect("probe ray must hit one triangle");
            let from_tree = from_tree.expect("tree query must find the same triangle");
            assert!((linear.point - from_tree.point).length() < 1e-5);
            assert!((linear.t - from_tree.t).abs() < 1e-5);
        }
    }

    #[test]
    fn test_tree_misses_between_triangles() {
        let triangles = vec![
            facing_triangle(-4.0, 0.0, 5.0),
            facing_triangle(4.0, 0.0, 5.0),
        ];
        let tree = KdTree::build(triangles);

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(tree.intersect(&ray).is_none());
    }
}
