//! Glint renderer — Whitted-style CPU ray tracing.
//!
//! Recursive ray tracing with Phong local illumination, mirror reflection,
//! Fresnel-weighted dielectric refraction and shadow rays, over a polymorphic
//! primitive set (sphere, plane, triangle, cone, k-d-tree-accelerated
//! triangle mesh). Images render in parallel as independent column-slice
//! jobs on the rayon worker pool.

mod camera;
mod cone;
mod kdtree;
mod mesh;
mod object;
mod plane;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod triangle;

pub use camera::{Camera, CameraConfig, DepthOfField};
pub use cone::Cone;
pub use kdtree::KdTree;
pub use mesh::TriangleMesh;
pub use object::{Hit, Object};
pub use plane::Plane;
pub use renderer::{
    column_slices, render, render_pixel, render_with_cancel, CancelToken, ColumnRange,
    ImageBuffer, RenderConfig,
};
pub use scene::Scene;
pub use shading::{phong, reflect, refract, tone_map, trace_ray};
pub use sphere::Sphere;
pub use triangle::{LocalHit, Triangle, TriangleGeom};

/// Re-export math and scene-ingredient types from the companion crates
pub use glint_core::{Light, Material};
pub use glint_math::{Ray, Transform, Vec2, Vec3};
