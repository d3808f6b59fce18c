//! Glint core — scene ingredients shared by the renderer.
//!
//! This crate provides:
//!
//! - **Materials**: the Phong material value type and the stock presets
//! - **Lights**: point lights with unbounded intensity
//! - **Procedural textures**: checkerboard, rainbow stripes, Perlin noise
//! - **Mesh loading**: a wavefront-subset parser producing flat triangle lists

pub mod light;
pub mod material;
pub mod mesh;
pub mod texture;

// Re-export commonly used types
pub use light::Light;
pub use material::{Material, TextureFn};
pub use mesh::{load_triangles, parse_triangles, MeshError, MeshResult};
