//! Wavefront-subset mesh loading.
//!
//! Parses the two record kinds the renderer consumes:
//!
//! - `v x y z` — a vertex position
//! - `f a/.. b/.. c/..` — a triangular face of 1-based vertex indices; only
//!   the leading integer of each slash-delimited group is used
//!
//! The result is a flat, input-ordered list of triangles (three vertices
//! each); everything else about the file's grammar is ignored.

use std::fs;
use std::path::Path;

use glint_math::Vec3;
use thiserror::Error;

/// Errors that can occur while loading a mesh file.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed vertex record at line {line}")]
    InvalidVertex { line: usize },

    #[error("malformed face record at line {line}")]
    InvalidFace { line: usize },

    #[error("face index {index} out of range at line {line}")]
    IndexOutOfRange { index: usize, line: usize },
}

/// Result type for mesh loading.
pub type MeshResult<T> = Result<T, MeshError>;

/// Load a mesh file into a flat triangle list.
pub fn load_triangles(path: impl AsRef<Path>) -> MeshResult<Vec<[Vec3; 3]>> {
    let path = path.as_ref();
    let triangles = parse_triangles(&fs::read_to_string(path)?)?;
    log::info!(
        "loaded {} triangles from {}",
        triangles.len(),
        path.display()
    );
    Ok(triangles)
}

/// Parse mesh file contents into a flat triangle list.
pub fn parse_triangles(content: &str) -> MeshResult<Vec<[Vec3; 3]>> {
    let mut vertices: Vec<Vec3> = Vec::new();
    let mut triangles: Vec<[Vec3; 3]> = Vec::new();

    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        let mut fields = raw.split_whitespace();
        match fields.next() {
            Some("v") => {
                let mut component = || {
                    fields
                        .next()
                        .and_then(|s| s.parse::<f32>().ok())
                        .ok_or(MeshError::InvalidVertex { line })
                };
                let x = component()?;
                let y = component()?;
                let z = component()?;
                vertices.push(Vec3::new(x, y, z));
            }
            Some("f") => {
                let mut corner = || -> MeshResult<Vec3> {
                    let group = fields.next().ok_or(MeshError::InvalidFace { line })?;
                    let index = group
                        .split('/')
                        .next()
                        .and_then(|s| s.parse::<usize>().ok())
                        .ok_or(MeshError::InvalidFace { line })?;
                    index
                        .checked_sub(1)
                        .and_then(|i| vertices.get(i))
                        .copied()
                        .ok_or(MeshError::IndexOutOfRange { index, line })
                };
                triangles.push([corner()?, corner()?, corner()?]);
            }
            // Comments, normals, texture coordinates and everything else
            // are outside the consumed subset.
            _ => {}
        }
    }

    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUBE_FACE: &str = "\
# a single quad split into two triangles
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
f 1 2 3
f 1/4/1 3/5/1 4/6/1
";

    #[test]
    fn test_parse_vertices_and_faces() {
        let triangles = parse_triangles(CUBE_FACE).unwrap();
        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[0][0], Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(triangles[0][2], Vec3::new(1.0, 1.0, 0.0));
        // Slash groups use only the leading integer.
        assert_eq!(triangles[1][1], Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(triangles[1][2], Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_unknown_records_skipped() {
        let triangles = parse_triangles("vn 0 1 0\nvt 0.5 0.5\no thing\n").unwrap();
        assert!(triangles.is_empty());
    }

    #[test]
    fn test_malformed_vertex() {
        let err = parse_triangles("v 1.0 nope 3.0\n").unwrap_err();
        assert!(matches!(err, MeshError::InvalidVertex { line: 1 }));
    }

    #[test]
    fn test_face_index_out_of_range() {
        let err = parse_triangles("v 0 0 0\nf 1 2 3\n").unwrap_err();
        assert!(matches!(
            err,
            MeshError::IndexOutOfRange { index: 2, line: 2 }
        ));
    }

    #[test]
    fn test_zero_index_rejected() {
        let err = parse_triangles("v 0 0 0\nf 0 1 1\n").unwrap_err();
        assert!(matches!(err, MeshError::IndexOutOfRange { index: 0, .. }));
    }
}
