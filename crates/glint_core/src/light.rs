//! Point light sources.

use glint_math::Vec3;

/// A point light with a position and an unbounded positive intensity.
///
/// Lights are created during scene setup and read-only during the render.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    /// Position of the light source
    pub position: Vec3,
    /// Color/intensity of the light source
    pub color: Vec3,
}

impl Light {
    /// Create a light with the given position and color.
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }

    /// Create a white light at the given position.
    pub fn white(position: Vec3) -> Self {
        Self::new(position, Vec3::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_light() {
        let light = Light::white(Vec3::new(0.0, 26.0, 5.0));
        assert_eq!(light.color, Vec3::ONE);
        assert_eq!(light.position.y, 26.0);
    }
}
