//! Phong material description.

use glint_math::{Vec2, Vec3};

use crate::texture;

/// Procedural texture: maps UV coordinates to a color.
pub type TextureFn = fn(Vec2) -> Vec3;

/// Surface material for Phong shading with optional reflection/refraction.
///
/// Materials are plain values attached to exactly one primitive; they are
/// copied at scene build time and never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    /// Ambient reflectance
    pub ambient: Vec3,
    /// Diffuse reflectance
    pub diffuse: Vec3,
    /// Specular reflectance
    pub specular: Vec3,
    /// Phong exponent
    pub shininess: f32,
    /// Fraction of the reflected ray's radiance added to the surface, in [0, 1]
    pub reflectivity: f32,
    /// Whether the material transmits light as a dielectric
    pub refractive: bool,
    /// Relative refractive index of the interior medium (>= 1)
    pub refractive_index: f32,
    /// Optional procedural texture overriding the diffuse color
    pub texture: Option<TextureFn>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::ZERO,
            diffuse: Vec3::ONE,
            specular: Vec3::ZERO,
            shininess: 0.0,
            reflectivity: 0.0,
            refractive: false,
            refractive_index: 1.0,
            texture: None,
        }
    }
}

impl Material {
    /// Sample the diffuse color at the given UV coordinates.
    ///
    /// Returns the texture value when a texture is attached, the constant
    /// diffuse color otherwise.
    #[inline]
    pub fn diffuse_at(&self, uv: Vec2) -> Vec3 {
        match self.texture {
            Some(texture) => texture(uv),
            None => self.diffuse,
        }
    }
}

/// Shiny yellow plastic.
pub fn yellow_specular() -> Material {
    Material {
        ambient: Vec3::new(0.1, 0.1, 0.0),
        diffuse: Vec3::new(0.4, 0.4, 0.0),
        specular: Vec3::ONE,
        shininess: 100.0,
        ..Default::default()
    }
}

/// Matte green.
pub fn green_diffuse() -> Material {
    Material {
        ambient: Vec3::new(0.03, 0.1, 0.03),
        diffuse: Vec3::new(0.3, 1.0, 0.3),
        ..Default::default()
    }
}

/// Mildly shiny red plastic.
pub fn red_specular() -> Material {
    Material {
        ambient: Vec3::new(0.01, 0.02, 0.02),
        diffuse: Vec3::new(1.0, 0.2, 0.2),
        specular: Vec3::splat(0.5),
        shininess: 10.0,
        ..Default::default()
    }
}

/// Dark mirror-like blue, half reflective.
pub fn blue_specular() -> Material {
    Material {
        ambient: Vec3::new(0.02, 0.02, 0.1),
        diffuse: Vec3::new(0.1, 0.1, 0.1),
        specular: Vec3::splat(0.1),
        shininess: 100.0,
        reflectivity: 0.5,
        ..Default::default()
    }
}

/// Glass-like dielectric with index 2.0.
pub fn refractive() -> Material {
    Material {
        ambient: Vec3::new(0.02, 0.02, 0.1),
        diffuse: Vec3::new(0.1, 0.1, 0.1),
        specular: Vec3::splat(0.1),
        shininess: 100.0,
        reflectivity: 0.25,
        refractive: true,
        refractive_index: 2.0,
        ..Default::default()
    }
}

/// Matte red.
pub fn red_diffuse() -> Material {
    Material {
        ambient: Vec3::new(0.09, 0.06, 0.06),
        diffuse: Vec3::new(0.9, 0.6, 0.6),
        ..Default::default()
    }
}

/// Matte blue.
pub fn blue_diffuse() -> Material {
    Material {
        ambient: Vec3::new(0.06, 0.06, 0.09),
        diffuse: Vec3::new(0.6, 0.6, 0.9),
        ..Default::default()
    }
}

/// Matte white with a strong ambient term.
pub fn white_diffuse() -> Material {
    Material {
        ambient: Vec3::ONE,
        diffuse: Vec3::new(0.1, 0.1, 0.1),
        ..Default::default()
    }
}

/// Rainbow-striped texture material.
pub fn textured() -> Material {
    Material {
        diffuse: Vec3::ZERO,
        texture: Some(texture::rainbow),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let material = Material::default();
        assert_eq!(material.diffuse, Vec3::ONE);
        assert_eq!(material.reflectivity, 0.0);
        assert!(!material.refractive);
        assert!(material.texture.is_none());
    }

    #[test]
    fn test_diffuse_at_without_texture() {
        let material = green_diffuse();
        assert_eq!(
            material.diffuse_at(Vec2::new(0.3, 0.7)),
            Vec3::new(0.3, 1.0, 0.3)
        );
    }

    #[test]
    fn test_diffuse_at_with_texture() {
        let material = textured();
        let sampled = material.diffuse_at(Vec2::new(0.0, 0.0));
        // The rainbow texture returns a pure primary color.
        assert_eq!(sampled.max_element(), 1.0);
        assert_eq!(sampled.min_element(), 0.0);
    }

    #[test]
    fn test_presets_are_plain_values() {
        let a = blue_specular();
        let b = a;
        assert_eq!(a.reflectivity, b.reflectivity);
        assert_eq!(a.shininess, 100.0);
    }
}
