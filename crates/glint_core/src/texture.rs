//! Procedural textures.
//!
//! Plain functions from UV coordinates to a color, plus the gradient-noise
//! generator behind the Perlin texture. The shading code treats these as
//! opaque callables.

use std::sync::OnceLock;

use glint_math::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Black/white checkerboard.
pub fn checkerboard(uv: Vec2) -> Vec3 {
    let n = 20.0;
    let value = ((n * uv.x).floor() + (2.0 * n * uv.y).floor()) as i64;
    Vec3::splat(value.rem_euclid(2) as f32)
}

/// Diagonal red/green/blue stripes.
pub fn rainbow(uv: Vec2) -> Vec3 {
    let n = 40.0;
    let value = (n * uv.y + 0.5 * n * uv.x).floor() as i64;
    match value.rem_euclid(3) {
        0 => Vec3::new(1.0, 0.0, 0.0),
        1 => Vec3::new(0.0, 1.0, 0.0),
        _ => Vec3::new(0.0, 0.0, 1.0),
    }
}

/// Grayscale Perlin noise.
pub fn perlin(uv: Vec2) -> Vec3 {
    static NOISE: OnceLock<PerlinNoise> = OnceLock::new();
    let noise = NOISE.get_or_init(|| PerlinNoise::new(237));
    Vec3::splat(noise.noise(8.0 * uv.x as f64, 8.0 * uv.y as f64, 1.0) as f32)
}

/// Classic 3D gradient noise with a seeded permutation table.
pub struct PerlinNoise {
    permutation: Vec<usize>,
}

impl PerlinNoise {
    /// Create a noise generator from a seed.
    pub fn new(seed: u64) -> Self {
        let mut permutation: Vec<usize> = (0..256).collect();
        permutation.shuffle(&mut StdRng::seed_from_u64(seed));
        // Duplicate so corner hashing never indexes out of the table.
        permutation.extend_from_within(..);
        Self { permutation }
    }

    /// Noise value in [0, 1] at the given point.
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        let p = &self.permutation;

        // Unit cube that contains the point
        let xi = (x.floor() as i64 & 255) as usize;
        let yi = (y.floor() as i64 & 255) as usize;
        let zi = (z.floor() as i64 & 255) as usize;

        // Relative position of the point in the cube
        let x = x - x.floor();
        let y = y - y.floor();
        let z = z - z.floor();

        // Fade curves for each coordinate
        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        // Hash coordinates of the 8 cube corners
        let a = p[xi] + yi;
        let aa = p[a] + zi;
        let ab = p[a + 1] + zi;
        let b = p[xi + 1] + yi;
        let ba = p[b] + zi;
        let bb = p[b + 1] + zi;

        // Blend the gradient contributions from the 8 corners
        let res = lerp(
            w,
            lerp(
                v,
                lerp(u, grad(p[aa], x, y, z), grad(p[ba], x - 1.0, y, z)),
                lerp(u, grad(p[ab], x, y - 1.0, z), grad(p[bb], x - 1.0, y - 1.0, z)),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(p[aa + 1], x, y, z - 1.0),
                    grad(p[ba + 1], x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad(p[ab + 1], x, y - 1.0, z - 1.0),
                    grad(p[bb + 1], x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        );
        (res + 1.0) / 2.0
    }
}

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    // Lower 4 bits of the hash pick one of 12 gradient directions
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}
