//! Cone primitive.
//!
//! A unit cone in local space: `x^2 + z^2 = y^2` clipped to `y ∈ [0, 1]`,
//! capped by a unit disk at y = 1. Placement, scale and orientation come
//! entirely from the attached transform.

use glint_core::Material;
use glint_math::{Ray, Transform, Vec2, Vec3};

use crate::object::{Hit, Object};
use crate::plane::plane_hit;

/// Near-root cutoff in local ray units.
const T_MIN: f32 = 0.1;

/// A transformed unit cone.
pub struct Cone {
    transform: Transform,
    material: Material,
}

impl Cone {
    /// Create a cone with the given placement transform.
    pub fn new(transform: Transform, material: Material) -> Self {
        Self {
            transform,
            material,
        }
    }
}

impl Object for Cone {
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        // Solve in local space; the local direction is unit length again
        // after `ray_to_local`, so local roots are local distances.
        let local_ray = self.transform.ray_to_local(ray);
        let o = local_ray.origin();
        let d = local_ray.direction();

        let a = d.x * d.x + d.z * d.z - d.y * d.y;
        let b = 2.0 * (d.x * o.x + d.z * o.z - d.y * o.y);
        let c = o.x * o.x + o.z * o.z - o.y * o.y;

        let delta = b * b - 4.0 * a * c;
        if delta < 0.0 {
            return None;
        }
        let sqrt_delta = delta.sqrt();
        let t1 = (-b - sqrt_delta) / (2.0 * a);
        let t2 = (-b + sqrt_delta) / (2.0 * a);

        // Near-to-far: accept the first root whose height lies on the
        // clipped lateral surface.
        let mut t = t1;
        let mut point = local_ray.at(t);
        if t < T_MIN || point.y > 1.0 || point.y < 0.0 {
            t = t2;
            point = local_ray.at(t);
            if t < T_MIN || point.y > 1.0 || point.y < 0.0 {
                return None;
            }
        }

        let mut normal = Vec3::new(point.x, -point.y, point.z).normalize();

        // The disk cap at y = 1 overrides the lateral hit when it is valid
        // and closer.
        if let Some((cap_point, cap_t)) = plane_hit(Vec3::Y, Vec3::Y, &local_ray) {
            if cap_t < t && (cap_point - Vec3::Y).length() <= 1.0 {
                point = cap_point;
                normal = Vec3::Y;
            }
        }

        let world_point = self.transform.point_to_world(point);
        let world_normal = self.transform.normal_to_world(normal);

        Some(Hit {
            point: world_point,
            normal: world_normal,
            distance: world_point.distance(ray.origin()),
            uv: Vec2::ZERO,
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Mat4;

    #[test]
    fn test_cone_lateral_hit() {
        let cone = Cone::new(Transform::identity(), Material::default());
        // Aim at the lateral surface half way up.
        let ray = Ray::new(Vec3::new(0.0, 0.5, -5.0), Vec3::Z);

        let hit = cone.intersect(&ray).unwrap();
        assert!((hit.point.y - 0.5).abs() < 1e-3);
        // Lateral surface radius equals height.
        let radius = (hit.point.x * hit.point.x + hit.point.z * hit.point.z).sqrt();
        assert!((radius - 0.5).abs() < 1e-3);
        // Lateral normal points away from the axis and downward.
        assert!(hit.normal.y < 0.0);
    }

    #[test]
    fn test_cone_miss_above_clip() {
        let cone = Cone::new(Transform::identity(), Material::default());
        let ray = Ray::new(Vec3::new(0.0, 1.5, -5.0), Vec3::Z);
        assert!(cone.intersect(&ray).is_none());
    }

    #[test]
    fn test_cone_cap_hit_from_above() {
        let cone = Cone::new(Transform::identity(), Material::default());
        // Straight down through the open top inside the cap disk.
        let ray = Ray::new(Vec3::new(0.3, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        let hit = cone.intersect(&ray).unwrap();
        assert!((hit.point.y - 1.0).abs() < 1e-3);
        assert!((hit.normal - Vec3::Y).length() < 1e-3);
    }

    #[test]
    fn test_cone_transform_maps_to_world() {
        let transform = Transform::new(
            Mat4::from_translation(Vec3::new(0.0, 0.0, 10.0)) * Mat4::from_scale(Vec3::new(1.0, 2.0, 1.0)),
        );
        let cone = Cone::new(transform, Material::default());

        // The scaled cone spans y ∈ [0, 2] around z = 10.
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Z);
        let hit = cone.intersect(&ray).unwrap();
        assert!((hit.point.y - 1.0).abs() < 1e-3);
        assert!(hit.point.z > 9.0 && hit.point.z < 11.0);
        assert!((hit.normal.length() - 1.0).abs() < 1e-4);
        // World distance, not local: the origin is 10 away along z.
        assert!(hit.distance > 9.0 && hit.distance < 11.0);
    }
}
