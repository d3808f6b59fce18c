//! Whitted shading: Phong local illumination plus recursive reflection and
//! refraction with Fresnel weighting.

use glint_math::{Ray, Vec3};

use crate::object::Hit;
use crate::scene::Scene;

/// Floor on the light distance; keeps the inverse-square falloff finite for
/// surfaces right next to a light.
const MIN_LIGHT_DISTANCE: f32 = 0.1;

/// Tone curve parameters: gamma and gain.
const TONE_GAMMA: f32 = 0.5;
const TONE_GAIN: f32 = 12.0;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector at a surface with relative index `eta`.
///
/// Returns `None` on total internal reflection, so callers never see a
/// degenerate direction.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta: f32) -> Option<Vec3> {
    let cos_i = n.dot(v);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        None
    } else {
        Some((eta * v - (eta * cos_i + k.sqrt()) * n).normalize())
    }
}

/// Phong local illumination at a hit point.
///
/// `view_direction` is the unit vector from the point toward the viewer.
/// Every light is attenuated by inverse-square falloff and zeroed when a
/// shadow ray strikes any primitive strictly between the surface and the
/// light. Ambient is added unconditionally; the result is clamped to [0, 1].
pub fn phong(scene: &Scene, hit: &Hit, view_direction: Vec3) -> Vec3 {
    let material = hit.material;
    let mut color = Vec3::ZERO;

    for light in scene.lights() {
        let light_direction = (light.position - hit.point).normalize();
        let reflected = reflect(-light_direction, hit.normal);

        let n_dot_l = hit.normal.dot(light_direction).clamp(0.0, 1.0);
        let v_dot_r = view_direction.dot(reflected).clamp(0.0, 1.0);

        let diffuse = material.diffuse_at(hit.uv) * n_dot_l;
        let specular = material.specular * v_dot_r.powf(material.shininess);

        let light_distance = hit.point.distance(light.position);
        let shadow_ray = Ray::new(hit.point, light_direction);
        if !scene.occluded(&shadow_ray, light_distance) {
            let r = light_distance.max(MIN_LIGHT_DISTANCE);
            color += light.color * (diffuse + specular) / (r * r);
        }
    }

    color += scene.ambient() * material.ambient;
    color.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Trace a ray through the scene to the given recursion depth.
///
/// `outside` tracks which side of a dielectric boundary the ray travels on;
/// primary rays start with `outside = true`. Depth 0 is terminal: the result
/// is black regardless of scene content.
pub fn trace_ray(scene: &Scene, ray: &Ray, depth: u32, outside: bool) -> Vec3 {
    if depth == 0 {
        return Vec3::ZERO;
    }
    let hit = match scene.nearest_hit(ray) {
        Some(hit) => hit,
        None => return Vec3::ZERO,
    };
    let material = hit.material;

    let local = phong(scene, &hit, -ray.direction());

    let mut transmitted = Vec3::ZERO;
    if material.refractive {
        let index = material.refractive_index;
        // Relative indices swap when the ray travels inside the medium, and
        // refraction is computed against the flipped normal.
        let (n1, n2, refraction_normal, eta) = if outside {
            (1.0, index, hit.normal, 1.0 / index)
        } else {
            (index, 1.0, -hit.normal, index)
        };

        if let Some(direction) = refract(ray.direction(), refraction_normal, eta) {
            let cos_incident = (-ray.direction()).dot(hit.normal);
            let cos_transmitted = direction.dot(-hit.normal);

            // Two-polarization Fresnel reflectance.
            let parallel = (n1 * cos_incident - n2 * cos_transmitted)
                / (n1 * cos_incident + n2 * cos_transmitted);
            let perpendicular = (n1 * cos_transmitted - n2 * cos_incident)
                / (n1 * cos_transmitted + n2 * cos_incident);
            let reflectance = 0.5 * (parallel * parallel + perpendicular * perpendicular);

            let refracted = Ray::new(hit.point, direction);
            transmitted = ((1.0 - reflectance) * trace_ray(scene, &refracted, depth - 1, !outside))
                .clamp(Vec3::ZERO, Vec3::ONE);
        }
        // Total internal reflection leaves the transmitted term at zero.
    }

    let mut reflected = Vec3::ZERO;
    if material.reflectivity > 0.0 {
        let reflection = Ray::new(hit.point, reflect(ray.direction(), hit.normal));
        reflected = (material.reflectivity * trace_ray(scene, &reflection, depth - 1, outside))
            .clamp(Vec3::ZERO, Vec3::ONE);
    }

    (local + reflected + transmitted).clamp(Vec3::ZERO, Vec3::ONE)
}

/// Fixed gamma/gain tone curve mapping radiance into a displayable color.
///
/// Applied once per traced sample, outside the recursion.
pub fn tone_map(color: Vec3) -> Vec3 {
    (TONE_GAIN * color.powf(TONE_GAMMA)).clamp(Vec3::ZERO, Vec3::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Sphere;
    use glint_core::{material, Light, Material};

    fn lit_sphere_scene(light: Light) -> Scene {
        let mut scene = Scene::new();
        scene.add_object(Sphere::new(
            1.0,
            Vec3::new(0.0, 0.0, 5.0),
            material::green_diffuse(),
        ));
        scene.add_light(light);
        scene
    }

    #[test]
    fn test_depth_zero_is_black() {
        let scene = lit_sphere_scene(Light::white(Vec3::ZERO));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(trace_ray(&scene, &ray, 0, true), Vec3::ZERO);
    }

    #[test]
    fn test_miss_is_black() {
        let scene = lit_sphere_scene(Light::white(Vec3::ZERO));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(trace_ray(&scene, &ray, 3, true), Vec3::ZERO);
    }

    #[test]
    fn test_brightness_monotonic_in_light_intensity() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let position = Vec3::new(0.0, 0.0, 0.0);

        let dim = trace_ray(
            &lit_sphere_scene(Light::new(position, Vec3::splat(0.5))),
            &ray,
            3,
            true,
        );
        let bright = trace_ray(
            &lit_sphere_scene(Light::new(position, Vec3::splat(2.0))),
            &ray,
            3,
            true,
        );

        assert!(bright.x >= dim.x && bright.y >= dim.y && bright.z >= dim.z);
        assert!(bright.y > dim.y);
    }

    #[test]
    fn test_brightness_monotonic_in_light_distance() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let near = trace_ray(
            &lit_sphere_scene(Light::white(Vec3::new(0.0, 0.0, 2.0))),
            &ray,
            3,
            true,
        );
        let far = trace_ray(
            &lit_sphere_scene(Light::white(Vec3::new(0.0, 0.0, -6.0))),
            &ray,
            3,
            true,
        );

        assert!(near.x >= far.x && near.y >= far.y && near.z >= far.z);
        assert!(near.y > far.y);
    }

    #[test]
    fn test_shadowed_light_contributes_nothing() {
        let mut scene = lit_sphere_scene(Light::white(Vec3::new(0.0, 0.0, -10.0)));
        // Occluder between the light and the shaded sphere.
        scene.add_object(Sphere::new(
            0.5,
            Vec3::new(0.0, 0.0, -2.0),
            Material::default(),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let shaded = trace_ray(&scene, &ray, 3, true);

        // Only the ambient term remains, and the scene has no ambient light.
        assert_eq!(shaded, Vec3::ZERO);
    }

    #[test]
    fn test_reflect_mirrors_about_normal() {
        let reflected = reflect(Vec3::new(1.0, -1.0, 0.0).normalize(), Vec3::Y);
        assert!((reflected - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-6);
    }

    #[test]
    fn test_refract_straight_through_at_normal_incidence() {
        let v = Vec3::new(0.0, -1.0, 0.0);
        let refracted = refract(v, Vec3::Y, 1.0 / 1.5).unwrap();
        assert!((refracted - v).length() < 1e-6);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Grazing exit from a dense medium: eta > 1 with a shallow angle.
        let v = Vec3::new(0.9, -0.1, 0.0).normalize();
        assert!(refract(v, Vec3::Y, 2.0).is_none());
    }

    #[test]
    fn test_refract_bends_toward_normal_entering_dense_medium() {
        let v = Vec3::new(1.0, -1.0, 0.0).normalize();
        let refracted = refract(v, Vec3::Y, 1.0 / 1.5).unwrap();
        // Entering a denser medium bends the ray toward the (flipped) normal:
        // the tangential component shrinks.
        assert!(refracted.x.abs() < v.x.abs());
        assert!(refracted.y < 0.0);
        assert!((refracted.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_tone_map_clamps_and_lifts() {
        assert_eq!(tone_map(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(tone_map(Vec3::ONE), Vec3::ONE);
        // The gain saturates mid-range radiance.
        assert_eq!(tone_map(Vec3::splat(0.25)), Vec3::ONE);
        let tiny = tone_map(Vec3::splat(1e-6));
        assert!(tiny.x > 0.0 && tiny.x < 1.0);
    }
}
