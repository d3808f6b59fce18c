//! The built-in demo scene: a walled room with spheres, cones, a triangle
//! and four lights, plus an optional mesh placed in front of the camera.

use glint_core::{material, Light, Material};
use glint_math::{Mat4, Transform, Vec3};
use glint_renderer::{Cone, Plane, Scene, Sphere, Triangle, TriangleMesh};

/// Ambient illumination of the demo scene.
const AMBIENT: Vec3 = Vec3::new(0.001, 0.001, 0.001);

/// Build the demo scene, optionally inserting a loaded mesh.
pub fn build_scene(mesh: Option<Vec<[Vec3; 3]>>) -> Scene {
    let mut scene = Scene::new().with_ambient(AMBIENT);

    scene.add_object(Sphere::new(
        1.0,
        Vec3::new(1.0, -2.0, 8.0),
        material::blue_specular(),
    ));
    scene.add_object(Sphere::new(
        0.5,
        Vec3::new(-1.0, -2.5, 6.0),
        material::red_specular(),
    ));
    scene.add_object(Sphere::new(
        2.0,
        Vec3::new(-3.0, -1.0, 8.0),
        material::refractive(),
    ));
    scene.add_object(Sphere::new(
        7.0,
        Vec3::new(-6.0, 4.0, 23.0),
        material::textured(),
    ));

    // Tall cone hanging point-down from the ceiling.
    let hanging = Mat4::from_translation(Vec3::new(5.0, 9.0, 14.0))
        * Mat4::from_scale(Vec3::new(3.0, 12.0, 3.0))
        * Mat4::from_rotation_x(180.0_f32.to_radians());
    scene.add_object(Cone::new(Transform::new(hanging), material::yellow_specular()));

    // Small cone leaning against the right wall.
    let leaning = Mat4::from_translation(Vec3::new(6.0, -3.0, 7.0))
        * Mat4::from_rotation_z(3.0_f32.atan())
        * Mat4::from_scale(Vec3::new(1.0, 3.0, 1.0));
    scene.add_object(Cone::new(Transform::new(leaning), material::green_diffuse()));

    scene.add_object(Triangle::new(
        Vec3::new(0.0, 0.0, 6.0),
        Vec3::new(5.0, 5.0, 6.0),
        Vec3::new(5.0, 0.0, 6.0),
        Material::default(),
    ));

    add_room(&mut scene);

    if let Some(triangles) = mesh {
        let placement = Transform::new(Mat4::from_translation(Vec3::new(0.0, 1.3, 3.0)));
        scene.add_object(TriangleMesh::new(triangles, placement, Material::default()));
    }

    scene.add_light(Light::white(Vec3::new(0.0, 26.0, 5.0)));
    scene.add_light(Light::new(Vec3::new(0.0, 1.0, 12.0), Vec3::splat(0.1)));
    scene.add_light(Light::new(Vec3::new(0.0, 5.0, 1.0), Vec3::splat(0.4)));
    scene.add_light(Light::new(Vec3::new(0.0, 3.0, -11.0), Vec3::splat(0.1)));

    scene
}

/// The six planes walling in the demo room, normals facing the camera.
fn add_room(scene: &mut Scene) {
    scene.add_object(Plane::new(
        Vec3::new(0.0, -3.0, 0.0),
        Vec3::Y,
        Material::default(),
    ));
    scene.add_object(Plane::new(
        Vec3::new(0.0, 1.0, 30.0),
        Vec3::new(0.0, 0.0, -1.0),
        material::green_diffuse(),
    ));
    scene.add_object(Plane::new(
        Vec3::new(-15.0, 1.0, 0.0),
        Vec3::X,
        material::red_diffuse(),
    ));
    scene.add_object(Plane::new(
        Vec3::new(15.0, 1.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        material::blue_diffuse(),
    ));
    scene.add_object(Plane::new(
        Vec3::new(0.0, 27.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Material::default(),
    ));
    scene.add_object(Plane::new(
        Vec3::new(0.0, 1.0, -0.01),
        Vec3::Z,
        material::green_diffuse(),
    ));
}
