//! The built-in demo scene: three spheres on a reflective floor.

use std::sync::Arc;

use glint_renderer::{Color, Light, Material, Plane, Scene, SceneResult, Sphere, Vec3};

pub fn build_scene() -> SceneResult<Scene> {
    let mut scene = Scene::new();

    let red_shiny = Material::new(Color::new(0.8, 0.1, 0.1), 0.1, 0.7, 0.5, 32.0, 0.3)?;
    let blue_matte = Material::new(Color::new(0.1, 0.3, 0.8), 0.1, 0.9, 0.1, 8.0, 0.1)?;
    let green_reflective = Material::new(Color::new(0.1, 0.8, 0.1), 0.1, 0.6, 0.8, 64.0, 0.5)?;
    let white_floor = Arc::new(Material::new(Color::new(0.8, 0.8, 0.8), 0.2, 0.8, 0.2, 16.0, 0.2)?);

    scene.add_object(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, red_shiny)?);
    scene.add_object(Sphere::new(Vec3::new(-2.5, 0.7, -1.0), 0.7, blue_matte)?);
    scene.add_object(Sphere::new(Vec3::new(2.0, 0.8, -0.5), 0.8, green_reflective)?);
    scene.add_object(Plane::new(Vec3::ZERO, Vec3::Y, white_floor)?);

    // Key light and a warm fill
    scene.add_light(Light::white(Vec3::new(5.0, 5.0, 5.0))?);
    scene.add_light(Light::new(Vec3::new(-3.0, 3.0, 3.0), Color::new(1.0, 0.9, 0.8), 0.6)?);

    log::debug!("Demo scene: {} objects, {} lights", scene.object_count(), scene.light_count());
    Ok(scene)
}
