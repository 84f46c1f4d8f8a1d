//! Recursive Whitted-style tracer.
//!
//! Local illumination is Phong (ambient, diffuse, specular) with hard
//! shadows from point lights. Mirror reflection recurses up to a fixed
//! depth.
//!
//! Secondary rays start at `point + normal * EPSILON`. At grazing angles
//! that fixed offset can still self-shadow or leak light.

use crate::{HitRecord, Light, Scene};
use glint_math::{hadamard, normalize, reflect, Color, Ray, Vec3, EPSILON};

/// Default cap on reflection recursion depth.
pub const MAX_DEPTH: u32 = 3;

/// Largest depth a tracer accepts. Recursion runs on the native stack.
pub const DEPTH_LIMIT: u32 = 16;

/// Traces rays through a scene as seen from a fixed eye position.
///
/// The eye is needed for the specular view vector. The tracer only
/// borrows the scene, so it is cheap to share across worker threads.
#[derive(Clone, Copy)]
pub struct Tracer<'s> {
    scene: &'s Scene,
    eye: Vec3,
    max_depth: u32,
}

impl<'s> Tracer<'s> {
    /// Create a tracer with the default depth limit.
    pub fn new(scene: &'s Scene, eye: Vec3) -> Self {
        Self {
            scene,
            eye,
            max_depth: MAX_DEPTH,
        }
    }

    /// Override the recursion limit, clamped to [`DEPTH_LIMIT`].
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth.min(DEPTH_LIMIT);
        self
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Compute the color seen along `ray`.
    ///
    /// Camera rays start at depth 0. The result is linear and unclamped.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        if depth >= self.max_depth {
            return Color::ZERO;
        }

        match self.scene.intersect(ray) {
            Some(hit) => self.shade(ray, &hit, depth),
            None => sky_gradient(ray.direction()),
        }
    }

    /// Shade a hit: ambient, every light's direct contribution, then the
    /// reflected ray.
    fn shade(&self, ray: &Ray, hit: &HitRecord<'_>, depth: u32) -> Color {
        let mat = hit.material;
        let mut color = mat.color() * mat.ambient();

        for light in self.scene.lights() {
            color += self.direct_light(hit, light);
        }

        if mat.is_reflective() && depth < self.max_depth {
            let reflected = Ray::new(offset_origin(hit), reflect(ray.direction(), hit.normal));
            color += self.trace(&reflected, depth + 1) * mat.reflectivity();
        }

        color
    }

    /// Diffuse plus specular contribution of one light, or zero when the
    /// light is occluded.
    fn direct_light(&self, hit: &HitRecord<'_>, light: &Light) -> Color {
        let to_light = light.position() - hit.point;
        let light_distance = to_light.length();
        let light_dir = normalize(to_light);

        if self.is_occluded(hit, light_dir, light_distance) {
            return Color::ZERO;
        }

        let mat = hit.material;

        let diffuse_intensity = hit.normal.dot(light_dir).max(0.0);
        let diffuse = mat.color() * (mat.diffuse() * diffuse_intensity * light.intensity());

        let reflect_dir = reflect(light_dir, hit.normal);
        let view_dir = normalize(self.eye - hit.point);
        let spec_intensity = view_dir.dot(reflect_dir).max(0.0).powf(mat.shininess());
        let specular = light.color() * (mat.specular() * spec_intensity * light.intensity());

        hadamard(diffuse, light.color()) + specular
    }

    /// Shadow test: anything between the hit point and the light blocks it.
    fn is_occluded(&self, hit: &HitRecord<'_>, light_dir: Vec3, light_distance: f64) -> bool {
        let shadow_ray = Ray::new(offset_origin(hit), light_dir);
        self.scene
            .intersect(&shadow_ray)
            .is_some_and(|blocker| blocker.t < light_distance)
    }
}

/// Start point for secondary rays, nudged off the surface.
#[inline]
fn offset_origin(hit: &HitRecord<'_>) -> Vec3 {
    hit.point + hit.normal * EPSILON
}

/// Vertical sky gradient for rays that escape the scene: white looking
/// straight down, sky blue looking straight up.
pub fn sky_gradient(direction: Vec3) -> Color {
    let a = 0.5 * (normalize(direction).y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}
