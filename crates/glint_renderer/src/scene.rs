//! Scene container: primitives plus lights.

use crate::{HitRecord, Light, Primitive, Ray};

/// The set of objects and lights to render.
///
/// Built once before rendering and only read during a render pass, so
/// every pixel can be traced independently.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn Primitive>>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the scene.
    pub fn add_object(&mut self, object: impl Primitive + 'static) {
        self.objects.push(Box::new(object));
        log::debug!("Added object #{}", self.objects.len());
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        log::debug!("Added light at {}", light.position());
        self.lights.push(light);
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Get the number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the nearest intersection along `ray`.
    ///
    /// Linear scan over every primitive; fine for the handful of objects a
    /// scene like this holds.
    pub fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            if let Some(hit) = object.intersect(ray) {
                if closest.map_or(true, |c| hit.t < c.t) {
                    closest = Some(hit);
                }
            }
        }

        closest
    }
}
