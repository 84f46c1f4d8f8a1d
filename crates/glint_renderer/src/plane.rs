//! Infinite plane primitive.

use std::sync::Arc;

use crate::{
    error::{check_finite, SceneError, SceneResult},
    hittable::{HitRecord, Primitive},
    Material, Ray,
};
use glint_math::{normalize, Vec3, EPSILON};

/// An infinite plane through `point` with surface normal `normal`.
///
/// The stored normal is returned for every hit, including hits from behind.
/// Back faces are not flipped toward the incoming ray.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. `normal` is normalized here and must not be zero.
    pub fn new(point: Vec3, normal: Vec3, material: impl Into<Arc<Material>>) -> SceneResult<Self> {
        check_finite("Plane point", point)?;
        check_finite("Plane normal", normal)?;
        let normal = normalize(normal);
        if normal == Vec3::ZERO {
            return Err(SceneError::DegenerateNormal);
        }

        Ok(Self {
            point,
            normal,
            material: material.into(),
        })
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Primitive for Plane {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let denom = self.normal.dot(ray.direction());
        // Parallel to the plane
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if t < EPSILON {
            return None;
        }

        Some(HitRecord {
            t,
            point: ray.at(t),
            normal: self.normal,
            material: &self.material,
        })
    }
}
