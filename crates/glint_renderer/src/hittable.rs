//! Primitive trait and HitRecord for ray-object intersection.

use crate::{Material, Ray};
use glint_math::Vec3;

/// Record of a ray-object intersection.
///
/// Transient: produced by an intersection test and consumed by the shader
/// straight away.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs, always >= EPSILON
    pub t: f64,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Material of the primitive that was hit
    pub material: &'a Material,
}

/// Trait for geometry that can be hit by rays.
pub trait Primitive: Send + Sync {
    /// Intersect `ray` with this primitive.
    ///
    /// Returns the nearest hit with `t >= EPSILON`, or `None` on a miss.
    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>>;
}
