//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    error::{check_finite, SceneError, SceneResult},
    hittable::{HitRecord, Primitive},
    Material, Ray,
};
use glint_math::{normalize, Vec3, EPSILON};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vec3, radius: f64, material: impl Into<Arc<Material>>) -> SceneResult<Self> {
        check_finite("Sphere center", center)?;
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material: material.into(),
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Primitive for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Near root first; fall back to the far root when the origin is inside
        let mut t = (-b - sqrtd) / (2.0 * a);
        if t < EPSILON {
            t = (-b + sqrtd) / (2.0 * a);
            if t < EPSILON {
                return None;
            }
        }

        let point = ray.at(t);
        Some(HitRecord {
            t,
            point,
            normal: normalize(point - self.center),
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Color;

    fn grey() -> Material {
        Material::matte(Color::new(0.5, 0.5, 0.5)).unwrap()
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.intersect(&ray).expect("ray through the center should hit");
        assert!((rec.t - 0.5).abs() < 1e-9); // Should hit at t=0.5
        assert!((rec.point - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-9);
        assert!((rec.normal - Vec3::Z).length() < 1e-9);
    }

    #[test]
    fn test_sphere_hit_distance_to_near_surface() {
        let sphere = Sphere::new(Vec3::new(3.0, 1.0, -10.0), 2.0, grey()).unwrap();
        let origin = Vec3::new(-1.0, 4.0, 2.0);
        let to_center = sphere.center() - origin;
        let ray = Ray::new(origin, normalize(to_center));

        let rec = sphere.intersect(&ray).unwrap();
        assert!((rec.t - (to_center.length() - 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey()).unwrap();

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.intersect(&ray).is_none());

        // Ray passing beside the sphere (negative discriminant)
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, grey()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_from_inside_uses_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, grey()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.intersect(&ray).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-9);
        // Outward normal, not flipped toward the ray
        assert!((rec.normal - Vec3::X).length() < 1e-9);
    }

    #[test]
    fn test_sphere_normal_is_unit() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, -8.0), 3.0, grey()).unwrap();
        let ray = Ray::new(Vec3::ZERO, normalize(Vec3::new(0.2, 0.3, -1.0)));

        let rec = sphere.intersect(&ray).unwrap();
        assert!((rec.normal.length() - 1.0).abs() < 1e-9);
        assert!(rec.t >= EPSILON);
    }

    #[test]
    fn test_sphere_accessors() {
        let sphere = Sphere::new(Vec3::new(1.0, -2.0, 3.0), 0.25, grey()).unwrap();
        assert_eq!(sphere.center(), Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(sphere.radius(), 0.25);
    }

    #[test]
    fn test_sphere_origin_on_surface_misses() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, grey()).unwrap();

        // Starting exactly on the surface and heading outward: both roots are
        // at or behind t = 0 and get rejected by EPSILON
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert!(sphere.intersect(&ray).is_none());

        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), normalize(Vec3::new(1.0, 0.7, -0.3)));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_origin_on_surface_inward_hits_far_side() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, grey()).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), -Vec3::Y);

        let rec = sphere.intersect(&ray).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_sphere_rejects_bad_radius() {
        let zero = Sphere::new(Vec3::ZERO, 0.0, grey()).unwrap_err();
        assert_eq!(zero, SceneError::InvalidRadius(0.0));
        let negative = Sphere::new(Vec3::ZERO, -1.0, grey()).unwrap_err();
        assert_eq!(negative, SceneError::InvalidRadius(-1.0));
        assert!(Sphere::new(Vec3::ZERO, f64::INFINITY, grey()).is_err());
    }

    #[test]
    fn test_sphere_shares_material() {
        let mat = Arc::new(grey());
        let a = Sphere::new(Vec3::ZERO, 1.0, Arc::clone(&mat)).unwrap();
        let b = Sphere::new(Vec3::X * 3.0, 1.0, Arc::clone(&mat)).unwrap();
        assert!(std::ptr::eq(a.material(), b.material()));
    }
}
