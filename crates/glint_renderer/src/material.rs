//! Phong surface description.

use crate::error::{check_coefficient, check_finite, SceneError, SceneResult};
use glint_math::Color;

/// Reflectance properties of a surface.
///
/// Immutable once built. Primitives hold it behind an `Arc` so several
/// objects can share one material, and hit records borrow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    color: Color,
    ambient: f64,
    diffuse: f64,
    specular: f64,
    shininess: f64,
    reflectivity: f64,
}

impl Material {
    /// Create a new material.
    ///
    /// - `color`: base color, linear RGB
    /// - `ambient`, `diffuse`, `specular`: Phong weights, non-negative
    /// - `shininess`: specular exponent, non-negative
    /// - `reflectivity`: mirror contribution, within [0, 1]
    pub fn new(
        color: Color,
        ambient: f64,
        diffuse: f64,
        specular: f64,
        shininess: f64,
        reflectivity: f64,
    ) -> SceneResult<Self> {
        check_finite("Material color", color)?;
        if !(0.0..=1.0).contains(&reflectivity) {
            return Err(SceneError::InvalidReflectivity(reflectivity));
        }

        Ok(Self {
            color,
            ambient: check_coefficient("ambient", ambient)?,
            diffuse: check_coefficient("diffuse", diffuse)?,
            specular: check_coefficient("specular", specular)?,
            shininess: check_coefficient("shininess", shininess)?,
            reflectivity,
        })
    }

    /// A purely diffuse material with a small ambient term and no highlight.
    pub fn matte(color: Color) -> SceneResult<Self> {
        Self::new(color, 0.1, 0.9, 0.0, 1.0, 0.0)
    }

    /// A perfect mirror: no local shading, everything comes from reflection.
    pub fn mirror() -> Self {
        Self {
            color: Color::ZERO,
            ambient: 0.0,
            diffuse: 0.0,
            specular: 0.0,
            shininess: 1.0,
            reflectivity: 1.0,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    #[inline]
    pub fn diffuse(&self) -> f64 {
        self.diffuse
    }

    #[inline]
    pub fn specular(&self) -> f64 {
        self.specular
    }

    #[inline]
    pub fn shininess(&self) -> f64 {
        self.shininess
    }

    #[inline]
    pub fn reflectivity(&self) -> f64 {
        self.reflectivity
    }

    /// True when the tracer should spawn a reflection ray for this surface.
    #[inline]
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }
}
