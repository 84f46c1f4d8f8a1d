//! Point lights.

use crate::error::{check_coefficient, check_finite, SceneResult};
use glint_math::{Color, Vec3};

/// An infinitesimal point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    position: Vec3,
    color: Color,
    intensity: f64,
}

impl Light {
    /// Create a new point light. `intensity` must be non-negative.
    pub fn new(position: Vec3, color: Color, intensity: f64) -> SceneResult<Self> {
        check_finite("Light position", position)?;
        check_finite("Light color", color)?;
        Ok(Self {
            position,
            color,
            intensity: check_coefficient("intensity", intensity)?,
        })
    }

    /// A white light of unit intensity.
    pub fn white(position: Vec3) -> SceneResult<Self> {
        Self::new(position, Color::ONE, 1.0)
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn intensity(&self) -> f64 {
        self.intensity
    }
}
