//! Pinhole camera for primary ray generation.
//!
//! The camera sits at a fixed position and looks down -Z with +Y up.
//! There is no look-at transform.

use crate::{RenderError, RenderResult};
use glint_math::{normalize, Ray, Vec3};
use serde::{Deserialize, Serialize};

/// User-facing camera settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Vertical field of view in degrees
    pub vfov: f64,
    /// Camera position in world space
    pub position: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            vfov: 60.0,
            position: Vec3::new(0.0, 2.0, 10.0),
        }
    }
}

impl CameraConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set vertical field of view in degrees.
    pub fn with_vfov(mut self, vfov: f64) -> Self {
        self.vfov = vfov;
        self
    }
}

/// Validated camera with cached projection terms.
#[derive(Debug, Clone)]
pub struct Camera {
    width: u32,
    height: u32,
    position: Vec3,
    aspect_ratio: f64,
    tan_half_fov: f64,
}

impl Camera {
    /// Build a camera from its settings.
    pub fn new(config: &CameraConfig) -> RenderResult<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(RenderError::InvalidResolution {
                width: config.width,
                height: config.height,
            });
        }
        if !(config.vfov > 0.0 && config.vfov < 180.0) {
            return Err(RenderError::InvalidFov(config.vfov));
        }

        Ok(Self {
            width: config.width,
            height: config.height,
            position: config.position,
            aspect_ratio: config.width as f64 / config.height as f64,
            tan_half_fov: (config.vfov.to_radians() / 2.0).tan(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Generate the ray through the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        let ndc_x = 2.0 * (x as f64 + 0.5) / self.width as f64 - 1.0;
        let ndc_y = 1.0 - 2.0 * (y as f64 + 0.5) / self.height as f64;
        let px = ndc_x * self.tan_half_fov * self.aspect_ratio;
        let py = ndc_y * self.tan_half_fov;

        Ray::new(self.position, normalize(Vec3::new(px, py, -1.0)))
    }
}
