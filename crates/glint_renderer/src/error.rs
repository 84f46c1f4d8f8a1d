//! Error types for scene construction and rendering.

use thiserror::Error;

/// Errors raised while building scene objects.
///
/// These are caller contract violations caught at construction time, so the
/// trace recursion never has to deal with malformed geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("Plane normal has zero length")]
    DegenerateNormal,

    #[error("{name} must be non-negative and finite, got {value}")]
    InvalidCoefficient { name: &'static str, value: f64 },

    #[error("Reflectivity must be within [0, 1], got {0}")]
    InvalidReflectivity(f64),

    #[error("{name} has a non-finite component")]
    NonFinite { name: &'static str },
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors raised by the render loop and image output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Field of view must be between 0 and 180 degrees, got {0}")]
    InvalidFov(f64),

    #[error("Max depth {depth} exceeds the limit of {limit}")]
    InvalidDepth { depth: u32, limit: u32 },

    #[error("Bucket size must be at least one pixel")]
    InvalidBucketSize,

    #[error("Render cancelled")]
    Cancelled,

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Reject non-finite vectors with a named error.
pub(crate) fn check_finite(name: &'static str, v: glint_math::Vec3) -> SceneResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(SceneError::NonFinite { name })
    }
}

/// Reject negative or non-finite scalars with a named error.
pub(crate) fn check_coefficient(name: &'static str, value: f64) -> SceneResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SceneError::InvalidCoefficient { name, value })
    }
}
