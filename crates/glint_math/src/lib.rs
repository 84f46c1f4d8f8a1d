//! Glint math - vector algebra and rays.
//!
//! Everything here is double precision. Geometry is small enough that the
//! extra width costs nothing and keeps `EPSILON` meaningful at scene scale.

// Re-export glam for convenience
pub use glam;

mod ray;
pub mod vector;

pub use ray::Ray;
pub use vector::{hadamard, normalize, reflect};

/// Three-component vector used for points, directions and colors.
pub type Vec3 = glam::DVec3;

/// Linear RGB color. Channels are nominally 0-1 but are not clamped until
/// final pixel conversion.
pub type Color = Vec3;

/// Threshold below which intersection distances are rejected, and the
/// offset applied to secondary ray origins along the surface normal.
pub const EPSILON: f64 = 1e-6;
