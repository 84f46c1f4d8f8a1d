//! Glint renderer - recursive Whitted-style ray tracing.
//!
//! Spheres and planes lit by point lights with Phong shading, hard shadows
//! and bounded mirror reflection. One ray per pixel, no sampling noise, so
//! every render of a scene is bit-for-bit repeatable.

mod error;
mod material;
mod light;
mod hittable;
mod sphere;
mod plane;
mod scene;
mod tracer;
mod camera;
mod buffer;
mod renderer;
mod bucket;

pub use error::{RenderError, RenderResult, SceneError, SceneResult};
pub use material::Material;
pub use light::Light;
pub use hittable::{HitRecord, Primitive};
pub use sphere::Sphere;
pub use plane::Plane;
pub use scene::Scene;
pub use tracer::{sky_gradient, Tracer, DEPTH_LIMIT, MAX_DEPTH};
pub use camera::{Camera, CameraConfig};
pub use buffer::{color_to_rgb, ImageBuffer};
pub use renderer::{render, render_parallel, render_pixel, render_serial, RenderConfig};
pub use bucket::{generate_buckets, render_bucket, Bucket, RenderedBucket, DEFAULT_BUCKET_SIZE};

/// Re-export common math types from glint_math
pub use glint_math::{Color, Ray, Vec3, EPSILON};
