//! Render loops.
//!
//! One deterministic ray per pixel, traced from depth 0 and clamped to
//! 8 bits. `render_serial` walks rows in order; `render_parallel` splits
//! the image into buckets on the rayon pool and assembles them at the end.
//! Both produce identical pixels.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bucket::{generate_buckets, render_bucket, RenderedBucket, DEFAULT_BUCKET_SIZE};
use crate::buffer::{color_to_rgb, ImageBuffer};
use crate::{
    Camera, CameraConfig, Color, RenderError, RenderResult, Scene, Tracer, DEPTH_LIMIT, MAX_DEPTH,
};

/// Rows between progress reports in the serial loop.
const PROGRESS_ROWS: u32 = 5;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum reflection recursion depth
    pub max_depth: u32,
    /// Bucket edge length in pixels for parallel rendering
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Reject a recursion depth above [`DEPTH_LIMIT`].
    pub fn validate(&self) -> RenderResult<()> {
        if self.max_depth > DEPTH_LIMIT {
            return Err(RenderError::InvalidDepth {
                depth: self.max_depth,
                limit: DEPTH_LIMIT,
            });
        }
        Ok(())
    }
}

/// Trace the camera ray through pixel (x, y).
#[inline]
pub fn render_pixel(camera: &Camera, tracer: &Tracer<'_>, x: u32, y: u32) -> Color {
    tracer.trace(&camera.ray_for_pixel(x, y), 0)
}

/// Render `scene` with default settings.
pub fn render(scene: &Scene, camera_config: &CameraConfig) -> RenderResult<ImageBuffer> {
    let camera = Camera::new(camera_config)?;
    render_serial(scene, &camera, &RenderConfig::default())
}

/// Render the entire scene on the calling thread.
pub fn render_serial(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    config.validate()?;
    log_start(scene, camera);
    let start = Instant::now();

    let tracer = Tracer::new(scene, camera.position()).with_max_depth(config.max_depth);
    let mut image = ImageBuffer::new(camera.width(), camera.height());

    for y in 0..camera.height() {
        for x in 0..camera.width() {
            let color = render_pixel(camera, &tracer, x, y);
            image.set(x, y, color_to_rgb(color));
        }

        if y % PROGRESS_ROWS == 0 {
            log::debug!("Rendering: {:.1}%", y as f64 / camera.height() as f64 * 100.0);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

/// Render the scene in buckets on the rayon thread pool.
///
/// `cancel` is polled before each bucket starts. Once it is raised no new
/// buckets begin and the call returns [`RenderError::Cancelled`].
pub fn render_parallel(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    cancel: &AtomicBool,
) -> RenderResult<ImageBuffer> {
    config.validate()?;
    if config.bucket_size == 0 {
        return Err(RenderError::InvalidBucketSize);
    }

    log_start(scene, camera);
    let start = Instant::now();

    let tracer = Tracer::new(scene, camera.position()).with_max_depth(config.max_depth);
    let buckets = generate_buckets(camera.width(), camera.height(), config.bucket_size);
    let total = buckets.len();
    let done = AtomicUsize::new(0);

    let results: Vec<RenderedBucket> = buckets
        .par_iter()
        .map(|bucket| {
            if cancel.load(Ordering::Relaxed) {
                return Err(RenderError::Cancelled);
            }
            let result = render_bucket(bucket, camera, &tracer);
            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            log::debug!("Bucket {}/{} done", finished, total);
            Ok(result)
        })
        .collect::<RenderResult<_>>()?;

    let mut image = ImageBuffer::new(camera.width(), camera.height());
    for result in &results {
        write_bucket(&mut image, result);
    }

    log::info!("Rendered {} buckets in {:?}", total, start.elapsed());
    Ok(image)
}

/// Copy a finished bucket into its region of the image.
fn write_bucket(image: &mut ImageBuffer, result: &RenderedBucket) {
    for ((x, y), rgb) in result.bucket.pixels().zip(&result.pixels) {
        image.set(x, y, *rgb);
    }
}

fn log_start(scene: &Scene, camera: &Camera) {
    log::info!(
        "Rendering {}x{} ({} objects, {} lights)",
        camera.width(),
        camera.height(),
        scene.object_count(),
        scene.light_count()
    );
}
