//! Image tiling for the parallel render loop.
//!
//! Buckets are handed out centre first so the middle of the frame lands
//! before the borders.

use crate::renderer::render_pixel;
use crate::{buffer::color_to_rgb, Camera, Tracer};

/// Default bucket edge length in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// A rectangular tile of the image, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in the render order, 0 is rendered first
    pub order: usize,
}

impl Bucket {
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Image coordinates covered by this bucket, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| (x, y)))
    }

    fn distance_sq_to(&self, cx: f64, cy: f64) -> f64 {
        let dx = self.x as f64 + self.width as f64 / 2.0 - cx;
        let dy = self.y as f64 + self.height as f64 / 2.0 - cy;
        dx * dx + dy * dy
    }
}

/// Tile a `width` x `height` image into buckets of at most `size` pixels
/// per side, ordered by distance from the image centre.
///
/// Edge buckets are trimmed to fit. A size of zero is treated as one.
pub fn generate_buckets(width: u32, height: u32, size: u32) -> Vec<Bucket> {
    let size = size.max(1);
    // (start, length) of each span along one axis
    let spans = move |extent: u32| {
        (0..extent)
            .step_by(size as usize)
            .map(move |start| (start, size.min(extent - start)))
    };

    let mut buckets: Vec<Bucket> = spans(height)
        .flat_map(|(y, h)| {
            spans(width).map(move |(x, w)| Bucket {
                x,
                y,
                width: w,
                height: h,
                order: 0,
            })
        })
        .collect();

    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);
    // Stable, so equidistant buckets stay in row-major order
    buckets.sort_by(|a, b| a.distance_sq_to(cx, cy).total_cmp(&b.distance_sq_to(cx, cy)));
    for (order, bucket) in buckets.iter_mut().enumerate() {
        bucket.order = order;
    }

    buckets
}

/// Pixels traced for one bucket, in the order of [`Bucket::pixels`].
#[derive(Debug, Clone)]
pub struct RenderedBucket {
    pub bucket: Bucket,
    pub pixels: Vec<[u8; 3]>,
}

/// Trace every pixel of `bucket`.
pub fn render_bucket(bucket: &Bucket, camera: &Camera, tracer: &Tracer<'_>) -> RenderedBucket {
    let pixels = bucket
        .pixels()
        .map(|(x, y)| color_to_rgb(render_pixel(camera, tracer, x, y)))
        .collect();

    RenderedBucket {
        bucket: *bucket,
        pixels,
    }
}
