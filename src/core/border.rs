//! Border brightness estimation
//!
//! Samples pixels along the image edges and averages their squared perceived
//! brightness. Squaring emphasizes bright edges over dark ones, matching the
//! ranking bias, and the epsilon clamp keeps a run of pure-black pixels from
//! zeroing the aggregate.

use crate::config::BRIGHTNESS_EPSILON;
use crate::models::PixelGrid;

/// Average squared edge brightness, in [0, 1].
///
/// The sampling stride is `width / 10` (floored at 1 so 1xN and Nx1 images
/// work) and is used for both the horizontal and vertical edges.
pub fn border_brightness(pixels: &PixelGrid) -> f64 {
    let stride = (pixels.width() / 10).max(1);

    let mut acc = 0.0;
    let mut samples = 0u64;

    for x in (0..pixels.width()).step_by(stride as usize) {
        acc += squared_brightness_at(pixels, x, 0);
        acc += squared_brightness_at(pixels, x, pixels.height() - 1);
        samples += 2;
    }

    for y in (0..pixels.height()).step_by(stride as usize) {
        acc += squared_brightness_at(pixels, 0, y);
        acc += squared_brightness_at(pixels, pixels.width() - 1, y);
        samples += 2;
    }

    acc / samples as f64
}

fn squared_brightness_at(pixels: &PixelGrid, x: u32, y: u32) -> f64 {
    let brightness = pixels
        .get(x, y)
        .perceived_brightness()
        .max(BRIGHTNESS_EPSILON);
    brightness * brightness
}
