//! Tuning constants for the dominant color engine
//!
//! The defaults were tuned against a large set of album cover art; they favor
//! picking a visually salient color over the statistically largest region.

use std::time::Duration;

/// Number of palette entries requested from the quantizer
pub const PALETTE_SAMPLE_SIZE: u8 = 10;

/// Pixel sampling stride used by the quantizer (1 = every pixel)
pub const PALETTE_SAMPLE_QUALITY: u8 = 5;

/// Minimum perceived brightness for a cluster to count as a candidate
pub const MIN_BRIGHTNESS: f64 = 0.075;

/// Minimum colorfulness (channel spread) for a cluster to count as a candidate
pub const MIN_COLORFULNESS: f64 = 0.1;

/// Minimum pixel population for a single cluster, in sampled-pixel space
pub const MIN_POPULATION: u32 = 1000;

/// Minimum summed population of all candidate clusters; below this the image
/// is treated as colorless even if small colorful specks exist
pub const MIN_COLORED_PIXELS: u32 = 3000;

/// Lower clamp applied to per-pixel brightness before squaring, so a run of
/// pure-black border pixels cannot zero out the aggregate
pub const BRIGHTNESS_EPSILON: f64 = 0.001;

/// Default wall-clock budget for one full computation (fetch + decode +
/// quantize + resolve)
pub const PIPELINE_TIMEOUT: Duration = Duration::from_secs(10);

/// Engine thresholds, adjustable per cache instance.
///
/// `Default` wires up the tuned constants above.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    pub palette_size: u8,
    pub sample_quality: u8,
    pub min_brightness: f64,
    pub min_colorfulness: f64,
    pub min_population: u32,
    pub min_colored_pixels: u32,
    pub timeout: Duration,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            palette_size: PALETTE_SAMPLE_SIZE,
            sample_quality: PALETTE_SAMPLE_QUALITY,
            min_brightness: MIN_BRIGHTNESS,
            min_colorfulness: MIN_COLORFULNESS,
            min_population: MIN_POPULATION,
            min_colored_pixels: MIN_COLORED_PIXELS,
            timeout: PIPELINE_TIMEOUT,
        }
    }
}
