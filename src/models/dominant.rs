//! Quantizer output and the engine's result type

use serde::{Deserialize, Serialize};

use super::Rgb;

/// One color cluster from the quantization step: the cluster's average color
/// and how many (sampled) pixels landed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCluster {
    pub avg: Rgb,
    pub population: u32,
}

impl ColorCluster {
    pub const fn new(avg: Rgb, population: u32) -> Self {
        Self { avg, population }
    }
}

/// The resolved color pair for one image.
///
/// `primary` is the foreground/text color (the brighter of the pair as
/// selected, then normalized for readability), `secondary` the background
/// overlay color. `border_brightness` is the squared-brightness average of
/// the image's edge pixels, in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DominantColors {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub border_brightness: f64,
}

impl DominantColors {
    /// Served whenever no real result is available (empty URL, fetch or
    /// decode failure, timeout). Matches the display layer's all-white
    /// default.
    pub const FALLBACK: DominantColors = DominantColors {
        primary: Rgb::WHITE,
        secondary: Rgb::WHITE,
        border_brightness: 1.0,
    };

    pub const fn new(primary: Rgb, secondary: Rgb, border_brightness: f64) -> Self {
        Self {
            primary,
            secondary,
            border_brightness,
        }
    }
}
