//! Readability normalization
//!
//! The primary color doubles as the text color, so it is brightened to its
//! maximum before display: every channel scales by `255 / max_channel`,
//! keeping the hue ratios while guaranteeing full intensity. The secondary
//! color stays untouched; it was chosen as a background overlay.

use crate::models::{DominantColors, Rgb};

/// Brighten the primary color to full intensity.
///
/// Idempotent: once the max channel is 255 the scale factor is 1. A pure
/// black primary (which selection cannot produce, but stub quantizers can)
/// is returned unchanged.
pub fn normalize_for_readability(colors: DominantColors) -> DominantColors {
    DominantColors::new(
        brighten_to_full(colors.primary),
        colors.secondary,
        colors.border_brightness,
    )
}

fn brighten_to_full(color: Rgb) -> Rgb {
    let max = color.r.max(color.g).max(color.b);
    if max == 0 {
        return color;
    }
    color.scaled(255.0 / max as f64)
}
