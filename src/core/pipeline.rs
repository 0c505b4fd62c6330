//! Pure composition of the decision engine
//!
//! Everything past decode/quantize is deterministic and side-effect free, so
//! it lives here as one function over plain values. The cache layer feeds it
//! the quantizer's clusters and the decoded pixels.

use tracing::debug;

use crate::config::Tuning;
use crate::core::{border, filter, normalize, rank, select};
use crate::models::{ColorCluster, DominantColors, PixelGrid};

/// Resolve the final color pair from raw clusters and decoded pixels.
pub fn resolve_colors(
    clusters: Vec<ColorCluster>,
    pixels: &PixelGrid,
    tuning: &Tuning,
) -> DominantColors {
    let candidates = filter::retain_candidates(clusters, tuning);
    let ranked = rank::rank_clusters(candidates);
    let border_brightness = border::border_brightness(pixels);

    debug!(
        candidates = ranked.len(),
        border_brightness, "resolving dominant colors"
    );

    let pair = select::select_pair(&ranked, border_brightness, tuning);
    normalize::normalize_for_readability(pair)
}
