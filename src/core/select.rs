//! Dominant pair selection
//!
//! Turns the ranked candidate list and the border brightness into the
//! pre-normalization color pair. Degenerate images are defined cases here,
//! not errors.

use crate::config::Tuning;
use crate::models::{ColorCluster, DominantColors, Rgb};

/// Pick the foreground/background pair from ranked candidates.
///
/// - No candidates (grayscale image): primary is white, secondary is white
///   dimmed by the border brightness, floored at `min_brightness` so the
///   overlay never collapses to black.
/// - One candidate (monochrome image): both colors are that cluster's
///   average.
/// - Two or more: the top two by rank, brighter one as primary.
pub fn select_pair(
    ranked: &[ColorCluster],
    border_brightness: f64,
    tuning: &Tuning,
) -> DominantColors {
    match ranked {
        [] => {
            let primary = Rgb::WHITE;
            let secondary = primary.scaled(border_brightness.max(tuning.min_brightness));
            DominantColors::new(primary, secondary, border_brightness)
        }
        [only] => DominantColors::new(only.avg, only.avg, border_brightness),
        [first, second, ..] => {
            if first.avg.perceived_brightness() > second.avg.perceived_brightness() {
                DominantColors::new(first.avg, second.avg, border_brightness)
            } else {
                DominantColors::new(second.avg, first.avg, border_brightness)
            }
        }
    }
}
