//! Cluster validity filtering
//!
//! Rejects clusters that cannot plausibly represent a dominant color: too
//! small, too dark, or too gray. A second pass discards everything when the
//! surviving clusters together cover too few pixels, so a handful of colorful
//! specks on an otherwise monochrome cover doesn't fake a "colorful" verdict.

use crate::config::Tuning;
use crate::models::ColorCluster;

/// Keep only clusters that qualify as dominant-color candidates.
///
/// Returns an empty vec when the summed population of qualifying clusters is
/// below `tuning.min_colored_pixels`.
pub fn retain_candidates(clusters: Vec<ColorCluster>, tuning: &Tuning) -> Vec<ColorCluster> {
    let valid: Vec<ColorCluster> = clusters
        .into_iter()
        .filter(|c| is_candidate(c, tuning))
        .collect();

    let colored_pixels: u32 = valid.iter().map(|c| c.population).sum();
    if colored_pixels < tuning.min_colored_pixels {
        return Vec::new();
    }

    valid
}

fn is_candidate(cluster: &ColorCluster, tuning: &Tuning) -> bool {
    cluster.population > tuning.min_population
        && cluster.avg.perceived_brightness() > tuning.min_brightness
        && cluster.avg.colorfulness() > tuning.min_colorfulness
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;

    fn tuning() -> Tuning {
        Tuning::default()
    }

    #[test]
    fn test_keeps_bright_colorful_cluster() {
        let clusters = vec![
            ColorCluster::new(Rgb::new(200, 40, 40), 5000),
            ColorCluster::new(Rgb::new(40, 40, 200), 4000),
        ];
        let kept = retain_candidates(clusters.clone(), &tuning());
        assert_eq!(kept, clusters);
    }

    #[test]
    fn test_rejects_small_population() {
        let clusters = vec![ColorCluster::new(Rgb::new(200, 40, 40), 999)];
        assert!(retain_candidates(clusters, &tuning()).is_empty());
    }

    #[test]
    fn test_rejects_dark_cluster() {
        // Colorful enough, but brightness is below 0.075
        let clusters = vec![ColorCluster::new(Rgb::new(20, 0, 40), 5000)];
        assert!(retain_candidates(clusters, &tuning()).is_empty());
    }

    #[test]
    fn test_rejects_gray_cluster() {
        // Bright but colorless
        let clusters = vec![ColorCluster::new(Rgb::new(180, 180, 180), 5000)];
        assert!(retain_candidates(clusters, &tuning()).is_empty());
    }

    #[test]
    fn test_colored_pixel_floor_discards_everything() {
        // Individually valid, but together below MIN_COLORED_PIXELS
        let mut t = tuning();
        t.min_population = 100;
        let clusters = vec![
            ColorCluster::new(Rgb::new(200, 40, 40), 300),
            ColorCluster::new(Rgb::new(40, 200, 40), 200),
        ];
        assert!(retain_candidates(clusters, &t).is_empty());
    }
}
