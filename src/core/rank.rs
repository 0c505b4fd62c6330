//! Cluster dominance ranking
//!
//! Raw population alone favors large dark regions (letterboxing, vignettes);
//! weighting by squared brightness biases the ordering toward visually
//! salient regions without ignoring size.

use crate::models::ColorCluster;

/// Sort clusters most-dominant first by `population * brightness^2`.
pub fn rank_clusters(mut clusters: Vec<ColorCluster>) -> Vec<ColorCluster> {
    clusters.sort_by(|a, b| weighted_population(b).total_cmp(&weighted_population(a)));
    clusters
}

fn weighted_population(cluster: &ColorCluster) -> f64 {
    let brightness = cluster.avg.perceived_brightness();
    cluster.population as f64 * brightness * brightness
}
