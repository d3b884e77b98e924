use std::collections::BTreeMap;

use rand::{seq::index, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use crate::clusterer::{
    distance::euclidean_distance,
    types::{ClusterId, Point},
};

/// Upper bound on the points scored per silhouette evaluation
pub const MAX_SILHOUETTE_POINTS: usize = 400;

/// Mean silhouette coefficient of an assignment, in `[-1, 1]`.
///
/// Returns 0 when fewer than two clusters are populated. Datasets larger than
/// `max_sample_points` are scored on a random subset.
pub fn silhouette(points: &[Point], assignments: &[ClusterId], max_sample_points: usize) -> f64 {
    let mut rng = ChaCha8Rng::from_entropy();
    silhouette_with_rng(points, assignments, max_sample_points, &mut rng)
}

pub fn silhouette_with_rng<R: Rng + ?Sized>(
    points: &[Point],
    assignments: &[ClusterId],
    max_sample_points: usize,
    rng: &mut R,
) -> f64 {
    let n = points.len();
    if assignments.len() != n {
        warn!(
            points = n,
            assignments = assignments.len(),
            "silhouette skipped: assignment length mismatch"
        );
        return 0.0;
    }

    let mut clusters: BTreeMap<ClusterId, Vec<usize>> = BTreeMap::new();
    for (i, &c) in assignments.iter().enumerate() {
        clusters.entry(c).or_default().push(i);
    }
    if clusters.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut count = 0usize;

    for i in sample_indices(n, max_sample_points, rng) {
        let xi = &points[i];
        let own = assignments[i];

        // a(i): cohesion within the point's own cluster
        let a = mean_distance(xi, points, &clusters[&own], Some(i));

        // b(i): nearest other cluster on average
        let b = clusters
            .iter()
            .filter(|&(&c, _)| c != own)
            .map(|(_, members)| mean_distance(xi, points, members, None))
            .fold(f64::INFINITY, f64::min);

        if !b.is_finite() {
            continue;
        }

        let max_ab = a.max(b);
        total += if max_ab > 0.0 { (b - a) / max_ab } else { 0.0 };
        count += 1;
    }

    if count > 0 {
        total / count as f64
    } else {
        0.0
    }
}

fn mean_distance(x: &[f64], points: &[Point], members: &[usize], skip: Option<usize>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;

    for &j in members {
        if Some(j) == skip {
            continue;
        }
        sum += euclidean_distance(x, &points[j]);
        count += 1;
    }

    if count > 0 {
        sum / count as f64
    } else {
        0.0
    }
}

fn sample_indices<R: Rng + ?Sized>(n: usize, max_points: usize, rng: &mut R) -> Vec<usize> {
    if n <= max_points {
        return (0..n).collect();
    }
    index::sample(rng, n, max_points).into_vec()
}
