use crate::clusterer::types::{ClusterId, Point};

pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    let mut sum = 0.0;

    for i in 0..a.len() {
        let d = a[i] - b[i];
        sum += d * d;
    }

    sum
}

pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    squared_distance(a, b).sqrt()
}

/// Closest centroid by squared distance. Ties go to the lowest index.
pub fn nearest_centroid(point: &[f64], centroids: &[Point]) -> (ClusterId, f64) {
    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;

    for (j, centroid) in centroids.iter().enumerate() {
        let d = squared_distance(point, centroid);
        if d < best_dist {
            best_dist = d;
            best_idx = j;
        }
    }

    (best_idx, best_dist)
}
