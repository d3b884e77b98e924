use rand::Rng;

use crate::clusterer::{distance::squared_distance, types::Point};

/// k-means++ seeding.
///
/// The first centroid is a uniform draw. Every further centroid is drawn with
/// probability proportional to the squared distance from a point to its
/// nearest already-chosen centroid. When every point coincides with a chosen
/// centroid the remaining slots are filled with copies of the first one.
pub fn kmeans_plus_plus<R: Rng + ?Sized>(points: &[Point], k: usize, rng: &mut R) -> Vec<Point> {
    let n = points.len();
    let mut centroids: Vec<Point> = Vec::with_capacity(k);

    centroids.push(points[rng.gen_range(0..n)].clone());

    // Nearest-centroid distance per point, refreshed against the newest centroid only
    let mut distances: Vec<f64> = points
        .iter()
        .map(|x| squared_distance(x, &centroids[0]))
        .collect();

    while centroids.len() < k {
        let total: f64 = distances.iter().sum();

        if total == 0.0 {
            let first = centroids[0].clone();
            centroids.resize(k, first);
            break;
        }

        let chosen = sample_weighted(&distances, total, rng);
        let next = points[chosen].clone();

        for (d, x) in distances.iter_mut().zip(points) {
            let candidate = squared_distance(x, &next);
            if candidate < *d {
                *d = candidate;
            }
        }

        centroids.push(next);
    }

    centroids
}

/// Index drawn proportionally to `weights`. Zero-weight entries are never picked.
fn sample_weighted<R: Rng + ?Sized>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let r = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last_positive = 0;

    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        last_positive = i;
        if r < cumulative {
            return i;
        }
    }

    // Rounding can leave r just above the final cumulative sum
    last_positive
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_weighted_sampling_skips_zero_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let weights = [0.0, 3.0, 0.0, 1.0, 0.0];

        for _ in 0..200 {
            let i = sample_weighted(&weights, 4.0, &mut rng);
            assert!(i == 1 || i == 3, "picked zero-weight index {}", i);
        }
    }

    #[test]
    fn test_seeds_are_distinct_points_when_possible() {
        let points = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut seeds = kmeans_plus_plus(&points, 4, &mut rng);
            seeds.sort_by(|a, b| a[0].total_cmp(&b[0]));
            assert_eq!(seeds, points);
        }
    }

    #[test]
    fn test_identical_points_duplicate_first_seed() {
        let points = vec![vec![5.0, 5.0]; 6];
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let seeds = kmeans_plus_plus(&points, 3, &mut rng);
        assert_eq!(seeds.len(), 3);
        assert!(seeds.iter().all(|c| c == &vec![5.0, 5.0]));
    }
}
