use rand::Rng;

use crate::clusterer::{
    distance::squared_distance,
    types::{ClusterId, Point},
};

pub fn compute_centroid(vectors: &[&[f64]]) -> Point {
    let dim = vectors[0].len();
    let mut out = vec![0.0; dim];

    for v in vectors {
        for i in 0..dim {
            out[i] += v[i];
        }
    }

    let n = vectors.len() as f64;
    for i in 0..dim {
        out[i] /= n;
    }

    out
}

/// Update step: each centroid becomes the mean of its members.
///
/// A cluster left without members is moved onto a uniformly drawn point and
/// counted as having that single member. Returns the new centroids and the
/// number of clusters that had to be reseeded.
pub fn update_centroids<R: Rng + ?Sized>(
    points: &[Point],
    assignments: &[ClusterId],
    k: usize,
    rng: &mut R,
) -> (Vec<Point>, usize) {
    let dim = points[0].len();
    let mut sums = vec![vec![0.0; dim]; k];
    let mut counts = vec![0usize; k];

    for (x, &c) in points.iter().zip(assignments) {
        counts[c] += 1;
        for d in 0..dim {
            sums[c][d] += x[d];
        }
    }

    let mut reseeded = 0;
    for j in 0..k {
        if counts[j] == 0 {
            sums[j] = points[rng.gen_range(0..points.len())].clone();
            counts[j] = 1;
            reseeded += 1;
        } else {
            let n = counts[j] as f64;
            for v in sums[j].iter_mut() {
                *v /= n;
            }
        }
    }

    (sums, reseeded)
}

/// Total squared distance of each point to its assigned centroid, plus the
/// member count per cluster.
pub fn within_cluster_ss(
    points: &[Point],
    centroids: &[Point],
    assignments: &[ClusterId],
) -> (f64, Vec<usize>) {
    let mut sizes = vec![0usize; centroids.len()];
    let mut wcss = 0.0;

    for (x, &c) in points.iter().zip(assignments) {
        sizes[c] += 1;
        wcss += squared_distance(x, &centroids[c]);
    }

    (wcss, sizes)
}
