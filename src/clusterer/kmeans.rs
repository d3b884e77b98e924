use rand::Rng;
use tracing::{debug, warn};

use crate::clusterer::{
    centroid::{update_centroids, within_cluster_ss},
    distance::nearest_centroid,
    seeding::kmeans_plus_plus,
    types::{ClusterId, ClusterSolution, IterationTrace, KMeansOptions, Point},
};

/// Partition `points` into `k` clusters, keeping the lowest-WCSS restart.
///
/// Randomness comes from `options.seed` when set, otherwise from OS entropy.
/// Invalid input (no points, `k` outside `1..=n`, ragged rows) yields
/// [`ClusterSolution::degenerate`] instead of an error.
pub fn kmeans(points: &[Point], k: usize, options: &KMeansOptions) -> ClusterSolution {
    let mut rng = options.rng();
    kmeans_with_rng(points, k, options, &mut rng)
}

/// Same as [`kmeans`] but draws from a caller-supplied random source
pub fn kmeans_with_rng<R: Rng + ?Sized>(
    points: &[Point],
    k: usize,
    options: &KMeansOptions,
    rng: &mut R,
) -> ClusterSolution {
    if let Some(reason) = invalid_input(points, k) {
        warn!(n = points.len(), k, reason, "k-means input rejected");
        return ClusterSolution::degenerate();
    }

    let mut best: Option<ClusterSolution> = None;

    for restart in 0..options.restarts.max(1) {
        let candidate = lloyd(points, k, options.max_iterations, rng, None);
        debug!(
            restart,
            k,
            wcss = candidate.wcss,
            iterations = candidate.iterations,
            "k-means restart finished"
        );

        let better = match &best {
            Some(current) => candidate.wcss < current.wcss,
            None => true,
        };
        if better {
            best = Some(candidate);
        }
    }

    best.unwrap_or_else(ClusterSolution::degenerate)
}

/// One k-means++ seeded Lloyd run, reporting every iteration to `trace`.
pub fn kmeans_traced<R: Rng + ?Sized>(
    points: &[Point],
    k: usize,
    max_iterations: usize,
    rng: &mut R,
    trace: &mut Vec<IterationTrace>,
) -> ClusterSolution {
    if let Some(reason) = invalid_input(points, k) {
        warn!(n = points.len(), k, reason, "k-means input rejected");
        return ClusterSolution::degenerate();
    }

    lloyd(points, k, max_iterations, rng, Some(trace))
}

fn invalid_input(points: &[Point], k: usize) -> Option<&'static str> {
    if points.is_empty() {
        return Some("no points");
    }
    if k < 1 || k > points.len() {
        return Some("k outside 1..=n");
    }

    let dim = points[0].len();
    if dim == 0 {
        return Some("zero-dimensional points");
    }
    if points.iter().any(|p| p.len() != dim) {
        return Some("ragged point matrix");
    }

    None
}

fn lloyd<R: Rng + ?Sized>(
    points: &[Point],
    k: usize,
    max_iterations: usize,
    rng: &mut R,
    mut trace: Option<&mut Vec<IterationTrace>>,
) -> ClusterSolution {
    let n = points.len();

    // 1. Seed
    let mut centroids = kmeans_plus_plus(points, k, rng);
    let mut assignments = vec![0; n];
    let mut iterations = 0;

    // At least one assign/update pass so centroids are always member means
    for iteration in 0..max_iterations.max(1) {
        iterations += 1;

        // 2. Assign each point to its nearest centroid
        let changed = assign_points(points, &centroids, &mut assignments);

        // 3. Recompute centroids, reseeding empty clusters
        let (next, reseeded) = update_centroids(points, &assignments, k, rng);
        centroids = next;

        if let Some(trace) = trace.as_mut() {
            let (wcss, _) = within_cluster_ss(points, &centroids, &assignments);
            trace.push(IterationTrace {
                iteration,
                wcss,
                changed,
                reseeded,
            });
        }

        if !changed {
            break; // converged
        }
    }

    let (wcss, cluster_sizes) = within_cluster_ss(points, &centroids, &assignments);

    ClusterSolution {
        assignments,
        centroids,
        wcss,
        cluster_sizes,
        iterations,
    }
}

/// Returns true if any point moved to a different cluster
fn assign_points(points: &[Point], centroids: &[Point], assignments: &mut [ClusterId]) -> bool {
    let mut changed = false;

    for (x, slot) in points.iter().zip(assignments.iter_mut()) {
        let (best, _) = nearest_centroid(x, centroids);
        if *slot != best {
            *slot = best;
            changed = true;
        }
    }

    changed
}
