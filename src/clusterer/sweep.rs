use std::ops::RangeInclusive;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::clusterer::{
    kmeans::kmeans_with_rng,
    silhouette::silhouette_with_rng,
    types::{ClusterSolution, KMeansOptions, Point},
};

/// WCSS of the best solution for one k
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElbowPoint {
    pub k: usize,
    pub wcss: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SilhouettePoint {
    pub k: usize,
    pub silhouette: f64,
}

/// Which k values a diagnostic pass evaluates
#[derive(Debug, Clone)]
pub struct SweepPlan {
    /// The k whose solution is reported
    pub k: usize,
    pub elbow: RangeInclusive<usize>,
    /// Kept narrow around `k`; every entry costs a silhouette evaluation
    pub silhouette: RangeInclusive<usize>,
    pub max_sample_points: usize,
}

/// Chosen solution plus the curves used to judge it
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostics {
    pub solution: ClusterSolution,
    pub silhouette: f64,
    pub elbow: Vec<ElbowPoint>,
    pub silhouettes: Vec<SilhouettePoint>,
}

pub fn elbow_curve_with_rng<R: Rng + ?Sized>(
    points: &[Point],
    ks: RangeInclusive<usize>,
    options: &KMeansOptions,
    rng: &mut R,
) -> Vec<ElbowPoint> {
    ks.map(|k| ElbowPoint {
        k,
        wcss: kmeans_with_rng(points, k, options, rng).wcss,
    })
    .collect()
}

pub fn silhouette_curve_with_rng<R: Rng + ?Sized>(
    points: &[Point],
    ks: RangeInclusive<usize>,
    options: &KMeansOptions,
    max_sample_points: usize,
    rng: &mut R,
) -> Vec<SilhouettePoint> {
    ks.map(|k| {
        let solution = kmeans_with_rng(points, k, options, rng);
        SilhouettePoint {
            k,
            silhouette: silhouette_with_rng(points, &solution.assignments, max_sample_points, rng),
        }
    })
    .collect()
}

/// Elbow sweep plus a local silhouette window, reusing the solution for
/// `plan.k` wherever either range covers it.
pub fn diagnose_with_rng<R: Rng + ?Sized>(
    points: &[Point],
    plan: &SweepPlan,
    options: &KMeansOptions,
    rng: &mut R,
) -> Diagnostics {
    let mut elbow = Vec::new();
    let mut chosen: Option<ClusterSolution> = None;

    for k in plan.elbow.clone() {
        let solution = kmeans_with_rng(points, k, options, rng);
        debug!(k, wcss = solution.wcss, "elbow point");
        elbow.push(ElbowPoint {
            k,
            wcss: solution.wcss,
        });
        if k == plan.k {
            chosen = Some(solution);
        }
    }

    let solution = match chosen {
        Some(solution) => solution,
        None => kmeans_with_rng(points, plan.k, options, rng),
    };

    let mut silhouettes = Vec::new();
    for k in plan.silhouette.clone() {
        let score = if k == plan.k {
            silhouette_with_rng(points, &solution.assignments, plan.max_sample_points, rng)
        } else {
            let other = kmeans_with_rng(points, k, options, rng);
            silhouette_with_rng(points, &other.assignments, plan.max_sample_points, rng)
        };
        debug!(k, silhouette = score, "silhouette point");
        silhouettes.push(SilhouettePoint {
            k,
            silhouette: score,
        });
    }

    let silhouette = match silhouettes.iter().find(|p| p.k == plan.k) {
        Some(p) if p.silhouette.is_finite() => p.silhouette,
        _ => silhouette_with_rng(points, &solution.assignments, plan.max_sample_points, rng),
    };

    Diagnostics {
        solution,
        silhouette,
        elbow,
        silhouettes,
    }
}
