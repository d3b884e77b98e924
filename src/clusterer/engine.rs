use std::ops::RangeInclusive;

use crate::clusterer::{
    kmeans::kmeans_with_rng,
    silhouette::{silhouette_with_rng, MAX_SILHOUETTE_POINTS},
    sweep::{diagnose_with_rng, elbow_curve_with_rng, Diagnostics, ElbowPoint, SweepPlan},
    types::{ClusterId, ClusterSolution, KMeansOptions, Point},
};

/// Stateless front door to the clustering routines.
///
/// Each call builds its own random source from the options, so a seeded
/// engine answers identically every time and an unseeded one never shares
/// state between calls.
#[derive(Debug, Clone, Default)]
pub struct ClusterEngine {
    options: KMeansOptions,
    max_silhouette_points: Option<usize>,
}

impl ClusterEngine {
    pub fn new(options: KMeansOptions) -> Self {
        Self {
            options,
            max_silhouette_points: None,
        }
    }

    pub fn max_silhouette_points(mut self, max: usize) -> Self {
        self.max_silhouette_points = Some(max);
        self
    }

    pub fn run(&self, points: &[Point], k: usize) -> ClusterSolution {
        kmeans_with_rng(points, k, &self.options, &mut self.options.rng())
    }

    pub fn silhouette(&self, points: &[Point], assignments: &[ClusterId]) -> f64 {
        silhouette_with_rng(
            points,
            assignments,
            self.sample_limit(),
            &mut self.options.rng(),
        )
    }

    pub fn elbow(&self, points: &[Point], ks: RangeInclusive<usize>) -> Vec<ElbowPoint> {
        elbow_curve_with_rng(points, ks, &self.options, &mut self.options.rng())
    }

    /// Elbow curve over `elbow`, silhouettes within `window` of `k`
    pub fn diagnose(
        &self,
        points: &[Point],
        k: usize,
        elbow: RangeInclusive<usize>,
        window: usize,
    ) -> Diagnostics {
        let upper = k.saturating_add(window).min(points.len());
        let plan = SweepPlan {
            k,
            elbow,
            silhouette: k.saturating_sub(window).max(2)..=upper,
            max_sample_points: self.sample_limit(),
        };
        diagnose_with_rng(points, &plan, &self.options, &mut self.options.rng())
    }

    fn sample_limit(&self) -> usize {
        self.max_silhouette_points.unwrap_or(MAX_SILHOUETTE_POINTS)
    }
}
