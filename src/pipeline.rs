use std::time::Instant;

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::clusterer::{diagnose_with_rng, ClusterSolution, ElbowPoint, Point, SilhouettePoint, SweepPlan};
use crate::config::{ConfigError, ResolvedK, RunConfig};
use crate::dataset::{build_feature_matrix, standardize, Dataset, FeatureMatrix, Standardization};
use crate::report::{cluster_profiles, ClusterProfile, Summary};

/// Outcome of one explorer run
#[derive(Debug, Clone, Serialize)]
pub struct ExplorerReport {
    pub generated_at: String,
    pub generator: String,
    pub n_observations: usize,
    pub features: Vec<String>,
    pub resolved: ResolvedK,
    pub standardization: Standardization,
    /// Solution for `resolved.k`, centroids in scaled units
    pub solution: ClusterSolution,
    /// Centroids mapped back to raw feature units
    pub centroids: Vec<Point>,
    pub silhouette: f64,
    pub elbow: Vec<ElbowPoint>,
    pub silhouettes: Vec<SilhouettePoint>,
    pub profiles: Vec<ClusterProfile>,
    pub summary: Summary,
    /// Raw-unit feature rows, kept for exporting
    #[serde(skip)]
    pub feature_rows: Vec<Point>,
}

/// Runs the full explore loop: features, scaling, elbow sweep, silhouettes,
/// profiles and write-up.
pub struct Explorer {
    config: RunConfig,
}

impl Explorer {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, dataset: &Dataset) -> Result<ExplorerReport, ConfigError> {
        let mut rng = self.config.kmeans_options().rng();
        self.run_with_rng(dataset, &mut rng)
    }

    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        dataset: &Dataset,
        rng: &mut R,
    ) -> Result<ExplorerReport, ConfigError> {
        let start = Instant::now();

        let FeatureMatrix { names, rows } = build_feature_matrix(dataset, &self.config.features)?;
        if names.len() < 2 {
            return Err(ConfigError::TooFewFeatures);
        }

        let n = rows.len();
        let resolved = self.config.resolve_k(n)?;
        info!(
            n,
            features = names.len(),
            k = resolved.k,
            k_min = resolved.k_min,
            k_max = resolved.k_max,
            scale = self.config.scale.label(),
            "starting clustering run"
        );

        let standardization = standardize(&rows, self.config.scale);

        let plan = SweepPlan {
            k: resolved.k,
            elbow: resolved.k_min..=resolved.k_max,
            silhouette: resolved.silhouette_min..=resolved.silhouette_max,
            max_sample_points: self.config.max_silhouette_points,
        };
        let diagnostics = diagnose_with_rng(
            &standardization.points,
            &plan,
            &self.config.kmeans_options(),
            rng,
        );
        debug!(
            wcss = diagnostics.solution.wcss,
            silhouette = diagnostics.silhouette,
            iterations = diagnostics.solution.iterations,
            "chosen solution"
        );

        let solution = diagnostics.solution;
        let centroids = solution
            .centroids
            .iter()
            .map(|c| standardization.unstandardize(c))
            .collect();
        let profiles = cluster_profiles(&rows, &solution.assignments, solution.k());
        let summary = Summary::new(
            solution.k(),
            n,
            &names,
            solution.wcss,
            diagnostics.silhouette,
            &solution.cluster_sizes,
        );

        info!(
            k = solution.k(),
            wcss = solution.wcss,
            silhouette = diagnostics.silhouette,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "clustering run complete"
        );

        Ok(ExplorerReport {
            generated_at: Utc::now().to_rfc3339(),
            generator: format!("kmeans-explorer v{}", env!("CARGO_PKG_VERSION")),
            n_observations: n,
            features: names,
            resolved,
            standardization,
            solution,
            centroids,
            silhouette: diagnostics.silhouette,
            elbow: diagnostics.elbow,
            silhouettes: diagnostics.silhouettes,
            profiles,
            summary,
            feature_rows: rows,
        })
    }
}
