use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clusterer::{KMeansOptions, DEFAULT_MAX_ITERATIONS, DEFAULT_RESTARTS, MAX_SILHOUETTE_POINTS};
use crate::dataset::{DatasetError, ScaleMode};

/// Largest k the explorer will offer, whatever the dataset size
pub const MAX_EXPLORER_K: usize = 12;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Select at least two features for clustering and plotting.")]
    TooFewFeatures,

    #[error("Choose k between 2 and one less than the number of observations.")]
    InvalidK,

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything one explorer run needs besides the data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Cluster count reported in detail
    pub k: usize,
    pub k_min: usize,
    pub k_max: usize,
    pub scale: ScaleMode,
    /// Columns to cluster on; empty means all of them
    pub features: Vec<String>,
    pub max_iterations: usize,
    pub restarts: usize,
    pub seed: Option<u64>,
    pub max_silhouette_points: usize,
    /// Silhouettes are evaluated for `k ± silhouette_window`
    pub silhouette_window: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            k: 3,
            k_min: 2,
            k_max: 8,
            scale: ScaleMode::default(),
            features: Vec::new(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            restarts: DEFAULT_RESTARTS,
            seed: None,
            max_silhouette_points: MAX_SILHOUETTE_POINTS,
            silhouette_window: 2,
        }
    }
}

/// k values after clamping to what the dataset supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedK {
    pub k: usize,
    pub k_min: usize,
    /// May fall below `k_min` on tiny datasets, leaving the elbow sweep empty
    pub k_max: usize,
    pub max_reasonable_k: usize,
    pub silhouette_min: usize,
    pub silhouette_max: usize,
}

impl RunConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn kmeans_options(&self) -> KMeansOptions {
        KMeansOptions::new()
            .max_iterations(self.max_iterations)
            .restarts(self.restarts)
            .seed(self.seed)
    }

    /// Clamp the requested k range against `n` observations
    pub fn resolve_k(&self, n: usize) -> Result<ResolvedK, ConfigError> {
        let k = self.k.max(2);
        let k_min = self.k_min.max(2);
        let k_max = if self.k_max < k_min {
            k_min.max(3)
        } else {
            self.k_max
        };

        let max_reasonable_k = MAX_EXPLORER_K.min(n.saturating_sub(1)).max(2);
        let k = k.min(max_reasonable_k);
        let k_max = k_max.min(max_reasonable_k);

        if k + 1 > n {
            return Err(ConfigError::InvalidK);
        }

        Ok(ResolvedK {
            k,
            k_min,
            k_max,
            max_reasonable_k,
            silhouette_min: k.saturating_sub(self.silhouette_window).max(2),
            silhouette_max: k.saturating_add(self.silhouette_window).min(max_reasonable_k),
        })
    }
}
