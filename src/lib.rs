// Public API exports
pub mod clusterer;
pub mod config;
pub mod dataset;
pub mod pipeline;
pub mod report;

// Re-export main types for convenience
pub use clusterer::{
    kmeans, kmeans_with_rng, silhouette, silhouette_with_rng, ClusterEngine, ClusterSolution,
    Diagnostics, ElbowPoint, KMeansOptions, Point, SilhouettePoint,
};

pub use config::{ConfigError, ResolvedK, RunConfig};

pub use dataset::{
    build_feature_matrix, demo_customers, standardize, Dataset, DatasetError, ScaleMode,
    Standardization,
};

pub use report::{clustered_csv, write_clustered_csv, ClusterProfile, Summary};

pub use pipeline::{Explorer, ExplorerReport};
