mod centroid;
mod distance;
mod engine;
mod kmeans;
mod seeding;
mod silhouette;
mod sweep;
mod types;


pub use centroid::compute_centroid;
pub use distance::{euclidean_distance, nearest_centroid, squared_distance};
pub use engine::ClusterEngine;
pub use kmeans::{kmeans, kmeans_traced, kmeans_with_rng};
pub use seeding::kmeans_plus_plus;
pub use silhouette::{silhouette, silhouette_with_rng, MAX_SILHOUETTE_POINTS};
pub use sweep::{
    diagnose_with_rng, elbow_curve_with_rng, silhouette_curve_with_rng, Diagnostics, ElbowPoint,
    SilhouettePoint, SweepPlan,
};
pub use types::{
    ClusterId, ClusterSolution, IterationTrace, KMeansOptions, Point,
    DEFAULT_MAX_ITERATIONS, DEFAULT_RESTARTS,
};
