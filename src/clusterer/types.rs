use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// One observation: a fixed-length row of already-standardized values
pub type Point = Vec<f64>;

/// Index of a cluster in `0..k`
pub type ClusterId = usize;

pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_RESTARTS: usize = 5;

/// Best partition found across all restarts of one `run` call
#[derive(Debug, Clone, Serialize)]
pub struct ClusterSolution {
    /// Cluster index per input point
    pub assignments: Vec<ClusterId>,
    /// One centroid per cluster, in standardized units
    pub centroids: Vec<Point>,
    /// Within-cluster sum of squares. NaN for a degenerate solution.
    pub wcss: f64,
    pub cluster_sizes: Vec<usize>,
    /// Lloyd iterations used by the winning restart
    pub iterations: usize,
}

impl ClusterSolution {
    /// Empty result returned for inputs the engine cannot partition
    pub fn degenerate() -> Self {
        Self {
            assignments: Vec::new(),
            centroids: Vec::new(),
            wcss: f64::NAN,
            cluster_sizes: Vec::new(),
            iterations: 0,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.centroids.is_empty()
    }

    pub fn k(&self) -> usize {
        self.centroids.len()
    }
}

/// Tuning knobs for the Lloyd loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KMeansOptions {
    pub max_iterations: usize,
    pub restarts: usize,
    /// Pins seeding and reseeding; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl KMeansOptions {
    pub fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            restarts: DEFAULT_RESTARTS,
            seed: None,
        }
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Random source for this configuration
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

impl Default for KMeansOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of one Lloyd iteration, recorded after the update step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationTrace {
    pub iteration: usize,
    /// WCSS of the current assignment against the freshly updated centroids
    pub wcss: f64,
    pub changed: bool,
    /// Clusters that came out of the assignment step empty
    pub reseeded: usize,
}
