use serde::Serialize;

use crate::clusterer::{compute_centroid, euclidean_distance, ClusterId, Point};

/// Per-segment description in the original feature units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterProfile {
    /// 1-based label shown to users
    pub label: usize,
    pub size: usize,
    pub means: Vec<f64>,
    /// Sample standard deviation per feature; 0 for singleton clusters
    pub sds: Vec<f64>,
    /// Average Euclidean distance from members to `means`
    pub mean_distance: f64,
}

/// Raw-unit mean of each cluster's members. Empty clusters get `None`.
pub fn member_means(
    features: &[Point],
    assignments: &[ClusterId],
    k: usize,
) -> Vec<Option<Point>> {
    let mut members: Vec<Vec<&[f64]>> = vec![Vec::new(); k];
    for (row, &c) in features.iter().zip(assignments) {
        if c < k {
            members[c].push(row.as_slice());
        }
    }

    members
        .iter()
        .map(|m| {
            if m.is_empty() {
                None
            } else {
                Some(compute_centroid(m))
            }
        })
        .collect()
}

/// Profiles for every non-empty cluster, ordered by cluster index
pub fn cluster_profiles(
    features: &[Point],
    assignments: &[ClusterId],
    k: usize,
) -> Vec<ClusterProfile> {
    let means = member_means(features, assignments, k);
    let mut profiles = Vec::new();

    for (c, mean) in means.into_iter().enumerate() {
        let Some(mean) = mean else { continue };

        let rows: Vec<&Point> = features
            .iter()
            .zip(assignments)
            .filter(|&(_, &a)| a == c)
            .map(|(row, _)| row)
            .collect();
        let size = rows.len();

        let mut sq_diff = vec![0.0; mean.len()];
        let mut distance_sum = 0.0;
        for row in &rows {
            for (j, v) in row.iter().enumerate() {
                let d = v - mean[j];
                sq_diff[j] += d * d;
            }
            distance_sum += euclidean_distance(row, &mean);
        }

        let sds = sq_diff
            .iter()
            .map(|sum_sq| {
                if size <= 1 {
                    return 0.0;
                }
                let variance = sum_sq / (size - 1) as f64;
                if variance > 0.0 {
                    variance.sqrt()
                } else {
                    0.0
                }
            })
            .collect();

        profiles.push(ClusterProfile {
            label: c + 1,
            size,
            means: mean,
            sds,
            mean_distance: distance_sum / size as f64,
        });
    }

    profiles
}
