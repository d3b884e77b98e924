use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::clusterer::{euclidean_distance, ClusterId, Point};
use crate::dataset::Dataset;
use crate::report::profile::member_means;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unable to prepare download: clustering state is incomplete.")]
    IncompleteState,
}

/// Original table plus `cluster_id` (1-based) and `distance_to_centroid`
/// (raw-unit distance to the cluster mean over `features`).
pub fn clustered_csv(
    dataset: &Dataset,
    features: &[Point],
    assignments: &[ClusterId],
) -> Result<String, ExportError> {
    let n = dataset.len();
    if n == 0 || features.len() != n || assignments.len() != n {
        return Err(ExportError::IncompleteState);
    }

    let k = assignments.iter().copied().max().map_or(0, |m| m + 1);
    let means = member_means(features, assignments, k);

    let mut lines = Vec::with_capacity(n + 1);
    let mut headers = dataset.headers.clone();
    headers.push("cluster_id".to_string());
    headers.push("distance_to_centroid".to_string());
    lines.push(headers.join(","));

    for i in 0..n {
        let mut cells: Vec<String> = dataset.rows[i].iter().map(|v| v.to_string()).collect();
        let c = assignments[i];
        cells.push((c + 1).to_string());

        let distance = means[c]
            .as_ref()
            .map(|mean| euclidean_distance(&features[i], mean))
            .filter(|d| d.is_finite());
        cells.push(distance.map(|d| format!("{:.4}", d)).unwrap_or_default());

        lines.push(cells.join(","));
    }

    Ok(lines.join("\n"))
}

pub fn write_clustered_csv(
    path: impl AsRef<Path>,
    dataset: &Dataset,
    features: &[Point],
    assignments: &[ClusterId],
) -> Result<()> {
    let path = path.as_ref();
    let csv = clustered_csv(dataset, features, assignments)?;
    std::fs::write(path, csv)
        .with_context(|| format!("Failed to write clustered results to {}", path.display()))?;
    Ok(())
}
