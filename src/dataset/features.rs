use std::collections::HashSet;

use crate::clusterer::Point;
use crate::dataset::{Dataset, DatasetError};

/// Selected columns of a dataset, in original units
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    pub names: Vec<String>,
    pub rows: Vec<Point>,
}

/// Pull the named columns out of `dataset`.
///
/// Unknown names are ignored and repeated columns are kept once. An empty
/// `names` selects every column.
pub fn build_feature_matrix(
    dataset: &Dataset,
    names: &[String],
) -> Result<FeatureMatrix, DatasetError> {
    let wanted: Vec<&String> = if names.is_empty() {
        dataset.headers.iter().collect()
    } else {
        names.iter().collect()
    };

    let mut seen = HashSet::new();
    let (names, cols): (Vec<String>, Vec<usize>) = wanted
        .into_iter()
        .filter_map(|name| dataset.column_index(name).map(|i| (name.clone(), i)))
        .filter(|&(_, i)| seen.insert(i))
        .unzip();

    if cols.is_empty() {
        return Err(DatasetError::NoFeatures);
    }

    let rows = dataset
        .rows
        .iter()
        .map(|row| cols.iter().map(|&c| row[c]).collect())
        .collect();

    Ok(FeatureMatrix { names, rows })
}
