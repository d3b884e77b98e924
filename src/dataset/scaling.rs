use serde::{Deserialize, Serialize};

use crate::clusterer::Point;

/// How features are rescaled before distances are taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Raw values
    None,
    /// Mean 0, sample standard deviation 1
    #[default]
    Zscore,
    /// Each feature mapped onto 0..100
    Minmax,
}

impl ScaleMode {
    pub fn label(&self) -> &'static str {
        match self {
            ScaleMode::None => "none",
            ScaleMode::Zscore => "z-score",
            ScaleMode::Minmax => "min-max (0-100)",
        }
    }
}

/// Rescaled points plus the per-feature offset and divisor used:
/// `scaled = (raw - means[j]) / stds[j]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standardization {
    pub mode: ScaleMode,
    #[serde(skip)]
    pub points: Vec<Point>,
    pub means: Vec<f64>,
    pub stds: Vec<f64>,
}

impl Standardization {
    /// Map a vector in scaled units (e.g. a centroid) back to raw units
    pub fn unstandardize(&self, scaled: &[f64]) -> Point {
        scaled
            .iter()
            .enumerate()
            .map(|(j, v)| v * self.stds[j] + self.means[j])
            .collect()
    }
}

pub fn standardize(matrix: &[Point], mode: ScaleMode) -> Standardization {
    let n = matrix.len();
    let p = matrix.first().map_or(0, Vec::len);

    if n == 0 || p == 0 {
        return Standardization {
            mode,
            points: matrix.to_vec(),
            means: Vec::new(),
            stds: Vec::new(),
        };
    }

    let (means, stds) = match mode {
        ScaleMode::None => (vec![0.0; p], vec![1.0; p]),
        ScaleMode::Zscore => zscore_params(matrix, p),
        ScaleMode::Minmax => minmax_params(matrix, p),
    };

    let points = matrix
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(j, v)| (v - means[j]) / stds[j])
                .collect()
        })
        .collect();

    Standardization {
        mode,
        points,
        means,
        stds,
    }
}

fn zscore_params(matrix: &[Point], p: usize) -> (Vec<f64>, Vec<f64>) {
    let n = matrix.len();
    let mut means = vec![0.0; p];
    let mut stds = vec![0.0; p];

    for j in 0..p {
        means[j] = matrix.iter().map(|row| row[j]).sum::<f64>() / n as f64;
    }

    for j in 0..p {
        let sq: f64 = matrix
            .iter()
            .map(|row| {
                let d = row[j] - means[j];
                d * d
            })
            .sum();
        let variance = if n > 1 { sq / (n - 1) as f64 } else { 0.0 };
        stds[j] = if variance > 0.0 { variance.sqrt() } else { 1.0 };
    }

    (means, stds)
}

fn minmax_params(matrix: &[Point], p: usize) -> (Vec<f64>, Vec<f64>) {
    let mut mins = vec![f64::INFINITY; p];
    let mut maxs = vec![f64::NEG_INFINITY; p];

    for row in matrix {
        for j in 0..p {
            mins[j] = mins[j].min(row[j]);
            maxs[j] = maxs[j].max(row[j]);
        }
    }

    let stds = mins
        .iter()
        .zip(&maxs)
        .map(|(lo, hi)| {
            let range = hi - lo;
            if range > 0.0 {
                range / 100.0
            } else {
                1.0
            }
        })
        .collect();

    (mins, stds)
}
