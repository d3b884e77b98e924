use serde::Serialize;

/// Rough reading of an average silhouette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Separation {
    Well,
    Moderate,
    Weak,
}

impl Separation {
    pub fn from_silhouette(score: f64) -> Option<Self> {
        if !score.is_finite() {
            return None;
        }
        Some(if score >= 0.5 {
            Separation::Well
        } else if score >= 0.25 {
            Separation::Moderate
        } else {
            Separation::Weak
        })
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            Separation::Well => {
                "The silhouette score suggests the segments are well separated and interpretable."
            }
            Separation::Moderate => {
                "The silhouette score suggests a moderate level of separation; segments may overlap but are still useful."
            }
            Separation::Weak => {
                "The low silhouette score suggests segments may be noisy or overlapping; consider fewer clusters or different variables."
            }
        }
    }
}

/// Written report: a formal results sentence and a plain-language one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub apa: String,
    pub managerial: String,
    pub separation: Option<Separation>,
}

impl Summary {
    pub fn new(
        k: usize,
        n: usize,
        feature_names: &[String],
        wcss: f64,
        silhouette: f64,
        cluster_sizes: &[usize],
    ) -> Self {
        let separation = Separation::from_silhouette(silhouette);

        let sil_text = if silhouette.is_finite() {
            format!(" and an average silhouette coefficient of {:.3}", silhouette)
        } else {
            String::new()
        };
        let apa = format!(
            "k-means clustering with k = {} was applied to N = {} observations using {}. \
             The solution yielded a total within-cluster sum of squares (WCSS) of {:.1}{}.",
            k,
            n,
            feature_list(feature_names),
            wcss,
            sil_text
        );

        let mut managerial = format!(
            "This configuration finds {} segment(s) based on the selected metrics.",
            k
        );
        if let (Some(min), Some(max)) = (cluster_sizes.iter().min(), cluster_sizes.iter().max()) {
            managerial.push_str(&format!(
                " Segment sizes ranged from {} to {} observations.",
                min, max
            ));
        }
        if let Some(sep) = separation {
            managerial.push(' ');
            managerial.push_str(sep.interpretation());
        }

        Self {
            apa,
            managerial,
            separation,
        }
    }
}

fn feature_list(names: &[String]) -> String {
    match names {
        [only] => format!("1 feature ({})", only),
        _ => {
            let shown = names.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
            let more = if names.len() > 3 { ", …" } else { "" };
            format!("{} features ({}{})", names.len(), shown, more)
        }
    }
}
