//! Aggregated citation metrics and the per-year chart series

use serde::{Deserialize, Serialize};

/// Scalar metrics computed server-side (`GET /orcid/{id}/metrics`).
///
/// Field names on the wire are the backend's Portuguese keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(rename = "total_publicacoes", default)]
    pub total_publications: u64,
    #[serde(rename = "total_citacoes", default)]
    pub total_citations: u64,
    #[serde(rename = "media_citacoes", default)]
    pub mean_citations: f64,
    /// Citations per publication over the last two years
    #[serde(rename = "fator_de_impacto", default)]
    pub impact_factor: f64,
    #[serde(default)]
    pub h_index: u32,
    #[serde(default)]
    pub i10_index: u32,
    #[serde(rename = "pesquisa_mais_citada", default)]
    pub most_cited: Option<MostCited>,
}

/// Most-cited work reference. Older backends send only the count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MostCited {
    Count(u64),
    Work {
        #[serde(default)]
        citations: u64,
        #[serde(default)]
        title: Option<String>,
    },
}

impl MostCited {
    pub fn citations(&self) -> u64 {
        match self {
            MostCited::Count(n) => *n,
            MostCited::Work { citations, .. } => *citations,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            MostCited::Count(_) => None,
            MostCited::Work { title, .. } => title.as_deref(),
        }
    }
}

/// Year-bucketed publication and citation counts (`GET /orcid/{id}/stats`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSeries {
    #[serde(default)]
    pub years: Vec<i32>,
    #[serde(default)]
    pub publications: Vec<u64>,
    #[serde(default)]
    pub citations: Vec<u64>,
}

/// One column of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBucket {
    pub year: i32,
    pub publications: u64,
    pub citations: u64,
}

impl YearSeries {
    /// Buckets in ascending year order. Arrays of unequal length are cut to
    /// the shortest; a missing citation entry counts as zero.
    pub fn buckets(&self) -> Vec<YearBucket> {
        let mut buckets: Vec<YearBucket> = self
            .years
            .iter()
            .zip(&self.publications)
            .enumerate()
            .map(|(i, (&year, &publications))| YearBucket {
                year,
                publications,
                citations: self.citations.get(i).copied().unwrap_or(0),
            })
            .collect();
        buckets.sort_by_key(|b| b.year);
        buckets
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty() || self.publications.is_empty()
    }

    pub fn max_publications(&self) -> u64 {
        self.publications.iter().copied().max().unwrap_or(0)
    }

    pub fn max_citations(&self) -> u64 {
        self.citations.iter().copied().max().unwrap_or(0)
    }
}
