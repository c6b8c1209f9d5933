//! PageRank algorithms
//!
//! This module provides the random-surfer transition model and the two
//! estimators built on it: Monte Carlo sampling and power iteration.

use std::cmp::Ordering;
use std::collections::HashMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{check_damping, RankError, Result};
use crate::graph::LinkGraph;

/// Enter a tracing span for one algorithm run (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_algorithm {
    ($name:expr, $graph:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "pagerank",
            algorithm = $name,
            pages = $graph.num_pages(),
            links = $graph.num_links()
        )
        .entered();
    };
}

pub mod iterative;
pub mod sampling;
pub mod transition;


pub use iterative::{iterate_pagerank, IterativePageRank};
pub use sampling::{sample_pagerank, SamplingPageRank};
pub use transition::{transition_model, transition_probabilities};

/// Rejects the inputs no ranking run can work with.
pub(crate) fn check_inputs(graph: &LinkGraph, damping: f64) -> Result<()> {
    if graph.is_empty() {
        return Err(RankError::EmptyGraph);
    }
    check_damping(damping)
}

/// Probability mass over the pages of a graph, keyed by page name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    values: FxHashMap<String, f64>,
}

impl Distribution {
    /// Pair index-addressed values with the graph's page names
    pub fn from_scores(graph: &LinkGraph, scores: &[f64]) -> Self {
        let values = graph
            .pages
            .iter()
            .zip(scores.iter())
            .map(|(page, &score)| (page.clone(), score))
            .collect();
        Self { values }
    }

    /// Probability assigned to a page, if the page is known
    pub fn get(&self, page: &str) -> Option<f64> {
        self.values.get(page).copied()
    }

    /// Number of pages covered
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the distribution covers no pages
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(page, probability)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(p, &v)| (p.as_str(), v))
    }

    /// Sum of all probabilities
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Pages sorted by descending probability, ties broken by name
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        ranked
    }

    /// Get the top N pages by probability
    pub fn top_n(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Convert into a plain map
    pub fn into_map(self) -> HashMap<String, f64> {
        self.values.into_iter().collect()
    }
}

/// Result of a PageRank power iteration
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each page (indexed by page ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Largest per-page change in the final iteration
    pub delta: f64,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64) -> Self {
        Self {
            scores,
            iterations,
            delta,
        }
    }

    /// Get top N pages by score
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific page
    pub fn score(&self, page: u32) -> f64 {
        self.scores.get(page as usize).copied().unwrap_or(0.0)
    }

    /// Attach page names to the scores
    pub fn into_distribution(self, graph: &LinkGraph) -> Distribution {
        Distribution::from_scores(graph, &self.scores)
    }
}

/// Result of a random-surfer sampling run
#[derive(Debug, Clone)]
pub struct SampleResult {
    /// Visit count for each page (indexed by page ID)
    pub visits: Vec<u64>,
    /// Total number of samples drawn
    pub samples: usize,
}

impl SampleResult {
    /// Visit frequencies: each page's visits divided by the sample count
    pub fn scores(&self) -> Vec<f64> {
        let n = self.samples as f64;
        self.visits.iter().map(|&v| v as f64 / n).collect()
    }

    /// Attach page names to the visit frequencies
    pub fn into_distribution(self, graph: &LinkGraph) -> Distribution {
        Distribution::from_scores(graph, &self.scores())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> LinkGraph {
        LinkGraph::from_adjacency(vec![("a", vec!["b"]), ("b", vec!["a"]), ("c", vec!["a"])])
            .unwrap()
    }

    #[test]
    fn test_distribution_ranked_breaks_ties_by_name() {
        let dist = Distribution::from_scores(&graph(), &[0.25, 0.5, 0.25]);

        let ranked = dist.ranked();
        assert_eq!(ranked, vec![("b", 0.5), ("a", 0.25), ("c", 0.25)]);
        assert_eq!(dist.top_n(1), vec![("b", 0.5)]);
    }

    #[test]
    fn test_distribution_lookup_and_total() {
        let dist = Distribution::from_scores(&graph(), &[0.2, 0.3, 0.5]);

        assert_eq!(dist.len(), 3);
        assert_eq!(dist.get("c"), Some(0.5));
        assert_eq!(dist.get("z"), None);
        assert!((dist.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_distribution_serializes_as_object() {
        let dist = Distribution::from_scores(&graph(), &[0.2, 0.3, 0.5]);

        let json = serde_json::to_value(&dist).unwrap();
        assert_eq!(json["a"], 0.2);
        assert_eq!(json["c"], 0.5);

        let back: Distribution = serde_json::from_value(json).unwrap();
        assert_eq!(back, dist);
    }

    #[test]
    fn test_sample_result_scores() {
        let result = SampleResult {
            visits: vec![1, 3, 0],
            samples: 4,
        };

        assert_eq!(result.scores(), vec![0.25, 0.75, 0.0]);
        let dist = result.into_distribution(&graph());
        assert_eq!(dist.get("c"), Some(0.0));
    }

    #[test]
    fn test_result_top_n() {
        let result = PageRankResult::new(vec![0.1, 0.6, 0.3], 4, 1e-4);

        assert_eq!(result.top_n(2), vec![(1, 0.6), (2, 0.3)]);
        assert_eq!(result.score(9), 0.0);
    }

    #[test]
    fn test_check_inputs() {
        assert!(matches!(
            check_inputs(&LinkGraph::default(), 0.85),
            Err(RankError::EmptyGraph)
        ));
        assert!(matches!(
            check_inputs(&graph(), 1.0),
            Err(RankError::InvalidDampingFactor(_))
        ));
        assert!(check_inputs(&graph(), 0.85).is_ok());
    }
}
