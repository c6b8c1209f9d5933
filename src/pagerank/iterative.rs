//! Iterative PageRank
//!
//! Implements the classic PageRank recurrence with synchronous power
//! iteration and dangling pages treated as linking to every page.

use super::{check_inputs, Distribution, PageRankResult};
use crate::config::{DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::error::{RankError, Result};
use crate::graph::LinkGraph;
use crate::observer::{NoopObserver, RankObserver};

/// Power-iteration PageRank solver
#[derive(Debug, Clone)]
pub struct IterativePageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations before giving up
    pub max_iterations: usize,
    /// Convergence threshold on the largest per-page change
    pub tolerance: f64,
    /// Rescale the final scores to sum to exactly 1
    pub normalize: bool,
}

impl Default for IterativePageRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            normalize: true,
        }
    }
}

impl IterativePageRank {
    /// Create a new IterativePageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable final normalization
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Run PageRank on a graph
    pub fn run(&self, graph: &LinkGraph) -> Result<PageRankResult> {
        self.run_observed(graph, &mut NoopObserver)
    }

    /// Run PageRank, reporting every iteration to `observer`
    ///
    /// Fails with [`RankError::NotConverged`] if the largest per-page change
    /// is still at or above the tolerance after `max_iterations` iterations.
    pub fn run_observed<O: RankObserver + ?Sized>(
        &self,
        graph: &LinkGraph,
        observer: &mut O,
    ) -> Result<PageRankResult> {
        check_inputs(graph, self.damping)?;
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(RankError::InvalidTolerance(self.tolerance));
        }
        trace_algorithm!("iterative", graph);

        let n = graph.num_pages();
        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];

        let dangling_pages = graph.dangling_pages();
        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while delta >= self.tolerance {
            if iterations == self.max_iterations {
                #[cfg(feature = "tracing")]
                tracing::warn!(iterations, delta, "power iteration did not converge");
                return Err(RankError::NotConverged { iterations, delta });
            }
            iterations += 1;

            // Dangling pages spread their rank over every page, themselves included
            let dangling_mass: f64 = dangling_pages.iter().map(|&p| scores[p as usize]).sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            for (page, &page_score) in scores.iter().enumerate() {
                let degree = graph.degree(page as u32);

                if degree > 0 {
                    let contribution = self.damping * page_score / degree as f64;
                    for target in graph.neighbors(page as u32) {
                        new_scores[target as usize] += contribution;
                    }
                }
            }

            // Largest per-page change (L-infinity norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut scores, &mut new_scores);

            #[cfg(feature = "tracing")]
            tracing::debug!(iteration = iterations, delta, "power iteration step");
            observer.on_iteration(iterations, delta);
        }

        if self.normalize {
            let sum: f64 = scores.iter().sum();
            if sum > 0.0 {
                for score in &mut scores {
                    *score /= sum;
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::info!(iterations, delta, "power iteration converged");
        observer.on_converged(iterations, delta);

        Ok(PageRankResult::new(scores, iterations, delta))
    }
}

/// PageRank by power iteration with the default tolerance
pub fn iterate_pagerank(graph: &LinkGraph, damping: f64) -> Result<Distribution> {
    let result = IterativePageRank::new().with_damping(damping).run(graph)?;
    Ok(result.into_distribution(graph))
}
