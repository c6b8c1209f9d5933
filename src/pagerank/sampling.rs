//! Sampled PageRank (random surfer)
//!
//! Walks the graph for `samples` steps, drawing each next page from the
//! transition model, and estimates each page's rank as its visit frequency.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::transition::transition_probabilities;
use super::{check_inputs, Distribution, SampleResult};
use crate::config::{DEFAULT_DAMPING, DEFAULT_SAMPLES};
use crate::error::{RankError, Result};
use crate::graph::LinkGraph;
use crate::observer::{NoopObserver, RankObserver};

/// Monte Carlo PageRank estimator
#[derive(Debug, Clone)]
pub struct SamplingPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Number of pages visited by the walk, the starting page included
    pub samples: usize,
    /// Seed for a reproducible walk; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SamplingPageRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            seed: None,
        }
    }
}

impl SamplingPageRank {
    /// Create a new SamplingPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of samples
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Seed the walk for reproducible output
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the random surfer on a graph
    pub fn run(&self, graph: &LinkGraph) -> Result<SampleResult> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(graph, &mut rng)
    }

    /// Run the random surfer, drawing from the given random source
    pub fn run_with_rng<R: Rng>(&self, graph: &LinkGraph, rng: &mut R) -> Result<SampleResult> {
        self.run_observed(graph, rng, &mut NoopObserver)
    }

    /// Run the random surfer, reporting every visited page to `observer`
    pub fn run_observed<R, O>(
        &self,
        graph: &LinkGraph,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<SampleResult>
    where
        R: Rng,
        O: RankObserver + ?Sized,
    {
        check_inputs(graph, self.damping)?;
        if self.samples == 0 {
            return Err(RankError::InvalidSampleCount(self.samples));
        }
        trace_algorithm!("sampling", graph);

        let n = graph.num_pages();
        let mut visits = vec![0u64; n];
        let mut row = CumulativeRow::new(n);

        let mut current = rng.gen_range(0..n) as u32;
        visits[current as usize] += 1;
        observer.on_sample(0, current);

        for step in 1..self.samples {
            let cdf = row.get(graph, current, self.damping);
            current = draw(cdf, rng);
            visits[current as usize] += 1;
            observer.on_sample(step, current);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(samples = self.samples, "random walk finished");

        Ok(SampleResult {
            visits,
            samples: self.samples,
        })
    }
}

/// Cumulative transition row of the surfer's current page
///
/// Holds a single row, rebuilt whenever the walk moves to a different page,
/// so memory stays O(N) regardless of how many pages the walk visits.
struct CumulativeRow {
    page: Option<u32>,
    cdf: Vec<f64>,
    scratch: Vec<f64>,
}

impl CumulativeRow {
    fn new(num_pages: usize) -> Self {
        Self {
            page: None,
            cdf: Vec::with_capacity(num_pages),
            scratch: Vec::with_capacity(num_pages),
        }
    }

    fn get(&mut self, graph: &LinkGraph, page: u32, damping: f64) -> &[f64] {
        if self.page != Some(page) {
            transition_probabilities(graph, page, damping, &mut self.scratch);
            self.cdf.clear();
            let mut acc = 0.0;
            for &p in &self.scratch {
                acc += p;
                self.cdf.push(acc);
            }
            self.page = Some(page);
        }
        &self.cdf
    }
}

/// Weighted choice by inverting a cumulative distribution
fn draw<R: Rng>(cdf: &[f64], rng: &mut R) -> u32 {
    let total = cdf.last().copied().unwrap_or(0.0);
    let u = rng.gen::<f64>() * total;
    // First entry whose cumulative mass exceeds u; clamp covers rounding at the top
    let idx = cdf.partition_point(|&c| c <= u);
    idx.min(cdf.len() - 1) as u32
}

/// PageRank estimated from `samples` steps of a random surfer
pub fn sample_pagerank(graph: &LinkGraph, damping: f64, samples: usize) -> Result<Distribution> {
    let result = SamplingPageRank::new()
        .with_damping(damping)
        .with_samples(samples)
        .run(graph)?;
    Ok(result.into_distribution(graph))
}
