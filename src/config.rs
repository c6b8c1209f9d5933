//! Ranking configuration.
//!
//! A [`RankConfig`] carries every tunable of a ranking run as an explicit
//! value. It can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "damping_factor": 0.85,
//!   "samples": 10000,
//!   "tolerance": 0.001,
//!   "max_iterations": 10000,
//!   "seed": 42
//! }
//! ```
//!
//! Omitted fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{check_damping, RankError, Result};
use crate::pagerank::{IterativePageRank, SamplingPageRank};

/// Probability of following a link rather than jumping to a random page.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Number of pages visited by the random surfer.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Power iteration stops once no page changes by this much.
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Safety valve for power iteration.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Settings shared by both ranking algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankConfig {
    pub damping_factor: f64,
    pub samples: usize,
    pub tolerance: f64,
    pub max_iterations: usize,
    /// Seed for the random surfer; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl RankConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping_factor: f64) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a configuration from JSON text and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check every setting, reporting the first invalid one.
    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping_factor)?;
        if self.samples == 0 {
            return Err(RankError::InvalidSampleCount(self.samples));
        }
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(RankError::InvalidTolerance(self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(RankError::Config(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The random-surfer estimator described by this configuration.
    pub fn sampler(&self) -> SamplingPageRank {
        let sampler = SamplingPageRank::new()
            .with_damping(self.damping_factor)
            .with_samples(self.samples);
        match self.seed {
            Some(seed) => sampler.with_seed(seed),
            None => sampler,
        }
    }

    /// The power-iteration solver described by this configuration.
    pub fn solver(&self) -> IterativePageRank {
        IterativePageRank::new()
            .with_damping(self.damping_factor)
            .with_tolerance(self.tolerance)
            .with_max_iterations(self.max_iterations)
    }
}
