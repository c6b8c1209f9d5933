//! Ranking observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at iteration and sample boundaries
//! without coupling to algorithm logic. Every hook has an empty default, so
//! an observer implements only what it needs.

/// Receives progress notifications from a ranking run.
pub trait RankObserver {
    /// Called after each power iteration with its largest per-page change.
    fn on_iteration(&mut self, _iteration: usize, _delta: f64) {}

    /// Called once when power iteration has converged.
    fn on_converged(&mut self, _iterations: usize, _delta: f64) {}

    /// Called for every page the random surfer visits.
    fn on_sample(&mut self, _step: usize, _page: u32) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RankObserver for NoopObserver {}

/// Records the delta of every power iteration.
#[derive(Debug, Clone, Default)]
pub struct DeltaHistory {
    pub deltas: Vec<f64>,
    pub converged_after: Option<usize>,
}

impl DeltaHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no delta is larger than the one before it.
    pub fn is_non_increasing(&self) -> bool {
        self.deltas.windows(2).all(|w| w[1] <= w[0])
    }
}

impl RankObserver for DeltaHistory {
    fn on_iteration(&mut self, _iteration: usize, delta: f64) {
        self.deltas.push(delta);
    }

    fn on_converged(&mut self, iterations: usize, _delta: f64) {
        self.converged_after = Some(iterations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_history_records() {
        let mut history = DeltaHistory::new();
        history.on_iteration(1, 0.2);
        history.on_iteration(2, 0.05);
        history.on_converged(2, 0.05);

        assert_eq!(history.deltas, vec![0.2, 0.05]);
        assert_eq!(history.converged_after, Some(2));
        assert!(history.is_non_increasing());
    }

    #[test]
    fn test_delta_history_detects_increase() {
        let mut history = DeltaHistory::new();
        history.on_iteration(1, 0.1);
        history.on_iteration(2, 0.3);

        assert!(!history.is_non_increasing());
    }

    #[test]
    fn test_noop_observer_accepts_everything() {
        let mut observer = NoopObserver;
        observer.on_iteration(1, 0.5);
        observer.on_sample(0, 3);
        observer.on_converged(1, 0.0);
    }
}
