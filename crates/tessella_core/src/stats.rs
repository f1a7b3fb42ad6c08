//! Per-generation statistics and running aggregates.
//!
//! [`StatsHistory::observe`] compares a pair of consecutive grids and
//! appends one [`GenerationStats`] snapshot per generation. The running
//! mean and standard deviation of the stability ratio are maintained with a
//! Welford estimator, which matches the population statistics over the full
//! appended history without rescanning it.

use crate::error::{EngineError, Result};
use crate::grid::Grid;
use tessella_data::GenerationStats;

/// Ordered history of generation snapshots with running stability
/// aggregates. Snapshots are appended once per generation and never
/// mutated retroactively.
#[derive(Debug, Clone, Default)]
pub struct StatsHistory {
    snapshots: Vec<GenerationStats>,
    count: u64,
    mean: f64,
    m2: f64,
}

impl StatsHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the metrics of the `previous -> next` transition, appends the
    /// snapshot to the history, and returns it.
    ///
    /// Fails with `DimensionMismatch` when the grids differ in size. The
    /// alive/dead ratio never divides by zero: an all-alive grid yields the
    /// `f64::INFINITY` sentinel, an all-dead grid yields 0.
    pub fn observe(
        &mut self,
        previous: &Grid,
        next: &Grid,
        generation: u64,
    ) -> Result<GenerationStats> {
        if previous.side() != next.side() {
            return Err(EngineError::DimensionMismatch {
                expected: previous.side(),
                actual: next.side(),
            });
        }
        let total = next.cell_count();
        let unchanged = previous
            .cells()
            .iter()
            .zip(next.cells())
            .filter(|(a, b)| a == b)
            .count();
        let stability = unchanged as f64 / total as f64;

        let alive_count = next.alive_count();
        let dead_count = total - alive_count;
        let alive_fraction = alive_count as f64 / total as f64;
        let alive_dead_ratio = if dead_count == 0 {
            f64::INFINITY
        } else {
            alive_count as f64 / dead_count as f64
        };

        self.push_stability(stability);

        let snapshot = GenerationStats {
            generation,
            stability,
            alive_fraction,
            alive_count,
            dead_count,
            alive_dead_ratio,
            mean_stability: self.mean_stability(),
            stddev_stability: self.stddev_stability(),
        };
        self.snapshots.push(snapshot.clone());
        Ok(snapshot)
    }

    fn push_stability(&mut self, stability: f64) {
        self.count += 1;
        let delta = stability - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = stability - self.mean;
        self.m2 += delta * delta2;
    }

    /// Population mean of the stability ratio over all snapshots (0 when
    /// the history is empty).
    #[must_use]
    pub fn mean_stability(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    /// Population standard deviation of the stability ratio over all
    /// snapshots (0 when the history is empty).
    #[must_use]
    pub fn stddev_stability(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.m2 / self.count as f64).sqrt()
        }
    }

    #[must_use]
    pub fn snapshots(&self) -> &[GenerationStats] {
        &self.snapshots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
