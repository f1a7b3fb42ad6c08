//! Headless simulation driver.
//!
//! The runner owns everything the engine deliberately does not: the
//! generation counter, the previous/next grid buffer pair, the statistics
//! history, and the run log. Each iteration advances the grid, observes the
//! transition, records the snapshot, then swaps the two buffers instead of
//! copying them.

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use tessella_core::{advance_into, seed, Grid, Metrics, SimConfig, StatsHistory};
use tessella_data::{GenerationStats, RunSummary};
use tessella_io::{now_rfc3339, HistoryLogger, RunEvent};

/// A configured simulation run.
pub struct Simulation {
    config: SimConfig,
    /// Seed actually used, recorded even when it was drawn at random.
    seed: u64,
    previous: Grid,
    next: Grid,
    generation: u64,
    history: StatsHistory,
    logger: HistoryLogger,
    metrics: Metrics,
}

impl Simulation {
    /// Validates the configuration, seeds the initial grid, and prepares
    /// the buffer pair.
    pub fn new(config: SimConfig, logger: HistoryLogger) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let previous = seed::build_initial_grid(&config, &mut rng)?;
        let next = previous.clone();
        Ok(Self {
            config,
            seed,
            previous,
            next,
            generation: 1,
            history: StatsHistory::new(),
            logger,
            metrics: Metrics::new(),
        })
    }

    /// Advances one generation and records its statistics.
    pub fn step(&mut self) -> Result<GenerationStats> {
        let started = Instant::now();
        advance_into(
            &self.previous,
            &mut self.next,
            self.generation,
            self.config.wraparound,
        )?;
        let snapshot = self
            .history
            .observe(&self.previous, &self.next, self.generation)?;
        self.logger.log_event(&RunEvent::Snapshot {
            generation: self.generation,
            stats: snapshot.clone(),
            timestamp: now_rfc3339(),
        })?;
        self.metrics
            .record_generation(started.elapsed(), snapshot.alive_count, snapshot.stability);

        // The freshly written buffer becomes the previous generation; the
        // stale one is overwritten on the next call.
        std::mem::swap(&mut self.previous, &mut self.next);
        self.generation += 1;
        Ok(snapshot)
    }

    /// Runs to the configured generation bound and returns the summary.
    pub fn run(&mut self) -> Result<RunSummary> {
        self.logger.log_event(&RunEvent::Started {
            grid_size: self.config.grid_size,
            wraparound: self.config.wraparound,
            pattern: format!("{:?}", self.config.pattern),
            seed: self.seed,
            fingerprint: self.config.fingerprint(),
            timestamp: now_rfc3339(),
        })?;

        while self.generation <= self.config.max_generations {
            self.step()?;
        }

        let summary = RunSummary {
            generations: self.history.len() as u64,
            mean_stability: self.history.mean_stability(),
            stddev_stability: self.history.stddev_stability(),
            final_alive_fraction: self.previous.alive_count() as f64
                / self.previous.cell_count() as f64,
        };
        self.logger.log_event(&RunEvent::Finished {
            summary: summary.clone(),
            timestamp: now_rfc3339(),
        })?;
        self.metrics.log_event(
            "RunComplete",
            &format!(
                "{} generations in {:?}",
                summary.generations,
                self.metrics.elapsed()
            ),
        );
        Ok(summary)
    }

    /// The most recently completed generation's grid.
    #[must_use]
    pub fn current_grid(&self) -> &Grid {
        &self.previous
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn history(&self) -> &StatsHistory {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
