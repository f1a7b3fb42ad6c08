//! Run metrics collection for the simulation.
//!
//! Provides structured logging and counters for monitoring the progress of
//! a run without touching the engine itself.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Interval (in generations) between periodic progress log lines.
const LOG_INTERVAL: u64 = 100;

/// Metrics collector for a simulation run.
pub struct Metrics {
    generation_count: AtomicU64,
    alive_count: AtomicU64,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            generation_count: AtomicU64::new(0),
            alive_count: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed generation with its duration and statistics.
    pub fn record_generation(&self, duration: Duration, alive: usize, stability: f64) {
        self.generation_count.fetch_add(1, Ordering::Relaxed);
        self.alive_count.store(alive as u64, Ordering::Relaxed);

        let generation = self.generation_count.load(Ordering::Relaxed);
        if generation % LOG_INTERVAL == 0 {
            tracing::info!(
                generation = generation,
                alive = alive,
                stability = stability,
                duration_us = duration.as_micros() as u64,
                "Simulation generation"
            );
        }
    }

    /// Increments a named counter.
    pub fn increment_counter(&self, name: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Gets the number of generations recorded so far.
    #[must_use]
    pub fn generation_count(&self) -> u64 {
        self.generation_count.load(Ordering::Relaxed)
    }

    /// Gets the live-cell count of the latest recorded generation.
    #[must_use]
    pub fn alive_count(&self) -> u64 {
        self.alive_count.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs a simulation event.
    pub fn log_event(&self, event_type: &str, details: &str) {
        tracing::info!(event_type = event_type, details = details, "Run event");
    }

    /// Logs a warning.
    pub fn log_warning(&self, message: &str) {
        tracing::warn!(message);
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
